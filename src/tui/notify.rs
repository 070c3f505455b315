use std::io::Write;

use chrono::NaiveDateTime;

/// Delivers a reminder to the user.
pub trait Notifier {
    fn notify(&mut self, title: &str, body: &str);
}

/// Rings the terminal bell; the toast itself is drawn by the app.
pub struct TerminalNotifier {
    pub sound: bool,
}

impl Notifier for TerminalNotifier {
    fn notify(&mut self, title: &str, body: &str) {
        log::info!("{}: {}", title, body);
        if self.sound {
            let mut out = std::io::stdout();
            let _ = out.write_all(b"\x07").and_then(|_| out.flush());
        }
    }
}

/// Notification currently shown on screen.
#[derive(Debug, Clone)]
pub struct Toast {
    pub title: String,
    pub body: String,
    pub raised_at: NaiveDateTime,
}

impl Toast {
    pub const LIFETIME_SECS: i64 = 60;

    pub fn expired(&self, now: NaiveDateTime) -> bool {
        (now - self.raised_at).num_seconds() >= Self::LIFETIME_SECS
    }
}
