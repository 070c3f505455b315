use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};
use unicode_width::UnicodeWidthStr;

/// Format a countdown in minutes to "Xh Ym" or "Ym"
pub fn format_countdown(minutes: i64) -> String {
    if minutes <= 0 {
        return "now".to_string();
    }
    let hours = minutes / 60;
    let mins = minutes % 60;
    if hours > 0 {
        format!("{}h {}m", hours, mins)
    } else {
        format!("{}m", mins)
    }
}

/// Format a NaiveTime to "HH:MM"
pub fn format_time(t: NaiveTime) -> String {
    t.format("%H:%M").to_string()
}

/// Create a simple ASCII progress bar
pub fn progress_bar(filled: usize, total: usize, width: usize) -> String {
    if total == 0 {
        return "░".repeat(width);
    }
    let ratio = (filled as f64 / total as f64).min(1.0);
    let filled_count = (ratio * width as f64).round() as usize;
    let empty_count = width.saturating_sub(filled_count);
    format!("{}{}", "█".repeat(filled_count), "░".repeat(empty_count))
}

/// Right-pad to a terminal column width; emoji and accented names count as
/// they are displayed.
pub fn pad_display(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    format!("{}{}", s, " ".repeat(width.saturating_sub(w)))
}

fn chrono_locale(tag: &str) -> chrono::Locale {
    match tag.to_lowercase().replace('-', "_").as_str() {
        "fr" | "fr_fr" => chrono::Locale::fr_FR,
        "de" | "de_de" => chrono::Locale::de_DE,
        "en_gb" => chrono::Locale::en_GB,
        _ => chrono::Locale::en_US,
    }
}

/// Long calendar date in the configured locale, e.g. "dimanche 18 octobre 2026".
pub fn format_long_date(date: NaiveDate, locale: &str) -> String {
    let Some(noon) = date.and_hms_opt(12, 0, 0) else {
        return date.format("%Y-%m-%d").to_string();
    };
    Utc.from_utc_datetime(&noon)
        .format_localized("%A %-d %B %Y", chrono_locale(locale))
        .to_string()
}
