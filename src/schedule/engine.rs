//! Minute-granularity scheduling over one day's five prayer slots.
//!
//! Everything here is a pure function of the day's times, the completion
//! record and the current time of day. Seconds in `now` are ignored and
//! nothing wraps past midnight.

use chrono::{NaiveTime, Timelike};

use crate::models::{Alert, AlertKind, DailyCompletion, PrayerName, PrayerTimes};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub completed: usize,
    pub total: usize,
}

impl Progress {
    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.completed as f64 / self.total as f64
        }
    }
}

fn minute_of_day(t: NaiveTime) -> i64 {
    (t.hour() * 60 + t.minute()) as i64
}

pub fn progress(completion: &DailyCompletion) -> Progress {
    Progress {
        completed: completion.completed_count(),
        total: PrayerName::ALL.len(),
    }
}

/// The closest prayer at or after `now`. Equal times resolve to the earlier
/// prayer in canonical order.
pub fn next_prayer(times: &PrayerTimes, now: NaiveTime) -> Option<PrayerName> {
    let now = minute_of_day(now);
    let mut best: Option<(PrayerName, i64)> = None;
    for (prayer, at) in times.iter() {
        let diff = minute_of_day(at) - now;
        if diff >= 0 && best.is_none_or(|(_, d)| diff < d) {
            best = Some((prayer, diff));
        }
    }
    best.map(|(p, _)| p)
}

/// Minutes from `now` to the prayer; negative once it has passed.
pub fn minutes_until(times: &PrayerTimes, prayer: PrayerName, now: NaiveTime) -> i64 {
    minute_of_day(times.at(prayer)) - minute_of_day(now)
}

/// Alerts due at exactly this minute for prayers not yet ticked off.
pub fn due_alerts(
    times: &PrayerTimes,
    completion: &DailyCompletion,
    now: NaiveTime,
    offset_minutes: u32,
) -> Vec<Alert> {
    let now = minute_of_day(now);
    let mut alerts = Vec::new();
    for (prayer, at) in times.iter() {
        if completion.is_done(prayer) {
            continue;
        }
        let at = minute_of_day(at);
        if now == at {
            alerts.push(Alert {
                kind: AlertKind::OnTime,
                prayer,
            });
        }
        if now == at - offset_minutes as i64 {
            alerts.push(Alert {
                kind: AlertKind::Advance,
                prayer,
            });
        }
    }
    alerts
}
