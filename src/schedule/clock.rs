use chrono::{NaiveDateTime, NaiveTime, Timelike};

/// Turns a fast UI tick into one event per wall-clock minute.
///
/// Only the minute being observed is ever reported: if the process was
/// suspended across several minutes, the skipped ones are not replayed.
#[derive(Debug, Default)]
pub struct MinuteClock {
    last: Option<NaiveDateTime>,
}

impl MinuteClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// `Some(minute)` the first time a given minute is seen.
    pub fn advance(&mut self, now: NaiveDateTime) -> Option<NaiveTime> {
        let minute = now.with_second(0)?.with_nanosecond(0)?;
        if self.last == Some(minute) {
            return None;
        }
        self.last = Some(minute);
        Some(minute.time())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 18)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    #[test]
    fn reports_each_minute_once() {
        let mut clock = MinuteClock::new();
        assert_eq!(clock.advance(at(11, 54, 58)), NaiveTime::from_hms_opt(11, 54, 0));
        assert_eq!(clock.advance(at(11, 54, 59)), None);
        assert_eq!(clock.advance(at(11, 55, 0)), NaiveTime::from_hms_opt(11, 55, 0));
        assert_eq!(clock.advance(at(11, 55, 30)), None);
    }

    #[test]
    fn gap_only_reports_the_current_minute() {
        let mut clock = MinuteClock::new();
        clock.advance(at(11, 50, 0));
        assert_eq!(clock.advance(at(12, 3, 10)), NaiveTime::from_hms_opt(12, 3, 0));
        assert_eq!(clock.advance(at(12, 3, 40)), None);
    }
}
