use chrono::NaiveDate;

use super::{DailyCompletion, PrayerTimes};

/// Everything the view and the schedule engine read, scoped to `today`.
///
/// `today` is fixed when the state is built; a session that runs past
/// midnight keeps showing the day it started on.
#[derive(Debug, Clone)]
pub struct AppState {
    pub today: NaiveDate,
    pub city: Option<String>,
    pub times: Option<PrayerTimes>,
    pub completion: DailyCompletion,
}

impl AppState {
    pub fn new(today: NaiveDate, city: Option<String>, completion: DailyCompletion) -> Self {
        Self {
            today,
            city,
            times: None,
            completion,
        }
    }

    /// Swaps in a freshly fetched set of times. Times for another date are ignored.
    pub fn replace_times(&mut self, times: PrayerTimes) -> bool {
        if times.date != self.today {
            return false;
        }
        self.city = Some(times.city.clone());
        self.times = Some(times);
        true
    }
}
