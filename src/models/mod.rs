pub mod alert;
pub mod completion;
pub mod prayer;
pub mod state;

pub use alert::{Alert, AlertKind};
pub use completion::DailyCompletion;
pub use prayer::{PrayerName, PrayerTimes};
pub use state::AppState;
