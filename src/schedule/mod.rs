pub mod clock;
pub mod engine;

pub use clock::MinuteClock;
pub use engine::{due_alerts, minutes_until, next_prayer, progress, Progress};
