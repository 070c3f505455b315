pub mod provider;

pub use provider::{AladhanClient, PrayerTimeProvider};
