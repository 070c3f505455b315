use anyhow::anyhow;
use chrono::{NaiveDate, NaiveTime, Timelike};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PrayerName {
    Fajr,
    Dhuhr,
    Asr,
    Maghrib,
    Isha,
}

impl PrayerName {
    /// Canonical order across a day.
    pub const ALL: [PrayerName; 5] = [
        PrayerName::Fajr,
        PrayerName::Dhuhr,
        PrayerName::Asr,
        PrayerName::Maghrib,
        PrayerName::Isha,
    ];

    pub fn index(self) -> usize {
        match self {
            PrayerName::Fajr => 0,
            PrayerName::Dhuhr => 1,
            PrayerName::Asr => 2,
            PrayerName::Maghrib => 3,
            PrayerName::Isha => 4,
        }
    }

    /// Key used in persisted records and in the remote timings payload.
    pub fn as_str(self) -> &'static str {
        match self {
            PrayerName::Fajr => "Fajr",
            PrayerName::Dhuhr => "Dhuhr",
            PrayerName::Asr => "Asr",
            PrayerName::Maghrib => "Maghrib",
            PrayerName::Isha => "Isha",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            PrayerName::Fajr => "🌅",
            PrayerName::Dhuhr => "☀️",
            PrayerName::Asr => "☁️",
            PrayerName::Maghrib => "🌇",
            PrayerName::Isha => "🌙",
        }
    }
}

impl std::fmt::Display for PrayerName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PrayerName {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fajr" => Ok(PrayerName::Fajr),
            "dhuhr" | "zuhr" | "dhuhur" => Ok(PrayerName::Dhuhr),
            "asr" => Ok(PrayerName::Asr),
            "maghrib" => Ok(PrayerName::Maghrib),
            "isha" => Ok(PrayerName::Isha),
            _ => Err(anyhow!("Unknown prayer: {}", s)),
        }
    }
}

/// The five clock-times of one city on one date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrayerTimes {
    pub city: String,
    pub date: NaiveDate,
    slots: [NaiveTime; 5],
}

impl PrayerTimes {
    /// Seconds are dropped so every slot sits on a whole minute.
    pub fn new(city: impl Into<String>, date: NaiveDate, slots: [NaiveTime; 5]) -> Self {
        Self {
            city: city.into(),
            date,
            slots: slots.map(|t| t.with_second(0).unwrap_or(t).with_nanosecond(0).unwrap_or(t)),
        }
    }

    pub fn at(&self, prayer: PrayerName) -> NaiveTime {
        self.slots[prayer.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (PrayerName, NaiveTime)> + '_ {
        PrayerName::ALL.iter().map(move |p| (*p, self.at(*p)))
    }
}
