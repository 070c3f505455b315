use std::collections::BTreeMap;
use std::str::FromStr;

use super::PrayerName;

/// Which prayers the user has ticked for one calendar date.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DailyCompletion {
    done: BTreeMap<PrayerName, bool>,
}

impl DailyCompletion {
    pub fn is_done(&self, prayer: PrayerName) -> bool {
        self.done.get(&prayer).copied().unwrap_or(false)
    }

    pub fn set(&mut self, prayer: PrayerName, value: bool) {
        self.done.insert(prayer, value);
    }

    pub fn completed_count(&self) -> usize {
        PrayerName::ALL.iter().filter(|p| self.is_done(**p)).count()
    }

    /// JSON object keyed by prayer name, e.g. `{"Fajr":true,"Dhuhr":false}`.
    pub fn to_json(&self) -> serde_json::Result<String> {
        let raw: BTreeMap<&str, bool> = self.done.iter().map(|(p, v)| (p.as_str(), *v)).collect();
        serde_json::to_string(&raw)
    }

    /// Keys that are not prayer names are skipped.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let raw: BTreeMap<String, serde_json::Value> = serde_json::from_str(json)?;
        let done = raw
            .into_iter()
            .filter_map(|(k, v)| {
                let prayer = PrayerName::from_str(&k).ok()?;
                Some((prayer, v.as_bool().unwrap_or(false)))
            })
            .collect();
        Ok(Self { done })
    }
}
