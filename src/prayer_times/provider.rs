use chrono::{NaiveDate, NaiveTime};
use reqwest::blocking::Client;
use serde::Deserialize;
use std::collections::HashMap;

use crate::error::LookupFailure;
use crate::models::{PrayerName, PrayerTimes};
use crate::utils::http::get_json;

/// Source of the day's five prayer clock-times for a city.
pub trait PrayerTimeProvider: Send + Sync {
    fn fetch(&self, city: &str, date: NaiveDate) -> Result<PrayerTimes, LookupFailure>;
}

#[derive(Debug, Deserialize)]
struct TimingsResponse {
    data: Option<TimingsData>,
}

#[derive(Debug, Deserialize)]
struct TimingsData {
    timings: Option<HashMap<String, String>>,
}

/// AlAdhan `timingsByCity` endpoint.
pub struct AladhanClient {
    client: Client,
    url: String,
    country: String,
    method: u8,
}

impl AladhanClient {
    pub fn new(client: Client, url: impl Into<String>, country: impl Into<String>, method: u8) -> Self {
        Self {
            client,
            url: url.into(),
            country: country.into(),
            method,
        }
    }
}

impl PrayerTimeProvider for AladhanClient {
    fn fetch(&self, city: &str, date: NaiveDate) -> Result<PrayerTimes, LookupFailure> {
        let url = format!("{}/{}", self.url.trim_end_matches('/'), date.format("%d-%m-%Y"));
        let body: TimingsResponse = get_json(self.client.get(url).query(&[
            ("city", city.to_string()),
            ("country", self.country.clone()),
            ("method", self.method.to_string()),
        ]))?;
        parse_timings(body, city, date)
    }
}

/// `"05:42 (CET)"` → 05:42. Anything after the minutes is dropped.
fn parse_clock(raw: &str) -> Option<NaiveTime> {
    let hm = raw.trim().get(..5)?;
    NaiveTime::parse_from_str(hm, "%H:%M").ok()
}

fn parse_timings(body: TimingsResponse, city: &str, date: NaiveDate) -> Result<PrayerTimes, LookupFailure> {
    let timings = body
        .data
        .and_then(|d| d.timings)
        .ok_or_else(|| LookupFailure::malformed("missing data.timings"))?;

    let mut slots = [NaiveTime::MIN; 5];
    for prayer in PrayerName::ALL {
        let raw = timings
            .get(prayer.as_str())
            .ok_or_else(|| LookupFailure::malformed(format!("missing timing for {}", prayer)))?;
        slots[prayer.index()] = parse_clock(raw)
            .ok_or_else(|| LookupFailure::malformed(format!("bad time for {}: {:?}", prayer, raw)))?;
    }
    Ok(PrayerTimes::new(city, date, slots))
}
