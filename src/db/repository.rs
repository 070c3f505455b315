use anyhow::Result;
use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension};

use crate::models::{DailyCompletion, PrayerName};

pub const SELECTED_CITY_KEY: &str = "selectedCity";
pub const LAST_RESET_KEY: &str = "lastResetDate";
pub const DAILY_PREFIX: &str = "salat-";

fn iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn daily_key(date: NaiveDate) -> String {
    format!("{}{}", DAILY_PREFIX, iso(date))
}

// ─── App meta ────────────────────────────────────────────────────────────────

pub struct MetaRepo;

impl MetaRepo {
    pub fn get(conn: &Connection, key: &str) -> Result<Option<String>> {
        conn.query_row(
            "SELECT value FROM app_meta WHERE key = ?1",
            params![key],
            |row| row.get(0),
        )
        .optional()
        .map_err(anyhow::Error::from)
    }

    pub fn set(conn: &Connection, key: &str, value: &str) -> Result<()> {
        conn.execute(
            "INSERT INTO app_meta (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = ?2",
            params![key, value],
        )?;
        Ok(())
    }

    pub fn delete(conn: &Connection, key: &str) -> Result<bool> {
        let n = conn.execute("DELETE FROM app_meta WHERE key = ?1", params![key])?;
        Ok(n > 0)
    }

    pub fn keys_with_prefix(conn: &Connection, prefix: &str) -> Result<Vec<String>> {
        let mut stmt = conn.prepare("SELECT key FROM app_meta WHERE substr(key, 1, ?2) = ?1 ORDER BY key")?;
        let keys = stmt
            .query_map(params![prefix, prefix.len() as i64], |row| row.get(0))?
            .collect::<rusqlite::Result<Vec<String>>>()?;
        Ok(keys)
    }
}

// ─── Daily completion ────────────────────────────────────────────────────────

pub struct CompletionRepo;

impl CompletionRepo {
    /// Record for `date`; missing or unreadable records come back empty.
    pub fn load(conn: &Connection, date: NaiveDate) -> Result<DailyCompletion> {
        let key = daily_key(date);
        let Some(raw) = MetaRepo::get(conn, &key)? else {
            return Ok(DailyCompletion::default());
        };
        match DailyCompletion::from_json(&raw) {
            Ok(completion) => Ok(completion),
            Err(e) => {
                log::warn!("Discarding unreadable record {}: {}", key, e);
                Ok(DailyCompletion::default())
            }
        }
    }

    pub fn set(conn: &Connection, date: NaiveDate, prayer: PrayerName, value: bool) -> Result<DailyCompletion> {
        let mut completion = Self::load(conn, date)?;
        completion.set(prayer, value);
        MetaRepo::set(conn, &daily_key(date), &completion.to_json()?)?;
        Ok(completion)
    }

    /// Drops every daily record except `current`'s, at most once per calendar day.
    /// Returns how many records were removed.
    pub fn purge_stale(conn: &Connection, current: NaiveDate) -> Result<usize> {
        let today = iso(current);
        if MetaRepo::get(conn, LAST_RESET_KEY)?.as_deref() == Some(today.as_str()) {
            return Ok(0);
        }

        let keep = daily_key(current);
        let mut removed = 0;
        for key in MetaRepo::keys_with_prefix(conn, DAILY_PREFIX)? {
            if key != keep && MetaRepo::delete(conn, &key)? {
                removed += 1;
            }
        }
        MetaRepo::set(conn, LAST_RESET_KEY, &today)?;
        if removed > 0 {
            log::info!("Purged {} stale daily record(s)", removed);
        }
        Ok(removed)
    }
}

// ─── Selected city ───────────────────────────────────────────────────────────

pub struct CityRepo;

impl CityRepo {
    pub fn get(conn: &Connection) -> Result<Option<String>> {
        Ok(MetaRepo::get(conn, SELECTED_CITY_KEY)?.filter(|c| !c.trim().is_empty()))
    }

    pub fn set(conn: &Connection, city: &str) -> Result<()> {
        MetaRepo::set(conn, SELECTED_CITY_KEY, city)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::migrations::run_migrations;

    fn conn() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();
        conn
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, d).unwrap()
    }

    #[test]
    fn unknown_date_loads_empty() {
        let conn = conn();
        let c = CompletionRepo::load(&conn, day(18)).unwrap();
        assert_eq!(c.completed_count(), 0);
    }

    #[test]
    fn writes_on_one_date_do_not_touch_another() {
        let conn = conn();
        CompletionRepo::set(&conn, day(17), PrayerName::Fajr, true).unwrap();
        CompletionRepo::set(&conn, day(18), PrayerName::Asr, true).unwrap();
        CompletionRepo::set(&conn, day(18), PrayerName::Fajr, false).unwrap();

        let d17 = CompletionRepo::load(&conn, day(17)).unwrap();
        assert!(d17.is_done(PrayerName::Fajr));
        assert!(!d17.is_done(PrayerName::Asr));

        let d18 = CompletionRepo::load(&conn, day(18)).unwrap();
        assert!(d18.is_done(PrayerName::Asr));
        assert!(!d18.is_done(PrayerName::Fajr));
    }

    #[test]
    fn set_is_idempotent() {
        let conn = conn();
        CompletionRepo::set(&conn, day(18), PrayerName::Isha, true).unwrap();
        CompletionRepo::set(&conn, day(18), PrayerName::Isha, true).unwrap();
        let c = CompletionRepo::load(&conn, day(18)).unwrap();
        assert_eq!(c.completed_count(), 1);
        assert_eq!(
            MetaRepo::get(&conn, "salat-2026-10-18").unwrap().as_deref(),
            Some(r#"{"Isha":true}"#)
        );
    }

    #[test]
    fn corrupt_record_reads_as_empty() {
        let conn = conn();
        MetaRepo::set(&conn, &daily_key(day(18)), "{not json").unwrap();
        let c = CompletionRepo::load(&conn, day(18)).unwrap();
        assert_eq!(c, DailyCompletion::default());

        // and the next write replaces it cleanly
        CompletionRepo::set(&conn, day(18), PrayerName::Dhuhr, true).unwrap();
        assert!(CompletionRepo::load(&conn, day(18)).unwrap().is_done(PrayerName::Dhuhr));
    }

    #[test]
    fn purge_keeps_today_and_runs_once_per_day() {
        let conn = conn();
        CompletionRepo::set(&conn, day(15), PrayerName::Fajr, true).unwrap();
        CompletionRepo::set(&conn, day(17), PrayerName::Fajr, true).unwrap();
        CompletionRepo::set(&conn, day(18), PrayerName::Maghrib, true).unwrap();
        CityRepo::set(&conn, "Lyon").unwrap();

        assert_eq!(CompletionRepo::purge_stale(&conn, day(18)).unwrap(), 2);
        assert_eq!(
            MetaRepo::keys_with_prefix(&conn, DAILY_PREFIX).unwrap(),
            vec!["salat-2026-10-18".to_string()]
        );
        assert!(CompletionRepo::load(&conn, day(18)).unwrap().is_done(PrayerName::Maghrib));
        assert_eq!(CityRepo::get(&conn).unwrap().as_deref(), Some("Lyon"));

        // a record written for another day after the purge survives a second run today
        CompletionRepo::set(&conn, day(16), PrayerName::Asr, true).unwrap();
        assert_eq!(CompletionRepo::purge_stale(&conn, day(18)).unwrap(), 0);
        assert!(CompletionRepo::load(&conn, day(16)).unwrap().is_done(PrayerName::Asr));
        assert_eq!(
            MetaRepo::get(&conn, LAST_RESET_KEY).unwrap().as_deref(),
            Some("2026-10-18")
        );
    }

    #[test]
    fn purge_on_a_new_day_removes_yesterday() {
        let conn = conn();
        CompletionRepo::purge_stale(&conn, day(17)).unwrap();
        CompletionRepo::set(&conn, day(17), PrayerName::Isha, true).unwrap();
        assert_eq!(CompletionRepo::purge_stale(&conn, day(18)).unwrap(), 1);
        assert_eq!(CompletionRepo::load(&conn, day(17)).unwrap().completed_count(), 0);
    }

    #[test]
    fn blank_city_counts_as_unset() {
        let conn = conn();
        assert!(CityRepo::get(&conn).unwrap().is_none());
        CityRepo::set(&conn, "  ").unwrap();
        assert!(CityRepo::get(&conn).unwrap().is_none());
        CityRepo::set(&conn, "Marseille").unwrap();
        assert_eq!(CityRepo::get(&conn).unwrap().as_deref(), Some("Marseille"));
    }
}
