use anyhow::{anyhow, bail, Context, Result};
use chrono::{Local, NaiveDate, NaiveTime};
use rusqlite::Connection;
use std::str::FromStr;

use crate::city::resolver::{self, startup_city, MIN_QUERY_CHARS};
use crate::config::AppConfig;
use crate::db::repository::{CityRepo, CompletionRepo};
use crate::lookups::Lookups;
use crate::models::{DailyCompletion, PrayerName, PrayerTimes};
use crate::schedule::{minutes_until, next_prayer, progress};
use crate::utils::format::{format_countdown, format_long_date, format_time, progress_bar};

// ─── ANSI helpers ────────────────────────────────────────────────────────────

macro_rules! println_colored {
    ($color:expr, $($arg:tt)*) => {{
        print!("{}", $color);
        print!($($arg)*);
        println!("\x1b[0m");
    }};
}

const GREEN: &str = "\x1b[32m";
const AMBER: &str = "\x1b[33m";
const DIM: &str = "\x1b[2m";
const BOLD: &str = "\x1b[1m";
const GOLD: &str = "\x1b[38;2;212;175;90m";

fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Startup pipeline for one-shot commands: pick the city, then fetch its times.
fn load_today(conn: &Connection, lookups: &Lookups, date: NaiveDate) -> Result<Option<PrayerTimes>> {
    let Some(city) = startup_city(conn, lookups.locator.as_ref(), lookups.geocoder.as_ref())? else {
        return Ok(None);
    };
    let times = lookups
        .provider
        .fetch(&city, date)
        .with_context(|| format!("Fetching prayer times for {}", city))?;
    Ok(Some(times))
}

fn print_progress(completion: &DailyCompletion) {
    let p = progress(completion);
    println!(
        "  {}  {}/{} prayers completed",
        progress_bar(p.completed, p.total, 20),
        p.completed,
        p.total
    );
}

fn print_times(config: &AppConfig, times: &PrayerTimes, completion: &DailyCompletion, now: NaiveTime) {
    println!();
    println_colored!(
        GOLD,
        "  Prayer Times — {} ({})",
        times.city,
        format_long_date(times.date, &config.display.locale)
    );
    println!();

    let next = next_prayer(times, now);
    for (prayer, at) in times.iter() {
        let mark = if completion.is_done(prayer) { "[x]" } else { "[ ]" };
        let line = format!("  {}  {:<8}  {}  {}", prayer.icon(), prayer.as_str(), format_time(at), mark);
        if next == Some(prayer) {
            println_colored!(AMBER, "{}  ◀ next", line);
        } else if at < now {
            println_colored!(DIM, "{}", line);
        } else {
            println_colored!(BOLD, "{}", line);
        }
    }

    println!();
    print_progress(completion);

    if let Some(prayer) = next {
        println!();
        println_colored!(
            AMBER,
            "  Next: {} in {}",
            prayer,
            format_countdown(minutes_until(times, prayer, now))
        );
    }
    println!();
}

fn show_times_for(conn: &Connection, config: &AppConfig, lookups: &Lookups, city: &str) -> Result<()> {
    let date = today();
    CompletionRepo::purge_stale(conn, date)?;
    let times = lookups
        .provider
        .fetch(city, date)
        .with_context(|| format!("Fetching prayer times for {}", city))?;
    let completion = CompletionRepo::load(conn, date)?;
    print_times(config, &times, &completion, Local::now().time());
    Ok(())
}

// ─── Times ───────────────────────────────────────────────────────────────────

pub fn handle_times(conn: &Connection, config: &AppConfig, lookups: &Lookups) -> Result<()> {
    let date = today();
    CompletionRepo::purge_stale(conn, date)?;

    match load_today(conn, lookups, date)? {
        Some(times) => {
            let completion = CompletionRepo::load(conn, date)?;
            print_times(config, &times, &completion, Local::now().time());
        }
        None => {
            println_colored!(
                AMBER,
                "  No city selected. Use `salat select <city>` or set [location] in {}",
                AppConfig::config_path()?.display()
            );
        }
    }
    Ok(())
}

// ─── City selection ──────────────────────────────────────────────────────────

pub fn handle_search(config: &AppConfig, lookups: &Lookups, query: &str) -> Result<()> {
    if query.trim().chars().count() < MIN_QUERY_CHARS {
        println_colored!(DIM, "  Type at least {} characters", MIN_QUERY_CHARS);
        return Ok(());
    }
    let names = resolver::search(lookups.cities.as_ref(), query, config.api.search_limit)
        .with_context(|| format!("Searching cities matching '{}'", query))?;

    println!();
    if names.is_empty() {
        println_colored!(DIM, "  No city matches '{}'", query);
    }
    for name in &names {
        println!("  {}", name);
    }
    println!();
    Ok(())
}

pub fn handle_select(conn: &Connection, config: &AppConfig, lookups: &Lookups, city: &str) -> Result<()> {
    let city = city.trim();
    if city.is_empty() {
        bail!("City name is empty");
    }
    CityRepo::set(conn, city)?;
    println_colored!(GREEN, "  ✓ City set to {}", city);
    show_times_for(conn, config, lookups, city)
}

pub fn handle_locate(
    conn: &Connection,
    config: &AppConfig,
    lookups: &Lookups,
    lat: f64,
    lon: f64,
) -> Result<()> {
    let city = resolver::resolve_from_coordinates(lookups.geocoder.as_ref(), lat, lon)
        .context("Reverse geocoding")?
        .ok_or_else(|| anyhow!("No city found at {}, {}", lat, lon))?;
    CityRepo::set(conn, &city)?;
    println_colored!(GREEN, "  ✓ City set to {}", city);
    show_times_for(conn, config, lookups, &city)
}

// ─── Completion ──────────────────────────────────────────────────────────────

pub fn handle_mark(conn: &Connection, prayer_str: &str, undo: bool) -> Result<()> {
    let prayer = PrayerName::from_str(prayer_str).map_err(|_| {
        anyhow!(
            "Unknown prayer '{}'. Use: fajr, dhuhr, asr, maghrib, isha",
            prayer_str
        )
    })?;
    let date = today();
    CompletionRepo::purge_stale(conn, date)?;
    let completion = CompletionRepo::set(conn, date, prayer, !undo)?;

    if undo {
        println_colored!(DIM, "  ○ {} unmarked", prayer);
    } else {
        println_colored!(GREEN, "  ✓ {} marked as done", prayer);
    }
    print_progress(&completion);
    Ok(())
}

pub fn handle_status(conn: &Connection) -> Result<()> {
    let date = today();
    CompletionRepo::purge_stale(conn, date)?;
    let completion = CompletionRepo::load(conn, date)?;

    println!();
    for prayer in PrayerName::ALL {
        if completion.is_done(prayer) {
            println_colored!(GREEN, "  {}  {:<8}  ✓", prayer.icon(), prayer.as_str());
        } else {
            println_colored!(DIM, "  {}  {:<8}  ○", prayer.icon(), prayer.as_str());
        }
    }
    println!();
    print_progress(&completion);
    println!();
    Ok(())
}

// ─── Config ──────────────────────────────────────────────────────────────────

pub fn handle_config(config: &AppConfig, init: bool) -> Result<()> {
    let path = AppConfig::config_path()?;
    if init {
        if path.exists() {
            println_colored!(DIM, "  Config already exists, leaving it untouched");
        } else {
            AppConfig::default().save_to(&path)?;
            println_colored!(GREEN, "  ✓ Wrote default config");
        }
    }
    println_colored!(GOLD, "  {}", path.display());
    println!();
    print!("{}", toml::to_string_pretty(config).context("Serializing config")?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::city::resolver::fakes::{CountingLocator, FakeGeocoder, FakeSearch};
    use crate::db::migrations::run_migrations;
    use crate::prayer_times::provider::fakes::FakeProvider;
    use std::sync::atomic::Ordering;
    use std::sync::Arc;

    fn lookups(locator: Arc<CountingLocator>, provider: Arc<FakeProvider>) -> Lookups {
        Lookups {
            cities: Arc::new(FakeSearch::default()),
            geocoder: Arc::new(FakeGeocoder::returning(Some("Toulouse"))),
            locator,
            provider,
        }
    }

    #[test]
    fn selected_city_drives_the_fetch_after_restart() {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();
        CityRepo::set(&conn, "Strasbourg").unwrap();

        // fresh process: same store, new lookups
        let locator = Arc::new(CountingLocator::at(Some((43.6, 1.44))));
        let provider = Arc::new(FakeProvider::new([(6, 0), (13, 0), (16, 0), (19, 0), (20, 30)]));
        let date = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();

        let times = load_today(&conn, &lookups(locator.clone(), provider.clone()), date)
            .unwrap()
            .unwrap();
        assert_eq!(times.city, "Strasbourg");
        assert_eq!(*provider.requested.lock().unwrap(), vec!["Strasbourg".to_string()]);
        assert_eq!(locator.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn nothing_fetched_without_city_or_position() {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();
        let provider = Arc::new(FakeProvider::new([(6, 0), (13, 0), (16, 0), (19, 0), (20, 30)]));
        let date = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();

        let out = load_today(&conn, &lookups(Arc::new(CountingLocator::at(None)), provider.clone()), date).unwrap();
        assert!(out.is_none());
        assert!(provider.requested.lock().unwrap().is_empty());
    }

    #[test]
    fn unknown_prayer_is_rejected() {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();
        let err = handle_mark(&conn, "sunrise", false).unwrap_err();
        assert!(err.to_string().contains("Unknown prayer"));
    }
}
