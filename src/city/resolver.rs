use anyhow::Result;
use rusqlite::Connection;

use crate::db::repository::CityRepo;
use crate::error::LookupFailure;

/// Queries shorter than this never reach the remote lookup.
pub const MIN_QUERY_CHARS: usize = 2;

/// Free-text city lookup.
pub trait CitySearch: Send + Sync {
    fn search(&self, query: &str, limit: usize) -> Result<Vec<String>, LookupFailure>;
}

/// Coordinates to city name. `Ok(None)` when the service knows no city there.
pub trait ReverseGeocoder: Send + Sync {
    fn city_at(&self, lat: f64, lon: f64) -> Result<Option<String>, LookupFailure>;
}

/// Current device position, if the capability is available.
pub trait Locator: Send + Sync {
    fn current_position(&self) -> Option<(f64, f64)>;
}

/// Position taken from the `[location]` config section.
#[derive(Debug, Clone, Default)]
pub struct ConfiguredLocator {
    pub position: Option<(f64, f64)>,
}

impl Locator for ConfiguredLocator {
    fn current_position(&self) -> Option<(f64, f64)> {
        self.position
    }
}

pub fn search(
    source: &dyn CitySearch,
    query: &str,
    limit: usize,
) -> Result<Vec<String>, LookupFailure> {
    let query = query.trim();
    if query.chars().count() < MIN_QUERY_CHARS {
        return Ok(Vec::new());
    }
    let mut names = source.search(query, limit)?;
    names.truncate(limit);
    Ok(names)
}

pub fn resolve_from_coordinates(
    geocoder: &dyn ReverseGeocoder,
    lat: f64,
    lon: f64,
) -> Result<Option<String>, LookupFailure> {
    Ok(geocoder
        .city_at(lat, lon)?
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty()))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CitySource {
    /// Picked in an earlier session.
    Saved(String),
    /// Found from the device position; not persisted yet.
    Located(String),
}

impl CitySource {
    pub fn name(&self) -> &str {
        match self {
            CitySource::Saved(c) | CitySource::Located(c) => c,
        }
    }
}

/// Saved city first, then device position. The locator is never consulted
/// when a city was saved.
pub fn resolve_startup_city(
    saved: Option<String>,
    locator: &dyn Locator,
    geocoder: &dyn ReverseGeocoder,
) -> Result<Option<CitySource>, LookupFailure> {
    if let Some(city) = saved {
        return Ok(Some(CitySource::Saved(city)));
    }
    let Some((lat, lon)) = locator.current_position() else {
        return Ok(None);
    };
    Ok(resolve_from_coordinates(geocoder, lat, lon)?.map(CitySource::Located))
}

/// Startup policy against the store: a located city is saved like a user pick.
pub fn startup_city(
    conn: &Connection,
    locator: &dyn Locator,
    geocoder: &dyn ReverseGeocoder,
) -> Result<Option<String>> {
    let saved = CityRepo::get(conn)?;
    let Some(source) = resolve_startup_city(saved, locator, geocoder)? else {
        return Ok(None);
    };
    if let CitySource::Located(city) = &source {
        log::info!("Located city: {}", city);
        CityRepo::set(conn, city)?;
    }
    Ok(Some(source.name().to_string()))
}
