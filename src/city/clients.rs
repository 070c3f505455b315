use reqwest::blocking::Client;
use serde::Deserialize;

use super::resolver::{CitySearch, ReverseGeocoder};
use crate::error::LookupFailure;
use crate::utils::http::get_json;

#[derive(Debug, Deserialize)]
struct Commune {
    nom: Option<String>,
}

/// French communes search (geo.api.gouv.fr).
pub struct GeoApiClient {
    client: Client,
    url: String,
}

impl GeoApiClient {
    pub fn new(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

impl CitySearch for GeoApiClient {
    fn search(&self, query: &str, limit: usize) -> Result<Vec<String>, LookupFailure> {
        let limit = limit.to_string();
        let communes: Vec<Commune> = get_json(self.client.get(&self.url).query(&[
            ("nom", query),
            ("fields", "nom"),
            ("limit", limit.as_str()),
        ]))?;
        Ok(parse_communes(communes))
    }
}

fn parse_communes(communes: Vec<Commune>) -> Vec<String> {
    communes.into_iter().filter_map(|c| c.nom).collect()
}

#[derive(Debug, Deserialize)]
struct ReverseGeocode {
    #[serde(default)]
    city: Option<String>,
}

/// Client-side reverse geocoding (bigdatacloud.net).
pub struct BigDataCloudClient {
    client: Client,
    url: String,
    language: String,
}

impl BigDataCloudClient {
    pub fn new(client: Client, url: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
            language: language.into(),
        }
    }
}

impl ReverseGeocoder for BigDataCloudClient {
    fn city_at(&self, lat: f64, lon: f64) -> Result<Option<String>, LookupFailure> {
        let body: ReverseGeocode = get_json(self.client.get(&self.url).query(&[
            ("latitude", lat.to_string()),
            ("longitude", lon.to_string()),
            ("localityLanguage", self.language.clone()),
        ]))?;
        Ok(body.city.filter(|c| !c.is_empty()))
    }
}
