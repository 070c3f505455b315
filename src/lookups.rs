use std::sync::Arc;

use anyhow::Result;

use crate::city::{BigDataCloudClient, CitySearch, ConfiguredLocator, GeoApiClient, Locator, ReverseGeocoder};
use crate::config::AppConfig;
use crate::prayer_times::{AladhanClient, PrayerTimeProvider};
use crate::utils::http::build_client;

/// The remote collaborators and the device position, wired from config.
#[derive(Clone)]
pub struct Lookups {
    pub cities: Arc<dyn CitySearch>,
    pub geocoder: Arc<dyn ReverseGeocoder>,
    pub locator: Arc<dyn Locator>,
    pub provider: Arc<dyn PrayerTimeProvider>,
}

impl Lookups {
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let api = &config.api;
        let client = build_client(api)?;
        Ok(Self {
            cities: Arc::new(GeoApiClient::new(client.clone(), api.search_url.clone())),
            geocoder: Arc::new(BigDataCloudClient::new(
                client.clone(),
                api.reverse_geocode_url.clone(),
                api.geocode_language.clone(),
            )),
            locator: Arc::new(ConfiguredLocator {
                position: config.location.coordinates(),
            }),
            provider: Arc::new(AladhanClient::new(
                client,
                api.timings_url.clone(),
                api.country.clone(),
                api.method,
            )),
        })
    }
}
