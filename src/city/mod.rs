pub mod clients;
pub mod resolver;

pub use clients::{BigDataCloudClient, GeoApiClient};
pub use resolver::{CitySearch, ConfiguredLocator, Locator, ReverseGeocoder};
