use thiserror::Error;

/// Failure of one of the remote lookups (city search, reverse geocoding, prayer times).
#[derive(Debug, Error)]
pub enum LookupFailure {
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),
    #[error("unexpected response: {0}")]
    Malformed(String),
}

impl LookupFailure {
    pub fn malformed(msg: impl Into<String>) -> Self {
        LookupFailure::Malformed(msg.into())
    }
}
