use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::blocking::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::config::settings::ApiConfig;
use crate::error::LookupFailure;

/// Blocking client shared by every remote lookup.
pub fn build_client(api: &ApiConfig) -> Result<Client> {
    Client::builder()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .timeout(Duration::from_secs(api.request_timeout_secs))
        .build()
        .context("Building HTTP client")
}

/// Sends the request and decodes a JSON body. Transport and status errors are
/// `Network`; a body that does not match `T` is `Malformed`.
pub fn get_json<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, LookupFailure> {
    let body = request.send()?.error_for_status()?.text()?;
    decode_json(&body)
}

pub fn decode_json<T: DeserializeOwned>(body: &str) -> Result<T, LookupFailure> {
    serde_json::from_str(body).map_err(|e| LookupFailure::malformed(e.to_string()))
}
