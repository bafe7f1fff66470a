use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::{fmt::Debug, time::Duration};
use tracing::{debug, warn};

use crate::error::{Result, WeatherError};

pub mod forecast;
pub mod geocoding;

pub use forecast::fetch_forecast;
pub use geocoding::resolve_city;

/// Query string as ordered key/value pairs.
pub type Query<'a> = [(&'a str, String)];

/// Minimal HTTP surface the Open-Meteo clients need.
///
/// A failed transport, a timeout or a non-success status is an error; a
/// successful body is returned as untyped JSON for the caller to interpret.
#[async_trait]
pub trait HttpClient: Send + Sync + Debug {
    async fn get_json(&self, url: &str, query: &Query<'_>, timeout: Duration) -> Result<Value>;
}

#[derive(Debug, Clone, Default)]
pub struct ReqwestHttpClient {
    http: Client,
}

impl ReqwestHttpClient {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn get_json(&self, url: &str, query: &Query<'_>, timeout: Duration) -> Result<Value> {
        debug!(url, ?query, ?timeout, "sending request");

        let res = self.http.get(url).query(query).timeout(timeout).send().await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            warn!(url, %status, "request failed");
            return Err(WeatherError::Status {
                url: url.to_string(),
                status: status.as_u16(),
                body: truncate_body(&body),
            });
        }

        serde_json::from_str(&body)
            .map_err(|source| WeatherError::InvalidResponse { url: url.to_string(), source })
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((cut, _)) => format!("{}...", &body[..cut]),
        None => body.to_string(),
    }
}
