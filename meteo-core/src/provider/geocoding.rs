use serde::Deserialize;
use tracing::debug;

use crate::{
    config::Config,
    error::{Result, WeatherError},
    model::Location,
};

use super::HttpClient;

#[derive(Debug, Deserialize)]
struct GeoResponse {
    #[serde(default)]
    results: Option<Vec<GeoResult>>,
}

#[derive(Debug, Deserialize)]
struct GeoResult {
    name: Option<String>,
    country: Option<String>,
    latitude: f64,
    longitude: f64,
    timezone: Option<String>,
}

/// Resolve free text to the single best-matching place.
///
/// Open-Meteo leaves `results` out entirely when nothing matches; that, an
/// explicit `null` and an empty list all mean [`WeatherError::NotFound`].
pub async fn resolve_city<H>(http: &H, config: &Config, city: &str) -> Result<Location>
where
    H: HttpClient + ?Sized,
{
    let query = [
        ("name", city.to_string()),
        ("count", "1".to_string()),
        ("language", "en".to_string()),
        ("format", "json".to_string()),
    ];

    let body = http.get_json(&config.geocoding_url, &query, config.timeout).await?;

    let parsed: GeoResponse = serde_json::from_value(body).map_err(|source| {
        WeatherError::InvalidResponse { url: config.geocoding_url.clone(), source }
    })?;

    let best = parsed
        .results
        .and_then(|results| results.into_iter().next())
        .ok_or_else(|| WeatherError::NotFound { city: city.to_string() })?;

    let location = Location {
        name: best.name.unwrap_or_else(|| city.to_string()),
        country: best.country,
        latitude: best.latitude,
        longitude: best.longitude,
        timezone: best.timezone.unwrap_or_else(|| "auto".to_string()),
    };

    debug!(
        city,
        label = %location.label(),
        lat = location.latitude,
        lon = location.longitude,
        tz = %location.timezone,
        "resolved location"
    );

    Ok(location)
}
