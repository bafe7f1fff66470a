use serde::Deserialize;
use tracing::debug;

use crate::{
    config::{Config, clamp_days},
    error::{Result, WeatherError},
    model::{CurrentConditions, DailyForecast, Forecast, Location},
};

use super::HttpClient;

pub const CURRENT_FIELDS: &str =
    "temperature_2m,apparent_temperature,relative_humidity_2m,wind_speed_10m,weather_code";
pub const DAILY_FIELDS: &str =
    "weather_code,temperature_2m_max,temperature_2m_min,precipitation_probability_max";

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    #[serde(default)]
    current: Option<CurrentConditions>,
    #[serde(default)]
    daily: Option<DailyForecast>,
}

/// Fetch current conditions and `days` of daily outlook (clamped to 1..=16).
///
/// Absent or null `current`/`daily` blocks come back empty rather than failing.
pub async fn fetch_forecast<H>(
    http: &H,
    config: &Config,
    location: &Location,
    days: i64,
) -> Result<Forecast>
where
    H: HttpClient + ?Sized,
{
    let forecast_days = clamp_days(days);
    debug!(requested = days, forecast_days, "fetching forecast");

    let query = [
        ("latitude", location.latitude.to_string()),
        ("longitude", location.longitude.to_string()),
        ("timezone", location.timezone.clone()),
        ("current", CURRENT_FIELDS.to_string()),
        ("daily", DAILY_FIELDS.to_string()),
        ("forecast_days", forecast_days.to_string()),
    ];

    let body = http.get_json(&config.forecast_url, &query, config.timeout).await?;

    let parsed: ForecastResponse = serde_json::from_value(body).map_err(|source| {
        WeatherError::InvalidResponse { url: config.forecast_url.clone(), source }
    })?;

    Ok(Forecast {
        current: parsed.current.unwrap_or_default(),
        daily: parsed.daily.unwrap_or_default(),
    })
}
