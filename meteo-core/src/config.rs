use std::time::Duration;

pub const GEOCODING_URL: &str = "https://geocoding-api.open-meteo.com/v1/search";
pub const FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";

/// Bound applied to each outbound request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

pub const MIN_FORECAST_DAYS: u8 = 1;
pub const MAX_FORECAST_DAYS: u8 = 16;

/// Endpoints and limits for one invocation.
///
/// There is no config file; the CLI builds this from flags/environment and
/// everything else uses [`Config::default`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub geocoding_url: String,
    pub forecast_url: String,
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            geocoding_url: GEOCODING_URL.to_string(),
            forecast_url: FORECAST_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl Config {
    pub fn with_geocoding_url(mut self, url: impl Into<String>) -> Self {
        self.geocoding_url = url.into();
        self
    }

    pub fn with_forecast_url(mut self, url: impl Into<String>) -> Self {
        self.forecast_url = url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Clamp a requested day count into the range the forecast service accepts.
pub fn clamp_days(days: i64) -> u8 {
    days.clamp(MIN_FORECAST_DAYS.into(), MAX_FORECAST_DAYS.into()) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_open_meteo() {
        let cfg = Config::default();
        assert_eq!(cfg.geocoding_url, GEOCODING_URL);
        assert_eq!(cfg.forecast_url, FORECAST_URL);
        assert_eq!(cfg.timeout, Duration::from_secs(15));
    }

    #[test]
    fn builders_override_fields() {
        let cfg = Config::default()
            .with_geocoding_url("http://127.0.0.1:1/search")
            .with_forecast_url("http://127.0.0.1:1/forecast")
            .with_timeout(Duration::from_secs(2));

        assert_eq!(cfg.geocoding_url, "http://127.0.0.1:1/search");
        assert_eq!(cfg.forecast_url, "http://127.0.0.1:1/forecast");
        assert_eq!(cfg.timeout, Duration::from_secs(2));
    }

    #[test]
    fn clamp_days_bounds() {
        assert_eq!(clamp_days(0), 1);
        assert_eq!(clamp_days(-4), 1);
        assert_eq!(clamp_days(1), 1);
        assert_eq!(clamp_days(3), 3);
        assert_eq!(clamp_days(16), 16);
        assert_eq!(clamp_days(20), 16);
    }
}
