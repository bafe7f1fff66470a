//! WMO weather interpretation codes as reported by Open-Meteo.

use std::fmt;

/// Description and pictogram for codes outside the table.
pub const FALLBACK: (&str, &str) = ("Unknown", "❔");

pub const RAIN_CODES: &[i32] = &[51, 53, 55, 56, 57, 61, 63, 65, 66, 67, 80, 81, 82];
pub const SNOW_CODES: &[i32] = &[71, 73, 75, 77, 85, 86];
pub const STORM_CODES: &[i32] = &[95, 96, 99];
pub const CLOUD_CODES: &[i32] = &[2, 3, 45, 48];
pub const CLEAR_CODES: &[i32] = &[0, 1];

/// Celsius.
pub const HOT_THRESHOLD: f64 = 28.0;
/// Celsius.
pub const COLD_THRESHOLD: f64 = 5.0;
/// km/h.
pub const WINDY_THRESHOLD: f64 = 30.0;

/// A WMO code. A missing code from the provider is [`WeatherCode::UNKNOWN`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WeatherCode(pub i32);

impl WeatherCode {
    pub const UNKNOWN: WeatherCode = WeatherCode(-1);

    pub fn from_reading(code: Option<i32>) -> Self {
        code.map(WeatherCode).unwrap_or(Self::UNKNOWN)
    }

    /// Description and pictogram.
    pub fn describe(self) -> (&'static str, &'static str) {
        match self.0 {
            0 => ("Clear sky", "☀️"),
            1 => ("Mostly clear", "🌤️"),
            2 => ("Partly cloudy", "⛅"),
            3 => ("Overcast", "☁️"),
            45 => ("Fog", "🌫️"),
            48 => ("Depositing rime fog", "🌫️"),
            51 => ("Light drizzle", "🌦️"),
            53 => ("Moderate drizzle", "🌦️"),
            55 => ("Dense drizzle", "🌧️"),
            56 => ("Light freezing drizzle", "🌧️"),
            57 => ("Dense freezing drizzle", "🌧️"),
            61 => ("Slight rain", "🌧️"),
            63 => ("Rain", "🌧️"),
            65 => ("Heavy rain", "🌧️"),
            66 => ("Light freezing rain", "🌧️"),
            67 => ("Heavy freezing rain", "🌧️"),
            71 => ("Slight snow fall", "🌨️"),
            73 => ("Snow fall", "🌨️"),
            75 => ("Heavy snow fall", "❄️"),
            77 => ("Snow grains", "🌨️"),
            80 => ("Rain showers", "🌦️"),
            81 => ("Heavy rain showers", "🌧️"),
            82 => ("Violent rain showers", "⛈️"),
            85 => ("Snow showers", "🌨️"),
            86 => ("Heavy snow showers", "❄️"),
            95 => ("Thunderstorm", "⛈️"),
            96 => ("Thunderstorm, slight hail", "⛈️"),
            99 => ("Thunderstorm, heavy hail", "⛈️"),
            _ => FALLBACK,
        }
    }

    pub fn is_rainy(self) -> bool {
        RAIN_CODES.contains(&self.0)
    }

    pub fn is_snowy(self) -> bool {
        SNOW_CODES.contains(&self.0)
    }

    pub fn is_stormy(self) -> bool {
        STORM_CODES.contains(&self.0)
    }

    /// Overcast and fog variants.
    pub fn is_cloudy(self) -> bool {
        CLOUD_CODES.contains(&self.0)
    }

    /// Clear or mostly clear.
    pub fn is_clearish(self) -> bool {
        CLEAR_CODES.contains(&self.0)
    }
}

impl fmt::Display for WeatherCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (description, pictogram) = self.describe();
        write!(f, "{pictogram} {description}")
    }
}

pub fn is_hot(temp_c: Option<f64>) -> bool {
    temp_c.is_some_and(|t| t >= HOT_THRESHOLD)
}

pub fn is_cold(temp_c: Option<f64>) -> bool {
    temp_c.is_some_and(|t| t <= COLD_THRESHOLD)
}

pub fn is_windy(wind_kmh: Option<f64>) -> bool {
    wind_kmh.is_some_and(|w| w >= WINDY_THRESHOLD)
}
