use serde::Deserialize;

/// Best geocoding match for a city query.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub name: String,
    pub country: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub timezone: String,
}

impl Location {
    /// "Paris, France", or just the name when the country is unknown.
    pub fn label(&self) -> String {
        match &self.country {
            Some(country) => format!("{}, {}", self.name, country),
            None => self.name.clone(),
        }
    }
}

/// The `current` block of a forecast response. Every reading may be absent.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CurrentConditions {
    pub time: Option<String>,
    pub weather_code: Option<i32>,
    #[serde(rename = "temperature_2m")]
    pub temperature: Option<f64>,
    pub apparent_temperature: Option<f64>,
    #[serde(rename = "relative_humidity_2m")]
    pub humidity: Option<f64>,
    #[serde(rename = "wind_speed_10m")]
    pub wind_speed: Option<f64>,
}

/// The `daily` block: parallel arrays indexed by day.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DailyForecast {
    pub time: Vec<String>,
    pub weather_code: Vec<Option<i32>>,
    #[serde(rename = "temperature_2m_max")]
    pub temperature_max: Vec<Option<f64>>,
    #[serde(rename = "temperature_2m_min")]
    pub temperature_min: Vec<Option<f64>>,
    #[serde(rename = "precipitation_probability_max")]
    pub precipitation_probability: Vec<Option<f64>>,
}

/// One day of [`DailyForecast`], with `None` wherever an array ran short.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyForecastEntry<'a> {
    pub date: &'a str,
    pub weather_code: Option<i32>,
    pub temperature_max: Option<f64>,
    pub temperature_min: Option<f64>,
    pub precipitation_probability: Option<f64>,
}

impl DailyForecast {
    /// First `days` entries, never more than there are dates.
    pub fn entries(&self, days: usize) -> Vec<DailyForecastEntry<'_>> {
        fn at<T: Copy>(values: &[Option<T>], i: usize) -> Option<T> {
            values.get(i).copied().flatten()
        }

        self.time
            .iter()
            .take(days)
            .enumerate()
            .map(|(i, date)| DailyForecastEntry {
                date: date.as_str(),
                weather_code: at(&self.weather_code, i),
                temperature_max: at(&self.temperature_max, i),
                temperature_min: at(&self.temperature_min, i),
                precipitation_probability: at(&self.precipitation_probability, i),
            })
            .collect()
    }
}

/// Current conditions plus daily outlook for one location.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Forecast {
    pub current: CurrentConditions,
    pub daily: DailyForecast,
}
