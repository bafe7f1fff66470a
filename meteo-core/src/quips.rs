//! One-line commentary attached to the current block and each forecast day.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::wmo::{WeatherCode, is_cold, is_hot, is_windy};

pub const STORM: &str = "Thunder buddies? Maybe stay indoors today ⛈️";
pub const RAIN: &str = "Umbrella: highly recommended ☔";
pub const SNOW: &str = "Build a tiny snowman for me ⛄";
pub const WINDY: &str = "Hold onto your hat — it’s breezy 🎩💨";
pub const HOT: &str = "Sunscreen > regrets. Stay cool 😎";
pub const COLD: &str = "Layers on layers — stay warm 🧣";
pub const CLEAR: &str = "Sun’s out, serotonin’s up 🌤️";
pub const CLOUDY: &str = "Cloudy mood? Nah, cozy vibe ☁️";

pub const GENERIC: [&str; 4] = [
    "Weather brought to you by Mother Nature™",
    "Perfect time for a tiny walk 🚶",
    "Hydrate and dominate 💧",
    "Skies change, vibes stay ✨",
];

pub const DAILY_STORM: &str = "⚠️ stormy";
pub const DAILY_UMBRELLA: &str = "bring umbrella";
pub const DAILY_SHOWERS: &str = "light showers";
pub const DAILY_SNOW: &str = "bundle up";
pub const DAILY_CLEAR: &str = "sunglasses?";
pub const DAILY_CLOUDS: &str = "cloud cover";
pub const DAILY_PICNIC: &str = "maybe picnic?";
pub const DAILY_DEFAULT: &str = "you got this";

/// Precipitation probability (%) at which a rainy day calls for an umbrella.
pub const UMBRELLA_PROBABILITY: f64 = 60.0;

/// Quip for the current conditions. The first matching rule wins:
/// storm, rain, snow, wind, heat, cold, clear, cloud, then a random generic one.
pub fn quip_for_current<R: Rng + ?Sized>(
    code: WeatherCode,
    temp_c: Option<f64>,
    wind_kmh: Option<f64>,
    rng: &mut R,
) -> &'static str {
    if code.is_stormy() {
        STORM
    } else if code.is_rainy() {
        RAIN
    } else if code.is_snowy() {
        SNOW
    } else if is_windy(wind_kmh) {
        WINDY
    } else if is_hot(temp_c) {
        HOT
    } else if is_cold(temp_c) {
        COLD
    } else if code.is_clearish() {
        CLEAR
    } else if code.is_cloudy() {
        CLOUDY
    } else {
        GENERIC.choose(rng).copied().unwrap_or(GENERIC[0])
    }
}

/// Short tail for a forecast line. `day_index` is the zero-based position in the printed list.
pub fn quip_for_daily(code: WeatherCode, precip_pct: Option<f64>, day_index: usize) -> &'static str {
    if code.is_stormy() {
        return DAILY_STORM;
    }
    if code.is_rainy() {
        return match precip_pct {
            Some(p) if p >= UMBRELLA_PROBABILITY => DAILY_UMBRELLA,
            _ => DAILY_SHOWERS,
        };
    }
    if code.is_snowy() {
        return DAILY_SNOW;
    }

    match code.0 {
        0 | 1 => DAILY_CLEAR,
        2 | 3 => DAILY_CLOUDS,
        _ if day_index % 3 == 0 => DAILY_PICNIC,
        _ => DAILY_DEFAULT,
    }
}
