//! Core library for the `meteo` CLI.
//!
//! This crate defines:
//! - WMO weather-code classification and the commentary picked from it
//! - Open-Meteo geocoding and forecast clients behind an [`HttpClient`] seam
//! - Terminal rendering of current conditions and daily forecasts
//!
//! It is used by `meteo-cli`, but the pipeline functions can be driven by any
//! [`HttpClient`] and any `std::io::Write` sink.

pub mod config;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod provider;
pub mod quips;
pub mod render;
pub mod wmo;

pub use config::{Config, clamp_days};
pub use error::{Result, WeatherError};
pub use model::{CurrentConditions, DailyForecast, DailyForecastEntry, Forecast, Location};
pub use pipeline::{show_current, show_forecast};
pub use provider::{HttpClient, ReqwestHttpClient};
pub use render::{Palette, Presenter, color_enabled};
pub use wmo::WeatherCode;
