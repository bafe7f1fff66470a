//! Terminal rendering of current conditions and the daily table.

use chrono::{NaiveDate, NaiveDateTime};
use colored::{ColoredString, Colorize};
use rand::Rng;
use std::{
    env,
    io::{self, IsTerminal, Write},
};

use crate::{
    model::{CurrentConditions, DailyForecast},
    quips::{quip_for_current, quip_for_daily},
    wmo::WeatherCode,
};

/// Shown in place of any missing reading.
pub const PLACEHOLDER: &str = "—";

/// Signals that decide whether ANSI styling is used.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColorEnv {
    /// `NO_COLOR` is set, whatever its value.
    pub no_color: bool,
    pub is_terminal: bool,
    pub windows: bool,
    /// `WT_SESSION` or `ANSICON` is present.
    pub ansi_host: bool,
}

impl ColorEnv {
    /// Read the process environment for output going to `stream`.
    pub fn for_stream<S: IsTerminal>(stream: &S) -> Self {
        Self {
            no_color: env::var_os("NO_COLOR").is_some(),
            is_terminal: stream.is_terminal(),
            windows: cfg!(windows),
            ansi_host: ["WT_SESSION", "ANSICON"].iter().any(|key| env::var_os(key).is_some()),
        }
    }
}

pub fn color_supported(env: ColorEnv) -> bool {
    !env.no_color && env.is_terminal && (!env.windows || env.ansi_host)
}

/// Whether text written to `stream` may be styled. Stdout and stderr are
/// checked separately, since either may be redirected on its own.
pub fn color_enabled<S: IsTerminal>(stream: &S) -> bool {
    color_supported(ColorEnv::for_stream(stream))
}

/// Styling applied around text. A disabled palette returns text untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    /// An enabled palette forces `colored` on, since the terminal check was already made.
    pub fn new(enabled: bool) -> Self {
        if enabled {
            colored::control::set_override(true);
        }
        Self { enabled }
    }

    pub fn plain() -> Self {
        Self { enabled: false }
    }

    fn paint(&self, text: &str, style: fn(&str) -> ColoredString) -> String {
        if self.enabled { style(text).to_string() } else { text.to_string() }
    }

    pub fn title(&self, text: &str) -> String {
        self.paint(text, |s| s.blue().bold())
    }

    pub fn section(&self, text: &str) -> String {
        self.paint(text, |s| s.cyan().bold())
    }

    pub fn dim(&self, text: &str) -> String {
        self.paint(text, |s| s.dimmed())
    }

    pub fn error(&self, text: &str) -> String {
        self.paint(text, |s| s.red())
    }
}

pub fn fmt_temp(temp_c: Option<f64>) -> String {
    match temp_c {
        Some(t) => format!("{t:.1}°C"),
        None => PLACEHOLDER.to_string(),
    }
}

/// Bare number, or the placeholder. Whole values print without a fraction.
pub fn fmt_reading(value: Option<f64>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => PLACEHOLDER.to_string(),
    }
}

/// `2025-03-01T14:15` → `2025-03-01 14:15`. Unparseable input is echoed back.
pub fn fmt_timestamp(raw: &str) -> String {
    ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|ts| ts.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| raw.to_string())
}

/// `2025-03-01` → `Sat Mar 01`. Unparseable input is echoed back.
pub fn fmt_day(raw: &str) -> String {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map(|d| d.format("%a %b %d").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

/// Writes reports to `out`. `rng` only feeds the generic fallback quip.
#[derive(Debug)]
pub struct Presenter<W, R> {
    out: W,
    palette: Palette,
    rng: R,
}

impl<W: Write, R: Rng> Presenter<W, R> {
    pub fn new(out: W, palette: Palette, rng: R) -> Self {
        Self { out, palette, rng }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn render_current(&mut self, label: &str, current: &CurrentConditions) -> io::Result<()> {
        let p = self.palette;
        let code = WeatherCode::from_reading(current.weather_code);
        let timestamp = current.time.as_deref().map(fmt_timestamp).unwrap_or_default();
        let quip = quip_for_current(code, current.temperature, current.wind_speed, &mut self.rng);

        writeln!(self.out)?;
        writeln!(self.out, "{}", p.title(&format!("📍 {label} — Current Weather")))?;
        writeln!(self.out, "{}", p.dim(&format!("   {timestamp}")))?;
        writeln!(self.out, "   {code}")?;
        writeln!(
            self.out,
            "   🌡️ {}  (feels {})",
            fmt_temp(current.temperature),
            fmt_temp(current.apparent_temperature),
        )?;
        writeln!(
            self.out,
            "   💧 {}%   🧭 wind {} km/h",
            fmt_reading(current.humidity),
            fmt_reading(current.wind_speed),
        )?;
        writeln!(self.out, "{}", p.dim(&format!("   {quip}")))?;
        self.out.flush()
    }

    /// One line per day, at most `days` and never past the last date.
    pub fn render_forecast(&mut self, daily: &DailyForecast, days: usize) -> io::Result<()> {
        let p = self.palette;

        writeln!(self.out)?;
        writeln!(self.out, "{}", p.section(&format!("📅 {days}-Day Forecast")))?;

        for (i, day) in daily.entries(days).iter().enumerate() {
            let code = WeatherCode::from_reading(day.weather_code);
            let quip = quip_for_daily(code, day.precipitation_probability, i);

            writeln!(
                self.out,
                "   {}: {code}  ⬆ {}  ⬇ {}  ☔ {}%{}",
                fmt_day(day.date),
                fmt_temp(day.temperature_max),
                fmt_temp(day.temperature_min),
                fmt_reading(day.precipitation_probability),
                p.dim(&format!(" • {quip}")),
            )?;
        }
        self.out.flush()
    }
}
