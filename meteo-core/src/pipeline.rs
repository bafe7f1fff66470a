//! geocode → fetch → render, run once per invocation.

use rand::Rng;
use std::io::Write;
use tracing::info;

use crate::{
    config::{Config, clamp_days},
    error::Result,
    provider::{HttpClient, fetch_forecast, resolve_city},
    render::Presenter,
};

/// Current conditions for `city`.
pub async fn show_current<H, W, R>(
    http: &H,
    config: &Config,
    city: &str,
    presenter: &mut Presenter<W, R>,
) -> Result<()>
where
    H: HttpClient + ?Sized,
    W: Write,
    R: Rng,
{
    let location = resolve_city(http, config, city).await?;
    let forecast = fetch_forecast(http, config, &location, 1).await?;

    info!(location = %location.label(), "rendering current conditions");
    presenter.render_current(&location.label(), &forecast.current)?;
    Ok(())
}

/// Current conditions followed by a `days`-day table; `days` is clamped to 1..=16.
pub async fn show_forecast<H, W, R>(
    http: &H,
    config: &Config,
    city: &str,
    days: i64,
    presenter: &mut Presenter<W, R>,
) -> Result<()>
where
    H: HttpClient + ?Sized,
    W: Write,
    R: Rng,
{
    let location = resolve_city(http, config, city).await?;
    let forecast = fetch_forecast(http, config, &location, days).await?;

    let label = location.label();
    info!(location = %label, days, "rendering forecast");
    presenter.render_current(&label, &forecast.current)?;
    presenter.render_forecast(&forecast.daily, clamp_days(days).into())?;
    Ok(())
}
