use clap::{Parser, Subcommand};
use meteo_core::{
    Config, Palette, Presenter, ReqwestHttpClient, WeatherError,
    config::{DEFAULT_TIMEOUT, FORECAST_URL, GEOCODING_URL},
    show_current, show_forecast,
};
use std::{io, time::Duration};
use tracing_subscriber::EnvFilter;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(
    name = "meteo",
    version,
    about = "Weather CLI (Open-Meteo): current conditions + multi-day forecast"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Log requests to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, env = "METEO_GEOCODING_URL", default_value = GEOCODING_URL, global = true, hide = true)]
    pub geocoding_url: String,

    #[arg(long, env = "METEO_FORECAST_URL", default_value = FORECAST_URL, global = true, hide = true)]
    pub forecast_url: String,

    #[arg(long, env = "METEO_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT.as_secs(), global = true, hide = true)]
    pub timeout_secs: u64,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show current weather for a city.
    Current {
        /// City name, e.g. "Istanbul".
        city: String,
    },

    /// Show N-day forecast for a city (default 3).
    Forecast {
        /// City name, e.g. "Istanbul".
        city: String,

        /// Number of days (1–16); values outside the range are clamped.
        #[arg(short, long, default_value_t = 3, allow_negative_numbers = true)]
        days: i64,
    },
}

impl Cli {
    pub fn config(&self) -> Config {
        Config::default()
            .with_geocoding_url(&self.geocoding_url)
            .with_forecast_url(&self.forecast_url)
            .with_timeout(Duration::from_secs(self.timeout_secs))
    }

    /// `RUST_LOG` wins unless `--verbose` is given; the default is warnings only.
    pub fn init_logging(&self) -> anyhow::Result<()> {
        let filter = if self.verbose {
            EnvFilter::new("warn,meteo=debug,meteo_core=debug")
        } else {
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
        };

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .try_init()
            .map_err(|e| anyhow::anyhow!("Failed to initialise logging: {e}"))
    }

    pub async fn run(self, palette: Palette) -> Result<(), WeatherError> {
        let config = self.config();
        let http = ReqwestHttpClient::new();
        let mut presenter = Presenter::new(io::stdout(), palette, rand::thread_rng());

        match self.command {
            Command::Current { city } => show_current(&http, &config, &city, &mut presenter).await,
            Command::Forecast { city, days } => {
                show_forecast(&http, &config, &city, days, &mut presenter).await
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn forecast_defaults_to_three_days() {
        let cli = Cli::try_parse_from(["meteo", "forecast", "Istanbul"]).unwrap();
        match cli.command {
            Command::Forecast { city, days } => {
                assert_eq!(city, "Istanbul");
                assert_eq!(days, 3);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn out_of_range_days_are_accepted() {
        for (arg, expected) in [("0", 0), ("20", 20), ("-2", -2)] {
            let cli = Cli::try_parse_from(["meteo", "forecast", "Oslo", "-d", arg]).unwrap();
            assert!(matches!(cli.command, Command::Forecast { days, .. } if days == expected));
        }

        let cli = Cli::try_parse_from(["meteo", "forecast", "Oslo", "--days", "7"]).unwrap();
        assert!(matches!(cli.command, Command::Forecast { days: 7, .. }));
    }

    #[test]
    fn current_takes_a_city() {
        let cli = Cli::try_parse_from(["meteo", "current", "New York"]).unwrap();
        assert!(matches!(cli.command, Command::Current { ref city } if city == "New York"));
        assert!(!cli.verbose);
    }

    #[test]
    fn missing_subcommand_is_rejected() {
        assert!(Cli::try_parse_from(["meteo"]).is_err());
        assert!(Cli::try_parse_from(["meteo", "current"]).is_err());
    }

    #[test]
    fn endpoint_flags_feed_the_config() {
        let cli = Cli::try_parse_from([
            "meteo",
            "current",
            "Lima",
            "--geocoding-url",
            "http://127.0.0.1:9/search",
            "--forecast-url",
            "http://127.0.0.1:9/forecast",
            "--timeout-secs",
            "2",
        ])
        .unwrap();

        let cfg = cli.config();
        assert_eq!(cfg.geocoding_url, "http://127.0.0.1:9/search");
        assert_eq!(cfg.forecast_url, "http://127.0.0.1:9/forecast");
        assert_eq!(cfg.timeout, Duration::from_secs(2));
    }
}
