//! Binary crate for the `meteo` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Wiring logging, per-stream color detection and the HTTP client into the core pipeline
//! - Mapping failures to exit codes (1 network, 2 city not found)

use clap::Parser;
use meteo_core::{Palette, color_enabled};
use std::{io, process::ExitCode};

mod cli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cmd = cli::Cli::parse();
    if let Err(err) = cmd.init_logging() {
        eprintln!("{err:#}");
    }

    let palette = Palette::new(color_enabled(&io::stdout()));

    match cmd.run(palette).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = ?err, "lookup failed");
            let stderr_palette = Palette::new(color_enabled(&io::stderr()));
            eprintln!("{}", stderr_palette.error(&err.to_string()));
            ExitCode::from(err.exit_code())
        }
    }
}
