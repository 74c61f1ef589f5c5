//! DetView binary entry point.

use std::io;
use std::time::Duration;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use detview::cli::{Cli, Command};
use detview::commands;
use detview::player::render::PlotBounds;
use detview::player::SessionOptions;

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("detview=debug")),
            )
            .with_writer(io::stderr)
            .init();
    }

    match cli.command {
        Command::Play {
            image,
            radar,
            interval_ms,
            sweep_delay_ms,
            x_min,
            x_max,
            y_min,
            y_max,
        } => {
            let options = SessionOptions {
                interval: Duration::from_millis(interval_ms),
                sweep_delay: Duration::from_millis(sweep_delay_ms),
                bounds: PlotBounds {
                    x_min,
                    x_max,
                    y_min,
                    y_max,
                },
                ..SessionOptions::default()
            };
            commands::play::run(&image, &radar, options)
        }
        Command::Info { image, radar, json } => commands::info::run(&image, &radar, json),
        Command::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "detview", &mut io::stdout());
            Ok(())
        }
    }
}
