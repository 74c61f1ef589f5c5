//! Command-line interface definition.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Debug, Parser)]
#[command(
    name = "detview",
    version,
    about = "Replay image and radar detections on a unified timeline"
)]
pub struct Cli {
    /// Enable diagnostic logging to stderr (filter with RUST_LOG)
    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Play both detection streams interactively
    Play {
        /// CSV of image detections (columns: time, x, y)
        image: PathBuf,
        /// CSV of radar detections (columns: time, x, y)
        radar: PathBuf,
        /// Auto-advance period in milliseconds
        #[arg(long, default_value_t = 500)]
        interval_ms: u64,
        /// Delay between frames of a range sweep, in milliseconds
        #[arg(long, default_value_t = 500)]
        sweep_delay_ms: u64,
        /// Left plot bound
        #[arg(long, default_value_t = -10.0, allow_hyphen_values = true)]
        x_min: f64,
        /// Right plot bound
        #[arg(long, default_value_t = 10.0, allow_hyphen_values = true)]
        x_max: f64,
        /// Bottom plot bound
        #[arg(long, default_value_t = -10.0, allow_hyphen_values = true)]
        y_min: f64,
        /// Top plot bound
        #[arg(long, default_value_t = 10.0, allow_hyphen_values = true)]
        y_max: f64,
    },

    /// Summarize both streams and the unified timeline without playing
    Info {
        /// CSV of image detections (columns: time, x, y)
        image: PathBuf,
        /// CSV of radar detections (columns: time, x, y)
        radar: PathBuf,
        /// Emit the summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
