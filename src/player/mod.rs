//! Playback of the unified detection timeline.
//!
//! # Architecture
//!
//! The player is organized into submodules:
//! - `state`: `PlaybackState` struct and shared types (`InputResult`)
//! - `input`: keyboard handling and go-to text parsing
//! - `playback`: the `Player` state machine (ticks, steps, seeks, sweeps)
//! - `render`: the `PlotSurface` trait, ratatui backend, recording surface
//! - `session`: terminal lifecycle and the cooperative event loop
//!
//! # Usage
//!
//! ```no_run
//! use detview::dataset::{Dataset, Source};
//! use detview::player::{run, SessionOptions};
//! use std::path::Path;
//!
//! let image = Dataset::from_path(Source::Image, Path::new("image.csv")).unwrap();
//! let radar = Dataset::from_path(Source::Radar, Path::new("radar.csv")).unwrap();
//! run(&image, &radar, SessionOptions::default()).unwrap();
//! ```

pub mod input;
pub mod playback;
pub mod render;
pub mod session;
pub mod state;

pub use playback::Player;
pub use render::{PlotSurface, RecordingSurface, View};
pub use session::{run, SessionOptions};
pub use state::{InputResult, PlaybackState};
