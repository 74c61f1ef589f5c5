//! Rendering components for the viewer.
//!
//! The playback core draws through the [`PlotSurface`] trait and never
//! touches the terminal directly. Two implementations exist: the ratatui
//! canvas backend used by the interactive session, and an in-memory
//! recording surface for headless use and tests.

mod recording;
mod surface;
mod tui;

pub use recording::{PlotRequest, RecordingSurface};
pub use surface::{Notice, PlaybackStatus, PlotBounds, PlotSurface, View};
pub use tui::TuiSurface;
