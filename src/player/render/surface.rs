//! The plotting surface the playback core draws through.

use anyhow::Result;
use ratatui::style::Color;

/// The three scatter views produced from the same selected data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Image detections only
    Image,
    /// Radar detections only
    Radar,
    /// Both sources overlaid
    Combined,
}

impl View {
    /// All views in display order (left to right).
    pub const ALL: [View; 3] = [View::Image, View::Radar, View::Combined];

    /// Title prefix for this view.
    pub fn label(&self) -> &'static str {
        match self {
            View::Image => "Image Only",
            View::Radar => "Radar Only",
            View::Combined => "Combined",
        }
    }
}

/// Snapshot of playback state shown in the status footer.
///
/// Refreshed once per frame; carries the read-only past indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlaybackStatus {
    pub step: usize,
    pub frame_count: usize,
    pub paused: bool,
    pub show_past: bool,
    pub show_coords: bool,
}

/// A message for the notice line below the plots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Echo of the go-to input being typed
    Prompt(String),
    /// Diagnostic for rejected input
    Error(String),
}

/// Axis bounds shared by all three views.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotBounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Default for PlotBounds {
    fn default() -> Self {
        Self {
            x_min: -10.0,
            x_max: 10.0,
            y_min: -10.0,
            y_max: 10.0,
        }
    }
}

/// External plotting surface for one frame of the viewer.
///
/// Per frame the playback core issues: `clear`, `set_status`, one
/// `set_title` per view, `scatter`/`label` requests, then a single
/// `redraw`. Notices are set by the input layer and persist across frames
/// until replaced.
pub trait PlotSurface {
    /// Drop all buffered frame content (titles, scatters, labels).
    fn clear(&mut self);

    /// Update the status footer for the frame being drawn.
    fn set_status(&mut self, status: PlaybackStatus);

    /// Replace the notice line; `None` clears it.
    fn set_notice(&mut self, notice: Option<Notice>);

    /// Set one view's title.
    fn set_title(&mut self, view: View, title: String);

    /// Queue a scatter series for one view.
    fn scatter(&mut self, view: View, points: &[(f64, f64)], color: Color);

    /// Queue a coordinate label at a point in one view.
    fn label(&mut self, view: View, point: (f64, f64), text: String, color: Color);

    /// Flush the buffered frame to the output.
    fn redraw(&mut self) -> Result<()>;
}
