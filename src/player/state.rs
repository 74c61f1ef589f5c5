//! Player state management.
//!
//! Contains the central `PlaybackState` struct that holds all playback
//! state, as well as shared types used across player modules.

use crate::player::render::PlaybackStatus;

/// Result of processing an input event.
///
/// Returned by input handlers to signal control flow decisions to the
/// session loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Continue the session
    Continue,
    /// Exit the viewer normally
    Quit,
}

/// Central playback state for the viewer.
///
/// Mutated continuously by user input and timer ticks. The accumulation
/// buffers are cleared only by the show-past toggle, never by stepping or
/// seeking.
#[derive(Debug, Clone)]
pub struct PlaybackState {
    /// Step currently displayed (rank on the unified timeline)
    pub current_step: usize,
    /// Whether auto-advance is suspended
    pub paused: bool,
    /// Whether coordinate labels are drawn next to each point
    pub show_coords: bool,
    /// Whether past frames stay visible
    pub show_past: bool,
    /// Accumulated image points rendered so far in the current past session
    pub past_image: Vec<(f64, f64)>,
    /// Accumulated radar points rendered so far in the current past session
    pub past_radar: Vec<(f64, f64)>,
    /// True when the screen needs to be redrawn
    pub needs_render: bool,
    frame_count: usize,
}

impl PlaybackState {
    /// Create playback state for a timeline with `frame_count` steps.
    ///
    /// Playback starts running at step 0 with coordinates and past frames
    /// shown, matching the viewer's startup defaults.
    pub fn new(frame_count: usize) -> Self {
        Self {
            current_step: 0,
            paused: false,
            show_coords: true,
            show_past: true,
            past_image: Vec::new(),
            past_radar: Vec::new(),
            needs_render: true,
            frame_count,
        }
    }

    /// Total number of frames on the unified timeline.
    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    /// The last valid step (0 when the timeline is empty).
    pub fn last_step(&self) -> usize {
        self.frame_count.saturating_sub(1)
    }

    /// Clamp a requested step into `[0, frame_count - 1]`.
    ///
    /// Out-of-range targets are never an error, they snap to the nearest
    /// bound.
    pub fn clamp_step(&self, target: i64) -> usize {
        target.clamp(0, self.last_step() as i64) as usize
    }

    /// Toggle pause/resume.
    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        self.needs_render = true;
    }

    /// Toggle coordinate labels. Display-only, no state-machine effect.
    pub fn toggle_coords(&mut self) {
        self.show_coords = !self.show_coords;
        self.needs_render = true;
    }

    /// Toggle past-frame accumulation.
    ///
    /// Turning the flag off discards everything accumulated so far, so a
    /// later re-enable starts from the then-current frame.
    pub fn toggle_past(&mut self) {
        self.show_past = !self.show_past;
        if !self.show_past {
            self.past_image.clear();
            self.past_radar.clear();
        }
        self.needs_render = true;
    }

    /// Snapshot for the status footer.
    pub fn status(&self) -> PlaybackStatus {
        PlaybackStatus {
            step: self.current_step,
            frame_count: self.frame_count,
            paused: self.paused,
            show_past: self.show_past,
            show_coords: self.show_coords,
        }
    }
}
