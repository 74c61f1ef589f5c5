//! Playback operations for the viewer.
//!
//! `Player` owns the indexed datasets, the unified timeline, and the
//! playback state, and implements every operation the session loop drives:
//! timer ticks, manual steps, seeks, range sweeps, the display toggles, and
//! drawing one frame through a [`PlotSurface`].

use std::thread;
use std::time::Duration;

use anyhow::Result;

use crate::dataset::Dataset;
use crate::player::render::{PlotSurface, View};
use crate::player::state::PlaybackState;
use crate::theme::Theme;
use crate::timeline::{IndexedDataset, Timeline};

/// The playback state machine over two indexed detection streams.
pub struct Player {
    image: IndexedDataset,
    radar: IndexedDataset,
    timeline: Timeline,
    theme: Theme,
    pub state: PlaybackState,
}

impl Player {
    /// Unify both datasets onto one timeline and prepare playback at step 0.
    pub fn new(image: &Dataset, radar: &Dataset, theme: Theme) -> Self {
        let timeline = Timeline::unify(image, radar);
        let state = PlaybackState::new(timeline.frame_count());
        Self {
            image: timeline.index(image),
            radar: timeline.index(radar),
            timeline,
            theme,
            state,
        }
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    pub fn frame_count(&self) -> usize {
        self.timeline.frame_count()
    }

    /// Fixed-period timer callback.
    ///
    /// While running, advances one step; past the last valid step it clamps
    /// to the last step and forces a pause.
    pub fn tick(&mut self) {
        if self.frame_count() == 0 || self.state.paused {
            return;
        }
        let next = self.state.current_step + 1;
        if next >= self.frame_count() {
            self.state.current_step = self.state.last_step();
            self.state.paused = true;
        } else {
            self.state.current_step = next;
        }
        self.state.needs_render = true;
    }

    /// Manual step forward. Forces a pause, clamps at the last step.
    pub fn step_forward(&mut self) {
        if self.frame_count() == 0 {
            return;
        }
        self.state.paused = true;
        self.state.current_step = (self.state.current_step + 1).min(self.state.last_step());
        self.state.needs_render = true;
    }

    /// Manual step backward. Forces a pause, clamps at step 0.
    pub fn step_backward(&mut self) {
        if self.frame_count() == 0 {
            return;
        }
        self.state.paused = true;
        self.state.current_step = self.state.current_step.saturating_sub(1);
        self.state.needs_render = true;
    }

    /// Jump to a step. The target is clamped into range; manual navigation
    /// always pauses.
    pub fn seek(&mut self, target: i64) {
        if self.frame_count() == 0 {
            return;
        }
        self.state.paused = true;
        self.state.current_step = self.state.clamp_step(target);
        self.state.needs_render = true;
    }

    /// Blocking sweep from `start` to `end` inclusive.
    ///
    /// Both ends are clamped into range; the direction follows their
    /// ordering. Each intermediate frame is drawn through `surface` with
    /// `delay` slept between frames. No other input is processed until the
    /// sweep completes.
    pub fn sweep(
        &mut self,
        start: i64,
        end: i64,
        surface: &mut dyn PlotSurface,
        delay: Duration,
    ) -> Result<()> {
        if self.frame_count() == 0 {
            return Ok(());
        }
        self.state.paused = true;
        let start = self.state.clamp_step(start);
        let end = self.state.clamp_step(end);

        let steps: Vec<usize> = if start <= end {
            (start..=end).collect()
        } else {
            (end..=start).rev().collect()
        };
        for step in steps {
            self.state.current_step = step;
            self.draw(surface)?;
            if !delay.is_zero() {
                thread::sleep(delay);
            }
        }
        Ok(())
    }

    pub fn toggle_pause(&mut self) {
        self.state.toggle_pause();
    }

    pub fn toggle_coords(&mut self) {
        self.state.toggle_coords();
    }

    pub fn toggle_past(&mut self) {
        self.state.toggle_past();
    }

    /// Draw the current step on all three views.
    ///
    /// Selects each dataset's current-frame subset; while show-past is on,
    /// the subset is appended to that dataset's accumulation buffer and the
    /// whole buffer is rendered, otherwise only the subset. All three views
    /// reflect the same selection, differing only in which subsets are drawn.
    pub fn draw(&mut self, surface: &mut dyn PlotSurface) -> Result<()> {
        let step = self.state.current_step;
        let sub_image = self.image.frame(step);
        let sub_radar = self.radar.frame(step);

        let (image_points, radar_points) = if self.state.show_past {
            self.state.past_image.extend_from_slice(&sub_image);
            self.state.past_radar.extend_from_slice(&sub_radar);
            (self.state.past_image.clone(), self.state.past_radar.clone())
        } else {
            (sub_image, sub_radar)
        };

        surface.clear();
        surface.set_status(self.state.status());
        for view in View::ALL {
            surface.set_title(view, format!("{} (t={step})", view.label()));
        }
        surface.scatter(View::Image, &image_points, self.theme.image);
        surface.scatter(View::Radar, &radar_points, self.theme.radar);
        surface.scatter(View::Combined, &image_points, self.theme.image);
        surface.scatter(View::Combined, &radar_points, self.theme.radar);

        if self.state.show_coords {
            // Bulk label pass over the selected points.
            for &(x, y) in &image_points {
                let text = format!("({x},{y})");
                surface.label(View::Image, (x, y), text.clone(), self.theme.image);
                surface.label(View::Combined, (x, y), text, self.theme.image);
            }
            for &(x, y) in &radar_points {
                let text = format!("({x},{y})");
                surface.label(View::Radar, (x, y), text.clone(), self.theme.radar);
                surface.label(View::Combined, (x, y), text, self.theme.radar);
            }
        }

        self.state.needs_render = false;
        surface.redraw()
    }
}
