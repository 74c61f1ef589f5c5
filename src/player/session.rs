//! Interactive playback session.
//!
//! Owns terminal setup/teardown and the single-threaded, cooperative event
//! loop: draw when dirty, wait for input no longer than the time left until
//! the next tick, auto-advance on tick expiry. Timer ticks, key presses,
//! and resize events are delivered serially; nothing runs concurrently.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event;
use tracing::debug;

use crate::dataset::Dataset;
use crate::player::input::{self, Mode};
use crate::player::playback::Player;
use crate::player::render::{PlotBounds, TuiSurface};
use crate::player::state::InputResult;
use crate::theme::Theme;

/// Tunables for an interactive session.
#[derive(Debug, Clone)]
pub struct SessionOptions {
    /// Auto-advance period
    pub interval: Duration,
    /// Delay between frames of a go-to range sweep
    pub sweep_delay: Duration,
    /// Axis bounds for all three views
    pub bounds: PlotBounds,
    /// Colors for the views and footer
    pub theme: Theme,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(500),
            sweep_delay: Duration::from_millis(500),
            bounds: PlotBounds::default(),
            theme: Theme::default(),
        }
    }
}

/// Run the interactive viewer until the user quits.
///
/// Builds the unified timeline once, then hands control to the event loop.
/// The terminal is always restored before returning, including on error.
pub fn run(image: &Dataset, radar: &Dataset, options: SessionOptions) -> Result<()> {
    let mut player = Player::new(image, radar, options.theme.clone());
    debug!(frames = player.frame_count(), "starting playback session");

    let terminal = ratatui::init();
    let mut surface = TuiSurface::new(terminal, options.theme, options.bounds);
    let result = run_loop(
        &mut player,
        &mut surface,
        options.interval,
        options.sweep_delay,
    );
    ratatui::restore();
    result
}

fn run_loop(
    player: &mut Player,
    surface: &mut TuiSurface,
    interval: Duration,
    sweep_delay: Duration,
) -> Result<()> {
    let mut mode = Mode::default();
    let mut last_tick = Instant::now();

    loop {
        if player.state.needs_render {
            player.draw(surface)?;
        }

        let timeout = interval.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            let event = event::read()?;
            if input::handle_event(event, &mut mode, player, surface, sweep_delay)?
                == InputResult::Quit
            {
                return Ok(());
            }
        }

        if last_tick.elapsed() >= interval {
            player.tick();
            last_tick = Instant::now();
        }
    }
}
