//! Input handling for the viewer.
//!
//! Dispatches crossterm events to the keyboard handler and returns control
//! flow signals to the session loop.

mod goto;
mod keyboard;

pub use goto::{parse_goto, GotoParseError, GotoRequest};
pub use keyboard::handle_key_event;

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{Event, KeyEventKind};

use crate::player::playback::Player;
use crate::player::render::PlotSurface;
use crate::player::state::InputResult;

/// UI mode of the session.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Mode {
    /// Normal playback; keys control the player directly
    #[default]
    Normal,
    /// Go-to entry is open; keys edit the input buffer
    Goto { input: String },
}

/// Handle any input event, dispatching to the appropriate handler.
///
/// # Returns
/// `InputResult` indicating whether to continue or quit.
pub fn handle_event(
    event: Event,
    mode: &mut Mode,
    player: &mut Player,
    surface: &mut dyn PlotSurface,
    sweep_delay: Duration,
) -> Result<InputResult> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            handle_key_event(key, mode, player, surface, sweep_delay)
        }
        Event::Resize(_, _) => {
            player.state.needs_render = true;
            Ok(InputResult::Continue)
        }
        _ => Ok(InputResult::Continue), // Ignore focus events, key releases, etc.
    }
}
