//! Keyboard input handling for the viewer.
//!
//! Handles the playback controls, display toggles, and the go-to entry
//! mode. Go-to characters are collected into a buffer echoed on the notice
//! line; Enter submits, Esc cancels.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::warn;

use super::goto::{parse_goto, GotoRequest};
use super::Mode;
use crate::player::playback::Player;
use crate::player::render::{Notice, PlotSurface};
use crate::player::state::InputResult;

/// Handle a keyboard event.
///
/// This is the main keyboard input handler. It mutates player state and
/// the UI mode and returns a control flow signal for the session loop.
pub fn handle_key_event(
    key: KeyEvent,
    mode: &mut Mode,
    player: &mut Player,
    surface: &mut dyn PlotSurface,
    sweep_delay: Duration,
) -> Result<InputResult> {
    if let Mode::Goto { input } = mode {
        let next = handle_goto_key(key, input, player, surface, sweep_delay)?;
        if let Some(next_mode) = next {
            *mode = next_mode;
        }
        return Ok(InputResult::Continue);
    }

    match key.code {
        // === Quit ===
        KeyCode::Char('q') | KeyCode::Esc => Ok(InputResult::Quit),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Ok(InputResult::Quit)
        }

        // === Playback controls ===
        KeyCode::Char(' ') => {
            player.toggle_pause();
            Ok(InputResult::Continue)
        }
        KeyCode::Left => {
            player.step_backward();
            Ok(InputResult::Continue)
        }
        KeyCode::Right => {
            player.step_forward();
            Ok(InputResult::Continue)
        }

        // === Display toggles ===
        KeyCode::Char('c') => {
            player.toggle_coords();
            Ok(InputResult::Continue)
        }
        KeyCode::Char('p') => {
            player.toggle_past();
            Ok(InputResult::Continue)
        }

        // === Go-to entry ===
        KeyCode::Char('g') => {
            *mode = Mode::Goto {
                input: String::new(),
            };
            surface.set_notice(Some(Notice::Prompt(String::new())));
            player.state.needs_render = true;
            Ok(InputResult::Continue)
        }

        _ => Ok(InputResult::Continue),
    }
}

/// Handle a key while the go-to entry is open.
///
/// # Returns
/// `Some(mode)` when the entry closes (submit or cancel), `None` while it
/// stays open.
fn handle_goto_key(
    key: KeyEvent,
    input: &mut String,
    player: &mut Player,
    surface: &mut dyn PlotSurface,
    sweep_delay: Duration,
) -> Result<Option<Mode>> {
    match key.code {
        KeyCode::Enter => {
            let submitted = input.clone();
            match parse_goto(&submitted) {
                Ok(GotoRequest::Seek(step)) => {
                    surface.set_notice(None);
                    player.seek(step);
                }
                Ok(GotoRequest::Sweep(start, end)) => {
                    surface.set_notice(None);
                    player.sweep(start, end, surface, sweep_delay)?;
                }
                Err(err) => {
                    // Rejected input leaves playback state unchanged.
                    warn!(input = %submitted, %err, "rejected go-to input");
                    surface.set_notice(Some(Notice::Error(err.to_string())));
                }
            }
            player.state.needs_render = true;
            Ok(Some(Mode::Normal))
        }
        KeyCode::Esc => {
            surface.set_notice(None);
            player.state.needs_render = true;
            Ok(Some(Mode::Normal))
        }
        KeyCode::Backspace => {
            input.pop();
            surface.set_notice(Some(Notice::Prompt(input.clone())));
            player.state.needs_render = true;
            Ok(None)
        }
        KeyCode::Char(c) if c.is_ascii_digit() || c == '-' || c == ' ' => {
            input.push(c);
            surface.set_notice(Some(Notice::Prompt(input.clone())));
            player.state.needs_render = true;
            Ok(None)
        }
        _ => Ok(None),
    }
}
