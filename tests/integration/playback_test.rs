//! End-to-end playback tests over on-disk fixtures, observed through the
//! recording surface.

use std::time::Duration;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use detview::dataset::{Dataset, Source};
use detview::player::input::{handle_event, Mode};
use detview::player::{InputResult, Player, RecordingSurface, View};
use detview::theme::Theme;

use super::helpers::{fixture_pair, FIXTURE_FRAMES};

fn fixture_player() -> Player {
    let (dir, image_path, radar_path) = fixture_pair();
    let image = Dataset::from_path(Source::Image, &image_path).unwrap();
    let radar = Dataset::from_path(Source::Radar, &radar_path).unwrap();
    drop(dir);
    Player::new(&image, &radar, Theme::default())
}

fn press(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

#[test]
fn auto_advance_walks_the_timeline_and_pauses_at_the_end() {
    let mut player = fixture_player();
    let mut surface = RecordingSurface::new();

    player.draw(&mut surface).unwrap();
    for _ in 0..FIXTURE_FRAMES {
        player.tick();
        if player.state.needs_render {
            player.draw(&mut surface).unwrap();
        }
    }

    assert!(player.state.paused);
    assert_eq!(player.state.current_step, FIXTURE_FRAMES - 1);
    assert_eq!(
        surface.steps_drawn(),
        vec![0, 1, 2, 3, 4, 5, 6, 6] // final tick clamps and re-draws the last frame
    );
}

#[test]
fn accumulation_spans_the_whole_run_while_past_is_on() {
    let mut player = fixture_player();
    let mut surface = RecordingSurface::new();

    player.draw(&mut surface).unwrap();
    for _ in 0..FIXTURE_FRAMES - 1 {
        player.tick();
        player.draw(&mut surface).unwrap();
    }

    // Every image record was accumulated by the time the run finished.
    assert_eq!(surface.last_scatter(View::Image).len(), 5);
    assert_eq!(surface.last_scatter(View::Radar).len(), 5);
    assert_eq!(surface.last_scatter(View::Combined).len(), 10);
}

#[test]
fn keyboard_session_steps_seeks_and_sweeps() {
    let mut player = fixture_player();
    let mut surface = RecordingSurface::new();
    let mut mode = Mode::default();

    let mut feed = |player: &mut Player, surface: &mut RecordingSurface, code| {
        handle_event(press(code), &mut mode, player, surface, Duration::ZERO).unwrap()
    };

    // Two manual steps forward pause playback at step 2.
    feed(&mut player, &mut surface, KeyCode::Right);
    feed(&mut player, &mut surface, KeyCode::Right);
    assert_eq!(player.state.current_step, 2);
    assert!(player.state.paused);

    // Go to step 5.
    for code in [KeyCode::Char('g'), KeyCode::Char('5'), KeyCode::Enter] {
        feed(&mut player, &mut surface, code);
    }
    assert_eq!(player.state.current_step, 5);

    // Sweep back down to step 1.
    for code in [
        KeyCode::Char('g'),
        KeyCode::Char('5'),
        KeyCode::Char('-'),
        KeyCode::Char('1'),
        KeyCode::Enter,
    ] {
        feed(&mut player, &mut surface, code);
    }
    assert_eq!(surface.steps_drawn(), vec![5, 4, 3, 2, 1]);

    // Space resumes, q quits.
    feed(&mut player, &mut surface, KeyCode::Char(' '));
    assert!(!player.state.paused);
    let result = feed(&mut player, &mut surface, KeyCode::Char('q'));
    assert_eq!(result, InputResult::Quit);
}

#[test]
fn resize_event_marks_the_frame_dirty() {
    let mut player = fixture_player();
    let mut surface = RecordingSurface::new();
    let mut mode = Mode::default();
    player.draw(&mut surface).unwrap();
    assert!(!player.state.needs_render);

    let result = handle_event(
        Event::Resize(120, 40),
        &mut mode,
        &mut player,
        &mut surface,
        Duration::ZERO,
    )
    .unwrap();

    assert_eq!(result, InputResult::Continue);
    assert!(player.state.needs_render);
}

#[test]
fn past_toggle_discards_accumulation_mid_session() {
    let mut player = fixture_player();
    let mut surface = RecordingSurface::new();
    let mut mode = Mode::default();

    player.draw(&mut surface).unwrap();
    player.tick();
    player.draw(&mut surface).unwrap();
    assert!(!player.state.past_image.is_empty());

    handle_event(
        press(KeyCode::Char('p')),
        &mut mode,
        &mut player,
        &mut surface,
        Duration::ZERO,
    )
    .unwrap();

    assert!(!player.state.show_past);
    assert!(player.state.past_image.is_empty());
    assert!(player.state.past_radar.is_empty());
}
