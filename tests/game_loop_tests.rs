//! Game loop tests - turns, locking, scoring, and termination

use std::io::{self, Cursor};

use blockfall::core::{
    EndReason, GameState, InputSource, RecordingRenderer, ScriptedInput, ScriptedSource,
    TurnOutcome, UniformSource,
};
use blockfall::input::LineInput;
use blockfall::term::TextRenderer;
use blockfall::types::{GridConfig, InputEvent, PieceKind};

use std::convert::Infallible;

fn o_game(cols: u16, rows: u16) -> GameState<ScriptedSource> {
    let config = GridConfig::new(cols, rows).unwrap();
    let mut game = GameState::new(config, ScriptedSource::repeat(PieceKind::O));
    game.start();
    game
}

#[test]
fn test_two_rows_cleared_at_once_score_four() {
    let mut game = o_game(4, 6);

    assert_eq!(game.apply_event(InputEvent::Left), TurnOutcome::Moved);
    assert!(matches!(
        game.apply_event(InputEvent::HardDrop),
        TurnOutcome::Locked(ref e) if e.lines_cleared == 0
    ));

    assert_eq!(game.apply_event(InputEvent::Right), TurnOutcome::Moved);
    match game.apply_event(InputEvent::HardDrop) {
        TurnOutcome::Locked(event) => {
            assert_eq!(event.completed_rows.as_slice(), &[4, 5]);
            assert_eq!(event.lines_cleared, 2);
            assert_eq!(event.score_delta, 4);
            assert_eq!(event.drop_distance, 4);
        }
        other => panic!("expected lock, got {:?}", other),
    }

    assert_eq!(game.score(), 4);
    assert_eq!(game.lines(), 2);
    // Only the freshly spawned piece remains.
    assert_eq!(game.grid().occupied_count(), 4);
}

#[test]
fn test_each_lock_scores_its_own_clear() {
    // Four double clears: 4 x 2² = 16.
    let mut game = o_game(4, 8);
    let mut lines = 0;
    for _ in 0..4 {
        game.apply_event(InputEvent::Left);
        game.apply_event(InputEvent::HardDrop);
        game.apply_event(InputEvent::Right);
        if let TurnOutcome::Locked(e) = game.apply_event(InputEvent::HardDrop) {
            lines += e.lines_cleared;
        }
    }
    assert_eq!(lines, 8);
    assert_eq!(game.score(), 16);
}

#[test]
fn test_soft_drop_walks_down_then_locks() {
    let mut game = o_game(10, 20);
    let mut turns = 0;
    loop {
        turns += 1;
        match game.apply_event(InputEvent::SoftDrop) {
            TurnOutcome::Moved => continue,
            TurnOutcome::Locked(event) => {
                assert_eq!(event.drop_distance, 0);
                break;
            }
            other => panic!("unexpected {:?}", other),
        }
    }
    assert_eq!(turns, 19);
    assert!(game.grid().is_occupied(4, 19));
}

#[test]
fn test_board_full_ends_game_without_touching_grid() {
    let mut game = o_game(10, 20);
    for i in 0..10 {
        let outcome = game.apply_event(InputEvent::HardDrop);
        if i < 9 {
            assert!(matches!(outcome, TurnOutcome::Locked(_)), "turn {}", i);
        } else {
            assert!(matches!(outcome, TurnOutcome::GameOver(_)));
        }
    }

    assert!(game.game_over());
    assert_eq!(game.end_reason(), Some(EndReason::BoardFull));
    assert_eq!(game.active(), None);
    assert_eq!(game.pieces(), 10);
    // Ten locked pieces, no cells from the failed spawn.
    assert_eq!(game.grid().occupied_count(), 40);
    assert_eq!(game.apply_event(InputEvent::Left), TurnOutcome::Ended);
}

#[test]
fn test_play_returns_score_on_board_full() {
    let mut game = o_game(10, 20);
    let mut input = ScriptedInput::new(std::iter::repeat(InputEvent::HardDrop).take(50));
    let mut renderer = RecordingRenderer::default();

    let result = game
        .play::<_, _, Infallible>(&mut input, &mut renderer)
        .unwrap();

    assert_eq!(result.reason, EndReason::BoardFull);
    assert_eq!(result.score, 0);
    assert_eq!(result.pieces, 10);
    assert_eq!(input.remaining(), 40);
    assert_eq!(renderer.frames.len(), 11);
    let last = renderer.frames.last().unwrap();
    assert!(last.game_over);
    assert_eq!(last.next, None);
}

#[test]
fn test_play_returns_score_on_quit() {
    let mut game = o_game(4, 6);
    let mut input = ScriptedInput::new([
        InputEvent::Left,
        InputEvent::HardDrop,
        InputEvent::Right,
        InputEvent::HardDrop,
        InputEvent::Quit,
        InputEvent::Left,
    ]);
    let mut renderer = RecordingRenderer::default();

    let result = game
        .play::<_, _, Infallible>(&mut input, &mut renderer)
        .unwrap();

    assert_eq!(result.reason, EndReason::Quit);
    assert_eq!(result.score, 4);
    assert_eq!(result.lines, 2);
    assert_eq!(input.remaining(), 1);
}

/// Reports a redraw request before each real event.
struct ResizingInput {
    inner: ScriptedInput,
    redraw_pending: bool,
}

impl InputSource for ResizingInput {
    type Error = Infallible;

    fn next_event(&mut self) -> Result<InputEvent, Infallible> {
        self.inner.next_event()
    }

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Infallible> {
        self.redraw_pending = !self.redraw_pending;
        if self.redraw_pending {
            return Ok(None);
        }
        self.next_event().map(Some)
    }
}

#[test]
fn test_redraw_request_repeats_frame_without_a_turn() {
    let mut game = o_game(4, 6);
    let mut input = ResizingInput {
        inner: ScriptedInput::new([InputEvent::Left, InputEvent::Quit]),
        redraw_pending: false,
    };
    let mut renderer = RecordingRenderer::default();

    let result = game
        .play::<_, _, Infallible>(&mut input, &mut renderer)
        .unwrap();

    assert_eq!(result.reason, EndReason::Quit);
    assert_eq!(result.pieces, 1);
    // initial, redraw, after Left, redraw, after Quit
    assert_eq!(renderer.frames.len(), 5);
    assert_eq!(renderer.frames[0], renderer.frames[1]);
    assert_ne!(renderer.frames[1], renderer.frames[2]);
    assert_eq!(renderer.frames[2], renderer.frames[3]);
}

#[test]
fn test_play_with_text_io() {
    let mut game = o_game(4, 6);
    let mut input = LineInput::new(Cursor::new("a\n \nd\nhardDrop\n"));
    let mut renderer = TextRenderer::new(Vec::new());

    let result = game
        .play::<_, _, io::Error>(&mut input, &mut renderer)
        .unwrap();
    assert_eq!(result.score, 4);
    assert_eq!(result.reason, EndReason::Quit);

    let text = String::from_utf8(renderer.into_inner()).unwrap();
    assert!(text.contains("  Score: 4\n"));
    assert!(text.trim_end().ends_with("Game over"));
}

#[test]
fn test_same_seed_same_game() {
    let events = [
        InputEvent::Left,
        InputEvent::HardDrop,
        InputEvent::RotateCw,
        InputEvent::Right,
        InputEvent::HardDrop,
        InputEvent::HardDrop,
    ];
    let run = || {
        let mut game = GameState::new(GridConfig::default(), UniformSource::new(2024));
        for e in events {
            game.apply_event(e);
        }
        game.snapshot()
    };
    assert_eq!(run(), run());
}
