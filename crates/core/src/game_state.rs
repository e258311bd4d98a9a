//! Game state module - the turn-driven game loop
//!
//! One input event advances the game by one turn. There is no gravity timer:
//! the piece only descends on `SoftDrop` or `HardDrop`.
//!
//! Lock sequence: the landed piece stays in the grid, completed rows are
//! cleared, the score grows by `lines²`, and the next piece spawns. A spawn
//! that collides ends the game.

use arrayvec::ArrayVec;

use crate::driver::{InputSource, Renderer};
use crate::grid::Grid;
use crate::placement::{apply_move, hard_drop, spawn, Piece};
use crate::rng::{PieceSource, UniformSource};
use crate::scoring::score_for_lines;
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{GridConfig, InputEvent, MoveKind, PieceKind};

/// Structured record of the most recent lock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockEvent {
    pub kind: PieceKind,
    /// Rows fallen by the hard drop that preceded the lock (0 for a soft lock)
    pub drop_distance: u16,
    /// Rows that were full when the piece locked, top to bottom
    pub completed_rows: ArrayVec<u16, 4>,
    pub lines_cleared: u32,
    pub score_delta: u32,
}

/// Why a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndReason {
    /// A new piece could not spawn
    BoardFull,
    /// The player quit
    Quit,
}

/// Final numbers handed back by [`GameState::play`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameResult {
    pub score: u32,
    pub lines: u32,
    pub pieces: u32,
    pub reason: EndReason,
}

/// What one call to [`GameState::apply_event`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The piece moved or rotated
    Moved,
    /// The move was rejected; nothing changed
    Blocked,
    /// The piece locked and the next piece spawned
    Locked(LockEvent),
    /// The piece locked and the next piece could not spawn
    GameOver(LockEvent),
    /// The player quit
    Quit,
    /// The game had already ended; the event was ignored
    Ended,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<S = UniformSource> {
    grid: Grid,
    active: Option<Piece>,
    /// Kind of the piece after the active one
    next: PieceKind,
    source: S,
    score: u32,
    lines: u32,
    pieces: u32,
    started: bool,
    ended: Option<EndReason>,
    last_event: Option<LockEvent>,
}

impl<S: PieceSource> GameState<S> {
    /// Create a game with an empty grid. No piece is placed until [`start`](Self::start).
    pub fn new(config: GridConfig, mut source: S) -> Self {
        let next = source.next_kind();
        Self {
            grid: Grid::new(config),
            active: None,
            next,
            source,
            score: 0,
            lines: 0,
            pieces: 0,
            started: false,
            ended: None,
            last_event: None,
        }
    }

    /// Spawn the first piece. Calling it again has no effect.
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.spawn_next();
    }

    /// Spawn the queued kind and draw a new one; ends the game if blocked.
    fn spawn_next(&mut self) -> bool {
        let kind = self.next;
        self.next = self.source.next_kind();

        match spawn(&mut self.grid, kind) {
            Some(piece) => {
                self.active = Some(piece);
                self.pieces += 1;
                true
            }
            None => {
                self.active = None;
                self.ended = Some(EndReason::BoardFull);
                false
            }
        }
    }

    /// Advance the game by one input event.
    ///
    /// Starts the game first if [`start`](Self::start) was not called.
    pub fn apply_event(&mut self, event: InputEvent) -> TurnOutcome {
        self.start();
        if self.ended.is_some() {
            return TurnOutcome::Ended;
        }
        let Some(piece) = self.active else {
            return TurnOutcome::Ended;
        };

        match event {
            InputEvent::Quit => {
                self.ended = Some(EndReason::Quit);
                TurnOutcome::Quit
            }
            InputEvent::HardDrop => {
                let (landed, distance) = hard_drop(&mut self.grid, piece);
                self.lock(landed, distance)
            }
            InputEvent::SoftDrop => {
                let outcome = apply_move(&mut self.grid, piece, MoveKind::TranslateDown);
                if outcome.moved {
                    self.active = Some(outcome.piece);
                    TurnOutcome::Moved
                } else {
                    self.lock(piece, 0)
                }
            }
            InputEvent::Left => self.shift(piece, MoveKind::TranslateLeft),
            InputEvent::Right => self.shift(piece, MoveKind::TranslateRight),
            InputEvent::RotateCw => self.shift(piece, MoveKind::RotateCw),
            InputEvent::RotateCcw => self.shift(piece, MoveKind::RotateCcw),
        }
    }

    /// Try a move that never locks: a blocked attempt leaves the piece as it was.
    fn shift(&mut self, piece: Piece, kind: MoveKind) -> TurnOutcome {
        let outcome = apply_move(&mut self.grid, piece, kind);
        self.active = Some(outcome.piece);
        if outcome.moved {
            TurnOutcome::Moved
        } else {
            TurnOutcome::Blocked
        }
    }

    /// Lock the piece where it stands, clear rows, score, and spawn the next piece.
    fn lock(&mut self, piece: Piece, drop_distance: u16) -> TurnOutcome {
        self.active = None;

        // Only rows the piece touches can have just become full.
        let completed_rows: ArrayVec<u16, 4> = piece
            .rows()
            .iter()
            .filter_map(|&y| u16::try_from(y).ok())
            .filter(|&y| self.grid.is_row_full(y))
            .collect();

        let cleared = self.grid.clear_completed_rows();
        let score_delta = score_for_lines(cleared);
        self.score = self.score.saturating_add(score_delta);
        self.lines = self.lines.saturating_add(cleared as u32);

        let event = LockEvent {
            kind: piece.kind,
            drop_distance,
            completed_rows,
            lines_cleared: cleared as u32,
            score_delta,
        };
        self.last_event = Some(event.clone());

        if self.spawn_next() {
            TurnOutcome::Locked(event)
        } else {
            TurnOutcome::GameOver(event)
        }
    }

    /// Run the game against an input source and a renderer until it ends.
    ///
    /// A frame is rendered before every poll and once more after the game
    /// ends. Collaborator errors stop the loop and are returned.
    pub fn play<I, R, E>(&mut self, input: &mut I, renderer: &mut R) -> Result<GameResult, E>
    where
        I: InputSource + ?Sized,
        R: Renderer + ?Sized,
        E: From<I::Error> + From<R::Error>,
    {
        self.start();
        let mut snap = GameSnapshot::default();

        loop {
            self.snapshot_into(&mut snap);
            renderer.render(&snap)?;

            if let Some(result) = self.result() {
                return Ok(result);
            }

            if let Some(event) = input.poll_event()? {
                self.apply_event(event);
            }
        }
    }

    /// Final numbers, once the game has ended
    pub fn result(&self) -> Option<GameResult> {
        self.ended.map(|reason| GameResult {
            score: self.score,
            lines: self.lines,
            pieces: self.pieces,
            reason,
        })
    }

    /// Fill a snapshot in place, reusing its cell buffer.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.cols = self.grid.cols();
        out.rows = self.grid.rows();
        out.cells.clear();
        out.cells.extend_from_slice(self.grid.cells());
        out.active = self.active.map(ActiveSnapshot::from);
        out.next = if self.ended.is_some() {
            None
        } else {
            Some(self.next)
        };
        out.score = self.score;
        out.lines = self.lines;
        out.pieces = self.pieces;
        out.game_over = self.ended.is_some();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Mutable grid access for setting up positions.
    ///
    /// Writing over the active piece's cells breaks the placement invariant.
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn active(&self) -> Option<Piece> {
        self.active
    }

    pub fn next(&self) -> PieceKind {
        self.next
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Total rows cleared
    pub fn lines(&self) -> u32 {
        self.lines
    }

    /// Pieces spawned so far, including the active one
    pub fn pieces(&self) -> u32 {
        self.pieces
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn game_over(&self) -> bool {
        self.ended.is_some()
    }

    pub fn end_reason(&self) -> Option<EndReason> {
        self.ended
    }

    pub fn last_event(&self) -> Option<&LockEvent> {
        self.last_event.as_ref()
    }
}
