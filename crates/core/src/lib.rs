//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds the rules of the game and nothing else. It has **no
//! dependencies** on terminals or I/O: input and output reach it through the
//! [`InputSource`] and [`Renderer`] traits, and randomness through
//! [`PieceSource`].
//!
//! # Module Structure
//!
//! - [`pieces`]: the seven shapes and pivot rotation
//! - [`grid`]: occupancy grid, bounds checks, and row clearing
//! - [`placement`]: spawn, collision-checked moves, hard drop
//! - [`scoring`]: `lines²` per lock
//! - [`rng`]: seeded piece selection
//! - [`game_state`]: the turn-driven game loop
//! - [`snapshot`]: read-only frames for renderers
//! - [`driver`]: collaborator traits and scripted implementations
//!
//! # Game Rules
//!
//! - One input event is one turn; there is no gravity timer
//! - Rotation turns the shape about its pivot cell `(0, 0)`, without wall kicks
//! - A blocked move leaves everything unchanged
//! - Soft drop into an obstacle locks the piece; hard drop always locks
//! - Clearing `n` rows at once scores `n²`
//! - The game ends when a new piece cannot spawn
//!
//! # Example
//!
//! ```
//! use blockfall_core::{GameState, ScriptedSource, TurnOutcome};
//! use blockfall_core::types::{GridConfig, InputEvent, PieceKind};
//!
//! let mut game = GameState::new(GridConfig::default(), ScriptedSource::repeat(PieceKind::O));
//! game.start();
//!
//! game.apply_event(InputEvent::Right);
//! let outcome = game.apply_event(InputEvent::HardDrop);
//! assert!(matches!(outcome, TurnOutcome::Locked(_)));
//! assert_eq!(game.pieces(), 2);
//! assert_eq!(game.score(), 0);
//! ```

pub mod driver;
pub mod game_state;
pub mod grid;
pub mod pieces;
pub mod placement;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use driver::{InputSource, RecordingRenderer, Renderer, ScriptedInput};
pub use game_state::{EndReason, GameResult, GameState, LockEvent, TurnOutcome};
pub use grid::Grid;
pub use pieces::{bounds, rotate_ccw, rotate_cw, shape_for, Offset, Shape, ShapeBounds};
pub use placement::{apply_move, hard_drop, spawn, spawn_anchor, MoveOutcome, Piece};
pub use rng::{PieceSource, ScriptedSource, SimpleRng, UniformSource};
pub use scoring::score_for_lines;
pub use snapshot::{ActiveSnapshot, GameSnapshot};
