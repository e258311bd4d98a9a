//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! Everything here is plain data, usable from the core engine, the input
//! mapping, and the terminal renderer alike.
//!
//! # Grid Dimensions
//!
//! The grid size is a runtime value ([`GridConfig`]) passed into the engine.
//! Defaults match the classic playfield:
//!
//! - **Columns**: 10 (indexed 0-9, left to right)
//! - **Rows**: 20 (indexed 0-19, top to bottom)
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{GridConfig, InputEvent, PieceKind, DEFAULT_COLS, DEFAULT_ROWS};
//!
//! let config = GridConfig::default();
//! assert_eq!(config.cols(), DEFAULT_COLS);
//! assert_eq!(config.rows(), DEFAULT_ROWS);
//!
//! // Variants are indexed in catalog order I, J, L, S, Z, T, O.
//! assert_eq!(PieceKind::from_index(6), Some(PieceKind::O));
//!
//! assert_eq!(InputEvent::from_str("hardDrop"), Some(InputEvent::HardDrop));
//! ```

use thiserror::Error;

/// Default grid width in cells (10 columns)
pub const DEFAULT_COLS: u16 = 10;

/// Default grid height in cells (20 rows)
pub const DEFAULT_ROWS: u16 = 20;

/// Smallest accepted grid side.
///
/// Every catalog shape fits in a 3-wide, 4-tall box at spawn.
pub const MIN_GRID_SIDE: u16 = 4;

/// Largest accepted grid side. Keeps every coordinate inside `i16`.
pub const MAX_GRID_SIDE: u16 = 1024;

/// The seven tetromino piece kinds, in catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    S,
    Z,
    T,
    O,
}

impl PieceKind {
    /// All kinds in catalog order. `ALL[i]` is the variant for random index `i`.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::T,
        PieceKind::O,
    ];

    /// Map a random index in `[0, 7)` to a kind.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Uppercase letter used by renderers.
    pub fn letter(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::J => "J",
            PieceKind::L => "L",
            PieceKind::S => "S",
            PieceKind::Z => "Z",
            PieceKind::T => "T",
            PieceKind::O => "O",
        }
    }
}

/// A single transformation the placement engine can attempt.
///
/// Translations change only the anchor; rotations change only the shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    TranslateLeft,
    TranslateRight,
    TranslateDown,
    RotateCw,
    RotateCcw,
}

impl MoveKind {
    /// Anchor delta for translations, `(0, 0)` for rotations.
    pub fn delta(&self) -> (i16, i16) {
        match self {
            MoveKind::TranslateLeft => (-1, 0),
            MoveKind::TranslateRight => (1, 0),
            MoveKind::TranslateDown => (0, 1),
            MoveKind::RotateCw | MoveKind::RotateCcw => (0, 0),
        }
    }
}

/// Discrete input events, one per turn.
///
/// These are produced by an input source (terminal, scripted, line-based)
/// and consumed by the game loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputEvent {
    /// Move piece one cell left
    Left,
    /// Move piece one cell right
    Right,
    /// Rotate piece 90° clockwise around its pivot
    RotateCw,
    /// Rotate piece 90° counter-clockwise around its pivot
    RotateCcw,
    /// Move piece one cell down; locks the piece if it cannot descend
    SoftDrop,
    /// Drop piece to its lowest reachable row and lock it
    HardDrop,
    /// End the game
    Quit,
}

impl InputEvent {
    /// Parse event from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::InputEvent;
    ///
    /// assert_eq!(InputEvent::from_str("left"), Some(InputEvent::Left));
    /// assert_eq!(InputEvent::from_str("rotateCcw"), Some(InputEvent::RotateCcw));
    /// assert_eq!(InputEvent::from_str("jump"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "left" => Some(InputEvent::Left),
            "right" => Some(InputEvent::Right),
            "rotatecw" => Some(InputEvent::RotateCw),
            "rotateccw" => Some(InputEvent::RotateCcw),
            "softdrop" => Some(InputEvent::SoftDrop),
            "harddrop" => Some(InputEvent::HardDrop),
            "quit" => Some(InputEvent::Quit),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            InputEvent::Left => "left",
            InputEvent::Right => "right",
            InputEvent::RotateCw => "rotateCw",
            InputEvent::RotateCcw => "rotateCcw",
            InputEvent::SoftDrop => "softDrop",
            InputEvent::HardDrop => "hardDrop",
            InputEvent::Quit => "quit",
        }
    }
}

/// Invalid configuration values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("grid width {0} outside {min}..={max} columns", min = MIN_GRID_SIDE, max = MAX_GRID_SIDE)]
    Cols(u16),
    #[error("grid height {0} outside {min}..={max} rows", min = MIN_GRID_SIDE, max = MAX_GRID_SIDE)]
    Rows(u16),
}

/// Validated grid dimensions, fixed for the lifetime of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridConfig {
    cols: u16,
    rows: u16,
}

impl GridConfig {
    pub fn new(cols: u16, rows: u16) -> Result<Self, ConfigError> {
        if !(MIN_GRID_SIDE..=MAX_GRID_SIDE).contains(&cols) {
            return Err(ConfigError::Cols(cols));
        }
        if !(MIN_GRID_SIDE..=MAX_GRID_SIDE).contains(&rows) {
            return Err(ConfigError::Rows(rows));
        }
        Ok(Self { cols, rows })
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            cols: DEFAULT_COLS,
            rows: DEFAULT_ROWS,
        }
    }
}
