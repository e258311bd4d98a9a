//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer. It avoids widget/layout libraries
//! and renders into a plain framebuffer that is diffed and flushed to the
//! terminal. A plain-text renderer is provided for pipes and logs.
//!
//! Both [`TerminalScreen`] and [`TextRenderer`] implement the core
//! [`Renderer`](crate::core::Renderer) trait.

pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod screen;
pub mod text;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, FrameRect, GameView, Viewport};
pub use renderer::TerminalRenderer;
pub use screen::TerminalScreen;
pub use text::{render_text, TextRenderer};
