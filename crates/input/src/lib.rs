//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`] and buffers them in
//! an [`ActionQueue`] the turn driver drains once per tick.

pub mod map;
pub mod queue;

pub use tetris_2048_types as types;

pub use map::{handle_key_event, handle_menu_key, should_quit, MenuKey};
pub use queue::{ActionQueue, TerminalInput, QUEUE_CAPACITY};
