//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: game and menu screens are drawn into
//! a plain framebuffer which is then diffed and flushed to the terminal.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Render the grid bottom-up with 2048 tile colors
//! - Allow precise control over aspect ratio (5 columns per grid cell)

pub mod fb;
pub mod game_view;
pub mod menu;
pub mod renderer;

pub use tetris_2048_core as core;
pub use tetris_2048_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use menu::{MenuScreen, MenuView, TITLE};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
