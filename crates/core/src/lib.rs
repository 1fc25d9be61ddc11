//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the rules of Tetris 2048: tetrominoes fall on a grid,
//! and once a piece locks, equal tiles stacked vertically merge and double
//! (2048 style) while full rows clear for their summed value.
//! It has **no dependencies** on terminal I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Unit tests for every rule
//! - **Portable**: Runs headless or behind any renderer
//!
//! # Module Structure
//!
//! - [`tile`]: numbered tiles and the value-to-color table
//! - [`tetromino`]: the seven shapes, movement/rotation legality, footprint extraction
//! - [`grid`]: locking, merge resolution with local gravity, row clearing, score
//! - [`rng`]: uniform random piece generation
//! - [`game_state`]: the tick driver (input, auto-fall, lock, succession, resolution)
//! - [`snapshot`]: read-only frame data for renderers
//!
//! # Example
//!
//! ```
//! use tetris_2048_core::{Game, Tetromino};
//! use tetris_2048_types::{GameConfig, GameStatus, PieceKind, Position};
//!
//! let mut game = Game::new(GameConfig::default(), 12345);
//!
//! // Put an O piece of 2s in the bottom-left corner and let it lock.
//! game.replace_current(Tetromino::with_value(PieceKind::O, Position::new(0, 0), 2));
//! assert_eq!(game.step(None), GameStatus::Playing);
//!
//! // Each column merged 2+2 into a 4.
//! assert_eq!(game.score(), 8);
//! assert_eq!(game.grid().tile_count(), 2);
//! ```

pub mod game_state;
pub mod grid;
pub mod rng;
pub mod snapshot;
pub mod tetromino;
pub mod tile;

pub use tetris_2048_types as types;

// Re-export commonly used types for convenience
pub use game_state::{CoreEvent, Game, Resolution, TickOutcome};
pub use grid::{Grid, MergeEvent, RowClear};
pub use rng::PieceGenerator;
pub use snapshot::{ActiveSnapshot, GameSnapshot, NextSnapshot};
pub use tetromino::{canonical_cells, Tetromino, TileMatrix};
pub use tile::{colors_for, Tile, TileColors, BOX_COLOR};
