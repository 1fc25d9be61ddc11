//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the game.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, configuration).
//!
//! # Grid Coordinates
//!
//! The grid uses a bottom-up coordinate system:
//!
//! - **x** (column) ranges `0..width`, left to right
//! - **y** (row) ranges `0..height`, bottom to top
//! - Positions with `y >= height` are above the ceiling (where new pieces spawn)
//!
//! # Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `GRID_HEIGHT` | 20 | Rows in the play grid |
//! | `GRID_WIDTH` | 12 | Columns in the play grid |
//! | `VICTORY_SCORE` | 2048 | Score that must be exceeded to win |
//! | `Speed::Medium` | 250ms | Default frame wait |
//!
//! # Examples
//!
//! ```
//! use tetris_2048_types::{GameConfig, PieceKind, Speed};
//!
//! assert_eq!(PieceKind::T.matrix_size(), 3);
//! assert_eq!(PieceKind::I.as_str(), "I");
//!
//! let config = GameConfig::default();
//! assert_eq!((config.height, config.width), (20, 12));
//! assert_eq!(config.speed, Speed::Medium);
//! ```

/// Default grid height in cells (20 rows)
pub const GRID_HEIGHT: usize = 20;

/// Default grid width in cells (12 columns)
pub const GRID_WIDTH: usize = 12;

/// Smallest accepted grid dimension (fits the 4x4 I piece)
pub const MIN_GRID_DIM: usize = 4;

/// Default victory threshold; the game is won once the score exceeds it
pub const VICTORY_SCORE: u32 = 2048;

/// Number of high scores shown in the table
pub const HIGH_SCORE_DISPLAY_LIMIT: usize = 10;

/// Frame wait while a menu screen is shown (ms)
pub const MENU_FRAME_MS: u64 = 50;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// The seven tetromino piece kinds
///
/// Each kind occupies a square matrix: 2x2 for **O**, 4x4 for **I**,
/// 3x3 for **Z**, **J**, **L**, **S** and **T**.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    Z,
    J,
    L,
    S,
    T,
}

impl PieceKind {
    /// All kinds, in the order used by the random generator.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
        PieceKind::S,
        PieceKind::T,
    ];

    /// Uppercase letter used in the side panel and logs
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::O => "O",
            PieceKind::Z => "Z",
            PieceKind::J => "J",
            PieceKind::L => "L",
            PieceKind::S => "S",
            PieceKind::T => "T",
        }
    }

    /// Side length of the square tile matrix for this kind
    pub fn matrix_size(&self) -> usize {
        match self {
            PieceKind::O => 2,
            PieceKind::I => 4,
            _ => 3,
        }
    }
}

/// A one-cell translation requested for a tetromino.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Down,
}

impl Direction {
    /// Column and row delta in grid coordinates (row grows upward).
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Down => (0, -1),
        }
    }
}

/// Absolute grid position (column `x`, row `y`).
///
/// Signed because a tetromino may straddle the ceiling while spawning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Return this position shifted by `(dx, dy)`.
    pub fn translated(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Player actions consumed by the turn driver
///
/// At most one action is applied per tick; the rest of the queue is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down
    SoftDrop,
    /// Drop piece until it is blocked
    HardDrop,
    /// Rotate piece 90° clockwise
    Rotate,
    /// Toggle pause state
    Pause,
    /// Restart the session (menus only)
    Restart,
    /// Leave the game (menus only)
    Quit,
}

/// Fall speed presets (frame wait per tick)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Speed {
    Slow,
    #[default]
    Medium,
    Fast,
}

impl Speed {
    pub const ALL: [Speed; 3] = [Speed::Slow, Speed::Medium, Speed::Fast];

    /// Milliseconds the renderer waits after each tick
    pub fn frame_ms(&self) -> u64 {
        match self {
            Speed::Slow => 400,
            Speed::Medium => 250,
            Speed::Fast => 50,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Speed::Slow => "Slow",
            Speed::Medium => "Medium",
            Speed::Fast => "Fast",
        }
    }
}

/// Immutable game configuration threaded into the grid and the turn driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub height: usize,
    pub width: usize,
    pub victory_score: u32,
    pub speed: Speed,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            height: GRID_HEIGHT,
            width: GRID_WIDTH,
            victory_score: VICTORY_SCORE,
            speed: Speed::Medium,
        }
    }
}

impl GameConfig {
    /// Configuration with custom grid dimensions and default rules.
    pub fn with_size(height: usize, width: usize) -> Self {
        Self {
            height,
            width,
            ..Self::default()
        }
    }
}

/// Terminal condition of a session, as seen by the turn driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Playing,
    Paused,
    GameOver,
    Victory,
}

impl GameStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, GameStatus::GameOver | GameStatus::Victory)
    }

    /// Heading shown on the ending screen
    pub fn heading(&self) -> &'static str {
        match self {
            GameStatus::Playing => "PLAYING",
            GameStatus::Paused => "PAUSED",
            GameStatus::GameOver => "GAME OVER!",
            GameStatus::Victory => "VICTORY!",
        }
    }
}
