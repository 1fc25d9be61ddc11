//! Read-only view of a game, handed to renderers once per frame.

use arrayvec::ArrayVec;

use crate::game_state::Game;
use crate::tetromino::{Tetromino, TileMatrix};
use crate::tile::Tile;
use crate::types::{GameStatus, PieceKind, Position};

/// The falling piece as seen by a renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub cells: ArrayVec<(Position, Tile), 4>,
}

impl From<&Tetromino> for ActiveSnapshot {
    fn from(value: &Tetromino) -> Self {
        Self {
            kind: value.kind(),
            cells: value.cells(),
        }
    }
}

/// The queued piece, trimmed to its occupied block for the preview panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NextSnapshot {
    pub kind: PieceKind,
    pub tiles: TileMatrix,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub height: usize,
    pub width: usize,
    /// Row-major, row 0 at the bottom.
    pub cells: Vec<Option<Tile>>,
    pub active: Option<ActiveSnapshot>,
    pub next: Option<NextSnapshot>,
    pub score: u32,
    pub victory_score: u32,
    pub status: GameStatus,
    pub tick: u64,
}

impl GameSnapshot {
    /// Tile locked at (row, col), if any.
    pub fn tile_at(&self, row: usize, col: usize) -> Option<Tile> {
        if row >= self.height || col >= self.width {
            return None;
        }
        self.cells[row * self.width + col]
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            height: 0,
            width: 0,
            cells: Vec::new(),
            active: None,
            next: None,
            score: 0,
            victory_score: 0,
            status: GameStatus::Playing,
            tick: 0,
        }
    }
}

impl From<&Game> for GameSnapshot {
    fn from(game: &Game) -> Self {
        game.snapshot()
    }
}
