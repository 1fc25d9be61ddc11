//! Grid module - the board of locked tiles
//!
//! The grid is a `height x width` board where each cell is empty or holds one tile.
//! Uses a flat array (row-major, `row * width + col`) with row 0 at the bottom.
//! Cells above the top row are outside the grid and always read as vacant, which
//! lets a freshly spawned piece straddle the ceiling.

use crate::tetromino::TileMatrix;
use crate::tile::Tile;
use crate::types::{GameConfig, Position};

/// One vertical merge: the tile at `(row, col)` absorbed its upper neighbor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeEvent {
    pub row: usize,
    pub col: usize,
    pub value: u32,
}

/// Result of a row-clear pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowClear {
    /// Cleared row indices, bottom to top, as they were before compaction.
    pub rows: Vec<usize>,
    /// Sum of the cleared tile values (added to the score).
    pub score: u32,
}

/// The persistent game board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    height: usize,
    width: usize,
    cells: Vec<Option<Tile>>,
    score: u32,
    game_over: bool,
}

impl Grid {
    /// Create an empty grid. Dimensions are fixed for its lifetime.
    pub fn new(height: usize, width: usize) -> Self {
        Self {
            height,
            width,
            cells: vec![None; height * width],
            score: 0,
            game_over: false,
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.height, config.width)
    }

    /// Calculate flat index from (row, col)
    #[inline(always)]
    fn index(&self, row: i32, col: i32) -> Option<usize> {
        if !self.is_inside(row, col) {
            return None;
        }
        Some(row as usize * self.width + col as usize)
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Strict bounds check.
    pub fn is_inside(&self, row: i32, col: i32) -> bool {
        row >= 0 && (row as usize) < self.height && col >= 0 && (col as usize) < self.width
    }

    /// True only for an in-bounds cell holding a tile.
    pub fn is_occupied(&self, row: i32, col: i32) -> bool {
        self.get(row, col).is_some()
    }

    /// Tile at (row, col); None if empty or out of bounds.
    pub fn get(&self, row: i32, col: i32) -> Option<&Tile> {
        self.index(row, col).and_then(|i| self.cells[i].as_ref())
    }

    /// Set cell at (row, col). Returns false if out of bounds.
    pub fn set(&mut self, row: i32, col: i32, tile: Option<Tile>) -> bool {
        match self.index(row, col) {
            Some(i) => {
                self.cells[i] = tile;
                true
            }
            None => false,
        }
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Option<Tile>] {
        &self.cells
    }

    pub fn tile_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        if row >= self.height {
            return false;
        }
        let start = row * self.width;
        self.cells[start..start + self.width].iter().all(Option::is_some)
    }

    /// Lock a trimmed tile matrix whose bottom-left cell sits at `origin`.
    ///
    /// Each tile landing outside the grid (above the ceiling) ends the game; the
    /// remaining tiles are still written. Returns the game-over flag.
    pub fn lock_tiles(&mut self, tiles: &TileMatrix, origin: Position) -> bool {
        let rows = tiles.rows();
        for (row, col, tile) in tiles.occupied() {
            let y = origin.y + (rows - 1 - row) as i32;
            let x = origin.x + col as i32;
            if !self.set(y, x, Some(tile)) {
                self.game_over = true;
            }
        }
        self.game_over
    }

    /// Merge equal vertical neighbors, column by column, bottom to top.
    ///
    /// The lower tile doubles and the upper one is removed; every tile above the
    /// gap then falls one cell. The scan resumes one row lower so chains created
    /// by the fall, or under the doubled tile, resolve in the same pass.
    pub fn merge_tiles(&mut self) -> Vec<MergeEvent> {
        let mut events = Vec::new();
        if self.height < 2 {
            return events;
        }

        for col in 0..self.width {
            let mut row = 0;
            while row + 1 < self.height {
                let lower = self.cells[row * self.width + col];
                let upper = self.cells[(row + 1) * self.width + col];
                match (lower, upper) {
                    (Some(mut merged), Some(above)) if merged.value() == above.value() => {
                        let value = merged.double();
                        self.cells[row * self.width + col] = Some(merged);
                        self.score = self.score.saturating_add(value);
                        self.collapse_column(col, row + 1);
                        events.push(MergeEvent { row, col, value });
                        row = row.saturating_sub(1);
                    }
                    _ => row += 1,
                }
            }
        }

        events
    }

    /// Shift every cell of `col` above `gap` down by one, emptying the top cell.
    fn collapse_column(&mut self, col: usize, gap: usize) {
        for row in gap..self.height - 1 {
            self.cells[row * self.width + col] = self.cells[(row + 1) * self.width + col];
        }
        self.cells[(self.height - 1) * self.width + col] = None;
    }

    /// Clear every row that is full right now and compact the rows above.
    ///
    /// Full rows are picked from one snapshot before anything moves. Uses a
    /// two-pointer compaction, scanning bottom to top.
    pub fn clear_rows(&mut self) -> RowClear {
        let full: Vec<bool> = (0..self.height).map(|row| self.is_row_full(row)).collect();
        let mut result = RowClear::default();
        if !full.contains(&true) {
            return result;
        }

        let width = self.width;
        let mut write_row = 0;
        for read_row in 0..self.height {
            let start = read_row * width;
            if full[read_row] {
                let row_sum = self.cells[start..start + width]
                    .iter()
                    .flatten()
                    .fold(0u32, |acc, tile| acc.saturating_add(tile.value()));
                result.score = result.score.saturating_add(row_sum);
                result.rows.push(read_row);
            } else {
                if write_row != read_row {
                    self.cells
                        .copy_within(start..start + width, write_row * width);
                }
                write_row += 1;
            }
        }

        // Clear the remaining rows at the top
        for cell in &mut self.cells[write_row * width..] {
            *cell = None;
        }

        self.score = self.score.saturating_add(result.score);
        result
    }
}
