//! Tetromino module - piece shapes, movement and rotation legality
//!
//! A tetromino is a square tile matrix (row 0 at the top) anchored by the grid
//! position of its bottom-left cell. Matrix cell `(row, col)` lives at grid
//! column `anchor.x + col` and grid row `anchor.y + (n - 1) - row`.

use arrayvec::ArrayVec;
use rand::Rng;

use crate::grid::Grid;
use crate::tile::Tile;
use crate::types::{Direction, PieceKind, Position};

/// Largest matrix side (the I piece)
pub const MAX_MATRIX: usize = 4;

type Matrix = [[Option<Tile>; MAX_MATRIX]; MAX_MATRIX];

/// Occupied `(col, row)` cells of a freshly built tetromino, row 0 at the top.
pub fn canonical_cells(kind: PieceKind) -> [(usize, usize); 4] {
    match kind {
        PieceKind::I => [(1, 0), (1, 1), (1, 2), (1, 3)],
        PieceKind::O => [(0, 0), (1, 0), (0, 1), (1, 1)],
        PieceKind::Z => [(0, 1), (1, 1), (1, 2), (2, 2)],
        PieceKind::J => [(1, 0), (1, 1), (1, 2), (0, 2)],
        PieceKind::L => [(1, 0), (1, 1), (1, 2), (2, 2)],
        PieceKind::S => [(1, 0), (1, 1), (0, 1), (2, 0)],
        PieceKind::T => [(0, 1), (1, 1), (1, 2), (2, 1)],
    }
}

/// A dense, row-major tile matrix trimmed to the occupied footprint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileMatrix {
    rows: usize,
    cols: usize,
    cells: ArrayVec<Option<Tile>, { MAX_MATRIX * MAX_MATRIX }>,
}

impl TileMatrix {
    fn empty() -> Self {
        Self {
            rows: 0,
            cols: 0,
            cells: ArrayVec::new(),
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&Tile> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.cells[row * self.cols + col].as_ref()
    }

    /// Iterate occupied cells as `(row, col, tile)`.
    pub fn occupied(&self) -> impl Iterator<Item = (usize, usize, Tile)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .filter_map(move |(i, cell)| cell.map(|tile| (i / cols, i % cols, tile)))
    }
}

/// A falling piece.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tetromino {
    kind: PieceKind,
    size: usize,
    matrix: Matrix,
    anchor: Position,
}

impl Tetromino {
    /// Build a tetromino at `anchor`, one random 2/4 tile per occupied cell.
    pub fn new<R: Rng + ?Sized>(kind: PieceKind, anchor: Position, rng: &mut R) -> Self {
        Self::build(kind, anchor, || Tile::random(rng))
    }

    /// Build a tetromino whose tiles all carry `value`.
    pub fn with_value(kind: PieceKind, anchor: Position, value: u32) -> Self {
        Self::build(kind, anchor, || Tile::new(value))
    }

    /// Build a tetromino entering above the grid at a random column.
    ///
    /// Its bottom matrix row sits on the top grid row; the rest is above the ceiling.
    pub fn spawn<R: Rng + ?Sized>(kind: PieceKind, grid: &Grid, rng: &mut R) -> Self {
        let n = kind.matrix_size();
        let max_x = grid.width().saturating_sub(n);
        let x = rng.gen_range(0..=max_x) as i32;
        let y = grid.height() as i32 - 1;
        Self::new(kind, Position::new(x, y), rng)
    }

    fn build(kind: PieceKind, anchor: Position, mut make_tile: impl FnMut() -> Tile) -> Self {
        let mut matrix: Matrix = [[None; MAX_MATRIX]; MAX_MATRIX];
        for (col, row) in canonical_cells(kind) {
            matrix[row][col] = Some(make_tile());
        }
        Self {
            kind,
            size: kind.matrix_size(),
            matrix,
            anchor,
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    /// Matrix side length.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn anchor(&self) -> Position {
        self.anchor
    }

    pub fn set_anchor(&mut self, anchor: Position) {
        self.anchor = anchor;
    }

    /// Occupied cells as `(col, row)` pairs, scanned row by row.
    pub fn occupancy(&self) -> ArrayVec<(usize, usize), 4> {
        let mut out = ArrayVec::new();
        for row in 0..self.size {
            for col in 0..self.size {
                if self.matrix[row][col].is_some() && !out.is_full() {
                    out.push((col, row));
                }
            }
        }
        out
    }

    /// Grid position of matrix cell `(row, col)` under the current anchor.
    #[inline]
    pub fn cell_position(&self, row: usize, col: usize) -> Position {
        Position::new(
            self.anchor.x + col as i32,
            self.anchor.y + (self.size - 1 - row) as i32,
        )
    }

    /// Absolute position and tile of every occupied cell.
    pub fn cells(&self) -> ArrayVec<(Position, Tile), 4> {
        let mut out = ArrayVec::new();
        for row in 0..self.size {
            for col in 0..self.size {
                if let Some(tile) = self.matrix[row][col] {
                    if !out.is_full() {
                        out.push((self.cell_position(row, col), tile));
                    }
                }
            }
        }
        out
    }

    /// Check a one-cell move without mutating anything.
    ///
    /// Left/right inspect the extremal tile of each matrix row, down inspects the
    /// bottommost tile of each column.
    pub fn can_move(&self, direction: Direction, grid: &Grid) -> bool {
        let n = self.size;
        match direction {
            Direction::Left => (0..n).all(|row| {
                match (0..n).find(|&col| self.matrix[row][col].is_some()) {
                    Some(col) => {
                        let p = self.cell_position(row, col);
                        p.x > 0 && !grid.is_occupied(p.y, p.x - 1)
                    }
                    None => true,
                }
            }),
            Direction::Right => (0..n).all(|row| {
                match (0..n).rev().find(|&col| self.matrix[row][col].is_some()) {
                    Some(col) => {
                        let p = self.cell_position(row, col);
                        p.x < grid.width() as i32 - 1 && !grid.is_occupied(p.y, p.x + 1)
                    }
                    None => true,
                }
            }),
            Direction::Down => (0..n).all(|col| {
                match (0..n).rev().find(|&row| self.matrix[row][col].is_some()) {
                    Some(row) => {
                        let p = self.cell_position(row, col);
                        p.y > 0 && !grid.is_occupied(p.y - 1, p.x)
                    }
                    None => true,
                }
            }),
        }
    }

    /// Move one cell in `direction`. Returns false (no-op) when blocked.
    pub fn move_by(&mut self, direction: Direction, grid: &Grid) -> bool {
        if !self.can_move(direction, grid) {
            return false;
        }
        let (dx, dy) = direction.delta();
        self.anchor = self.anchor.translated(dx, dy);
        true
    }

    /// A hard drop is refused only when the piece cannot descend at all.
    pub fn can_hard_drop(&self, grid: &Grid) -> bool {
        for row in (0..self.size).rev() {
            for col in 0..self.size {
                if self.matrix[row][col].is_none() {
                    continue;
                }
                let p = self.cell_position(row, col);
                if p.y == 0 || grid.is_occupied(p.y - 1, p.x) {
                    return false;
                }
            }
        }
        true
    }

    /// Descend until blocked.
    pub fn hard_drop(&mut self, grid: &Grid) -> bool {
        if !self.can_hard_drop(grid) {
            return false;
        }
        while self.move_by(Direction::Down, grid) {}
        true
    }

    /// Matrix rotated 90° clockwise: old `(row, col)` lands on `(col, n - 1 - row)`.
    fn rotated_matrix(&self) -> Matrix {
        let n = self.size;
        let mut rotated: Matrix = [[None; MAX_MATRIX]; MAX_MATRIX];
        for row in 0..n {
            for col in 0..n {
                rotated[col][n - 1 - row] = self.matrix[row][col];
            }
        }
        rotated
    }

    /// Every tile of the rotated matrix must land inside the grid on a free cell.
    pub fn can_rotate(&self, grid: &Grid) -> bool {
        self.fits(&self.rotated_matrix(), grid)
    }

    fn fits(&self, matrix: &Matrix, grid: &Grid) -> bool {
        let n = self.size;
        for row in 0..n {
            for col in 0..n {
                if matrix[row][col].is_none() {
                    continue;
                }
                let p = self.cell_position(row, col);
                if !grid.is_inside(p.y, p.x) || grid.is_occupied(p.y, p.x) {
                    return false;
                }
            }
        }
        true
    }

    /// Rotate clockwise in place, keeping the anchor. Returns false when illegal.
    pub fn rotate_clockwise(&mut self, grid: &Grid) -> bool {
        let rotated = self.rotated_matrix();
        if !self.fits(&rotated, grid) {
            return false;
        }
        self.matrix = rotated;
        true
    }

    /// `(min_row, max_row, min_col, max_col)` of the occupied cells.
    fn bounds(&self) -> Option<(usize, usize, usize, usize)> {
        let mut bounds: Option<(usize, usize, usize, usize)> = None;
        for row in 0..self.size {
            for col in 0..self.size {
                if self.matrix[row][col].is_none() {
                    continue;
                }
                bounds = Some(match bounds {
                    None => (row, row, col, col),
                    Some((r0, r1, c0, c1)) => {
                        (r0.min(row), r1.max(row), c0.min(col), c1.max(col))
                    }
                });
            }
        }
        bounds
    }

    /// Copy of the tightest sub-matrix holding every tile.
    pub fn min_bounded_matrix(&self) -> TileMatrix {
        self.min_bounded_with_position().0
    }

    /// Trimmed matrix plus the grid position of its bottom-left cell.
    pub fn min_bounded_with_position(&self) -> (TileMatrix, Position) {
        let Some((min_row, max_row, min_col, max_col)) = self.bounds() else {
            return (TileMatrix::empty(), self.anchor);
        };

        let mut trimmed = TileMatrix {
            rows: max_row - min_row + 1,
            cols: max_col - min_col + 1,
            cells: ArrayVec::new(),
        };
        for row in min_row..=max_row {
            for col in min_col..=max_col {
                trimmed.cells.push(self.matrix[row][col]);
            }
        }

        let origin = self
            .anchor
            .translated(min_col as i32, (self.size - 1 - max_row) as i32);
        (trimmed, origin)
    }

    /// Consume the piece, handing its trimmed tiles over for locking.
    pub fn into_footprint(self) -> (TileMatrix, Position) {
        self.min_bounded_with_position()
    }
}
