//! Tetromino tests - shapes, walls, rotation and drops

use rand::rngs::StdRng;
use rand::SeedableRng;

use tetris_2048::core::{canonical_cells, Grid, Tetromino, Tile};
use tetris_2048::types::{Direction, PieceKind, Position};

fn sorted_occupancy(piece: &Tetromino) -> Vec<(usize, usize)> {
    let mut cells = piece.occupancy().to_vec();
    cells.sort();
    cells
}

fn sorted(cells: &[(usize, usize)]) -> Vec<(usize, usize)> {
    let mut cells = cells.to_vec();
    cells.sort();
    cells
}

// ============== Shape Tests ==============

#[test]
fn test_canonical_occupancy_for_every_kind() {
    let expected: [(PieceKind, [(usize, usize); 4]); 7] = [
        (PieceKind::I, [(1, 0), (1, 1), (1, 2), (1, 3)]),
        (PieceKind::O, [(0, 0), (1, 0), (0, 1), (1, 1)]),
        (PieceKind::Z, [(0, 1), (1, 1), (1, 2), (2, 2)]),
        (PieceKind::J, [(1, 0), (1, 1), (1, 2), (0, 2)]),
        (PieceKind::L, [(1, 0), (1, 1), (1, 2), (2, 2)]),
        (PieceKind::S, [(1, 0), (1, 1), (0, 1), (2, 0)]),
        (PieceKind::T, [(0, 1), (1, 1), (1, 2), (2, 1)]),
    ];

    for (kind, cells) in expected {
        let piece = Tetromino::with_value(kind, Position::new(0, 0), 2);
        assert_eq!(piece.size(), kind.matrix_size(), "{:?}", kind);
        assert_eq!(sorted_occupancy(&piece), sorted(&cells), "{:?}", kind);
        assert_eq!(sorted(&canonical_cells(kind)), sorted(&cells), "{:?}", kind);
    }
}

#[test]
fn test_fresh_tiles_are_two_or_four() {
    let grid = Grid::new(20, 12);
    let mut rng = StdRng::seed_from_u64(99);
    for kind in PieceKind::ALL {
        let piece = Tetromino::spawn(kind, &grid, &mut rng);
        for (_, tile) in piece.cells() {
            assert!(matches!(tile.value(), 2 | 4), "{:?}", tile);
        }
        assert_eq!(piece.anchor().y, 19);
        assert!(piece.anchor().x >= 0);
        assert!(piece.anchor().x as usize + kind.matrix_size() <= 12);
    }
}

#[test]
fn test_cell_positions_follow_anchor() {
    // Matrix row 0 is the top, grid row 0 is the bottom.
    let piece = Tetromino::with_value(PieceKind::T, Position::new(3, 7), 2);
    let mut positions: Vec<Position> = piece.cells().iter().map(|(p, _)| *p).collect();
    positions.sort_by_key(|p| (p.y, p.x));
    assert_eq!(
        positions,
        vec![
            Position::new(4, 7),
            Position::new(3, 8),
            Position::new(4, 8),
            Position::new(5, 8),
        ]
    );
}

// ============== Movement Tests ==============

#[test]
fn test_walls_hold_in_every_rotation() {
    let grid = Grid::new(20, 12);

    for kind in PieceKind::ALL {
        for turns in 0..4 {
            let mut piece = Tetromino::with_value(kind, Position::new(4, 8), 2);
            for _ in 0..turns {
                assert!(piece.rotate_clockwise(&grid), "{:?} turn {}", kind, turns);
            }

            while piece.move_by(Direction::Left, &grid) {}
            let min_x = piece.cells().iter().map(|(p, _)| p.x).min().unwrap();
            assert_eq!(min_x, 0, "{:?} turn {}", kind, turns);

            let anchor = piece.anchor();
            assert!(!piece.move_by(Direction::Left, &grid));
            assert_eq!(piece.anchor(), anchor);

            while piece.move_by(Direction::Right, &grid) {}
            let max_x = piece.cells().iter().map(|(p, _)| p.x).max().unwrap();
            assert_eq!(max_x, 11, "{:?} turn {}", kind, turns);

            let anchor = piece.anchor();
            assert!(!piece.move_by(Direction::Right, &grid));
            assert_eq!(piece.anchor(), anchor);
        }
    }
}

#[test]
fn test_move_blocked_by_locked_tile() {
    let mut grid = Grid::new(20, 12);
    // O occupies columns 4-5, rows 0-1 at this anchor.
    let mut piece = Tetromino::with_value(PieceKind::O, Position::new(4, 0), 2);
    grid.set(1, 3, Some(Tile::new(8)));

    assert!(!piece.can_move(Direction::Left, &grid));
    assert!(piece.move_by(Direction::Right, &grid));
    assert_eq!(piece.anchor(), Position::new(5, 0));
}

#[test]
fn test_down_stops_on_floor_and_stack() {
    let mut grid = Grid::new(20, 12);
    let piece = Tetromino::with_value(PieceKind::I, Position::new(0, 0), 2);
    assert!(!piece.can_move(Direction::Down, &grid));

    grid.set(3, 1, Some(Tile::new(2)));
    let piece = Tetromino::with_value(PieceKind::I, Position::new(0, 4), 2);
    assert!(!piece.can_move(Direction::Down, &grid));
    let piece = Tetromino::with_value(PieceKind::I, Position::new(0, 5), 2);
    assert!(piece.can_move(Direction::Down, &grid));
}

#[test]
fn test_hard_drop_lands_on_stack() {
    let mut grid = Grid::new(20, 12);
    grid.set(0, 1, Some(Tile::new(4)));

    let mut piece = Tetromino::with_value(PieceKind::I, Position::new(0, 15), 2);
    assert!(piece.hard_drop(&grid));
    // Bottom tile of the bar rests on row 1.
    assert_eq!(piece.anchor(), Position::new(0, 1));

    // Already resting: nothing to drop.
    assert!(!piece.can_hard_drop(&grid));
    assert!(!piece.hard_drop(&grid));
}

#[test]
fn test_hard_drop_rejected_when_one_column_rests() {
    let mut grid = Grid::new(20, 12);
    // T at this anchor: stem at (4, 7), arms at (3, 8) and (5, 8).
    let mut piece = Tetromino::with_value(PieceKind::T, Position::new(3, 7), 2);
    // Only the right arm is supported; the stem and left arm hang free.
    grid.set(7, 5, Some(Tile::new(16)));

    assert!(!piece.can_move(Direction::Down, &grid));
    assert!(!piece.can_hard_drop(&grid));
    assert!(!piece.hard_drop(&grid));
    assert_eq!(piece.anchor(), Position::new(3, 7));
}

#[test]
fn test_hard_drop_from_spawn_reaches_floor() {
    let grid = Grid::new(20, 12);
    let mut rng = StdRng::seed_from_u64(5);
    for kind in PieceKind::ALL {
        let mut piece = Tetromino::spawn(kind, &grid, &mut rng);
        // Fresh pieces straddle the ceiling.
        assert!(piece.cells().iter().any(|(p, _)| p.y >= 20), "{:?}", kind);

        assert!(piece.hard_drop(&grid), "{:?}", kind);
        let min_y = piece.cells().iter().map(|(p, _)| p.y).min().unwrap();
        assert_eq!(min_y, 0, "{:?}", kind);
        for (p, _) in piece.cells() {
            assert!(grid.is_inside(p.y, p.x), "{:?} at {:?}", kind, p);
        }
    }
}

// ============== Rotation Tests ==============

#[test]
fn test_four_rotations_restore_occupancy() {
    let grid = Grid::new(20, 12);
    for kind in PieceKind::ALL {
        let mut piece = Tetromino::with_value(kind, Position::new(4, 8), 2);
        let original = sorted_occupancy(&piece);
        for _ in 0..4 {
            assert!(piece.rotate_clockwise(&grid));
        }
        assert_eq!(sorted_occupancy(&piece), original, "{:?}", kind);
        assert_eq!(piece.anchor(), Position::new(4, 8));
    }
}

#[test]
fn test_rotation_is_clockwise() {
    let grid = Grid::new(20, 12);
    // T points down (stem at matrix row 2); clockwise it points left.
    let mut piece = Tetromino::with_value(PieceKind::T, Position::new(4, 8), 2);
    assert!(piece.rotate_clockwise(&grid));
    assert_eq!(sorted_occupancy(&piece), sorted(&[(1, 0), (1, 1), (1, 2), (0, 1)]));
}

#[test]
fn test_rotation_rejected_above_ceiling() {
    let grid = Grid::new(20, 12);
    // Horizontal I after one turn would stand vertically through the ceiling.
    let mut piece = Tetromino::with_value(PieceKind::I, Position::new(4, 4), 2);
    assert!(piece.rotate_clockwise(&grid));
    piece.set_anchor(Position::new(4, 17));
    let before = sorted_occupancy(&piece);

    assert!(!piece.can_rotate(&grid));
    assert!(!piece.rotate_clockwise(&grid));
    assert_eq!(sorted_occupancy(&piece), before);
}

#[test]
fn test_rotation_rejected_into_occupied_cell() {
    let mut grid = Grid::new(20, 12);
    let mut piece = Tetromino::with_value(PieceKind::I, Position::new(4, 4), 2);
    // The clockwise matrix puts a tile on matrix (1, 0) -> grid (row 6, col 4).
    grid.set(6, 4, Some(Tile::new(2)));
    assert!(!piece.rotate_clockwise(&grid));

    grid.set(6, 4, None);
    assert!(piece.rotate_clockwise(&grid));
}

#[test]
fn test_rotation_rejected_at_wall() {
    let grid = Grid::new(20, 12);
    // Vertical I in matrix column 1, pushed against the left wall (anchor.x = -1).
    let mut piece = Tetromino::with_value(PieceKind::I, Position::new(4, 4), 2);
    while piece.move_by(Direction::Left, &grid) {}
    assert_eq!(piece.anchor().x, -1);
    assert!(!piece.rotate_clockwise(&grid));
}

// ============== Footprint Tests ==============

#[test]
fn test_min_bounded_matrix_keeps_tiles() {
    let piece = Tetromino::with_value(PieceKind::Z, Position::new(2, 3), 8);
    let (tiles, origin) = piece.min_bounded_with_position();
    assert_eq!((tiles.rows(), tiles.cols()), (2, 3));
    // Z occupies matrix rows 1-2, columns 0-2.
    assert_eq!(origin, Position::new(2, 3));
    assert_eq!(tiles.get(0, 0).map(|t| t.value()), Some(8));
    assert_eq!(tiles.get(0, 2), None);
    assert_eq!(tiles.get(1, 2).map(|t| t.value()), Some(8));

    let (moved, moved_origin) = piece.clone().into_footprint();
    assert_eq!(moved, piece.min_bounded_matrix());
    assert_eq!(moved_origin, origin);
}
