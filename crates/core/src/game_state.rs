//! Game state module - the turn driver
//!
//! This module ties together the grid, the active/next tetromino pair and the
//! piece generator. One call to [`Game::step`] is one tick:
//!
//! 1. apply at most one player action,
//! 2. attempt the automatic one-cell descent,
//! 3. on failure lock the piece, promote the next one and queue a fresh one,
//! 4. resolve merges, then full rows.
//!
//! Interactive drivers split the tick with [`Game::tick`] and [`Game::resolve`]
//! so the frame is rendered between locking and merge resolution.

use crate::grid::{Grid, MergeEvent, RowClear};
use crate::rng::PieceGenerator;
use crate::snapshot::{ActiveSnapshot, GameSnapshot, NextSnapshot};
use crate::tetromino::Tetromino;
use crate::types::{Direction, GameAction, GameConfig, GameStatus, PieceKind, Speed};

/// Something the core did that observers (event log, UI) may care about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreEvent {
    /// A piece locked into the grid.
    Locked {
        kind: PieceKind,
        tiles: usize,
        game_over: bool,
    },
    /// Two vertical neighbors merged.
    Merged(MergeEvent),
    /// Full rows were cleared.
    Cleared { rows: Vec<usize>, score: u32 },
    /// Game over or victory reached.
    Ended { status: GameStatus, score: u32 },
}

/// What happened during [`Game::tick`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// The player action was applied successfully.
    pub action_applied: bool,
    /// The active piece fell one cell on its own.
    pub descended: bool,
    /// The active piece locked and the next piece became active.
    pub locked: bool,
}

/// What happened during [`Game::resolve`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    pub merges: Vec<MergeEvent>,
    pub cleared: RowClear,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct Game {
    config: GameConfig,
    grid: Grid,
    current: Tetromino,
    next: Tetromino,
    generator: PieceGenerator,
    paused: bool,
    ended: bool,
    ticks: u64,
    pieces_locked: u32,
    events: Vec<CoreEvent>,
}

impl Game {
    /// Create a new game with the given RNG seed
    pub fn new(config: GameConfig, seed: u64) -> Self {
        Self::with_generator(config, PieceGenerator::new(seed))
    }

    pub fn with_generator(config: GameConfig, mut generator: PieceGenerator) -> Self {
        let grid = Grid::from_config(&config);
        let current = generator.spawn(&grid);
        let next = generator.spawn(&grid);
        Self {
            config,
            grid,
            current,
            next,
            generator,
            paused: false,
            ended: false,
            ticks: 0,
            pieces_locked: 0,
            events: Vec::new(),
        }
    }

    /// Discard the grid and both pieces; the score starts over at zero.
    ///
    /// The generator keeps running, so a restarted session gets fresh pieces.
    pub fn restart(&mut self) {
        self.grid = Grid::from_config(&self.config);
        self.current = self.generator.spawn(&self.grid);
        self.next = self.generator.spawn(&self.grid);
        self.paused = false;
        self.ended = false;
        self.ticks = 0;
        self.pieces_locked = 0;
        self.events.clear();
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Change the fall speed; takes effect on the next frame.
    pub fn set_speed(&mut self, speed: Speed) {
        self.config.speed = speed;
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Mutable grid access for scripted setups (tests, benches).
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn current(&self) -> &Tetromino {
        &self.current
    }

    pub fn next(&self) -> &Tetromino {
        &self.next
    }

    /// Swap in a specific active piece, returning the old one.
    pub fn replace_current(&mut self, piece: Tetromino) -> Tetromino {
        std::mem::replace(&mut self.current, piece)
    }

    /// Swap in a specific queued piece, returning the old one.
    pub fn replace_next(&mut self, piece: Tetromino) -> Tetromino {
        std::mem::replace(&mut self.next, piece)
    }

    pub fn seed(&self) -> u64 {
        self.generator.seed()
    }

    pub fn score(&self) -> u32 {
        self.grid.score()
    }

    pub fn game_over(&self) -> bool {
        self.grid.game_over()
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn pieces_locked(&self) -> u32 {
        self.pieces_locked
    }

    /// Terminal checks in driver order: victory first, then game over.
    pub fn status(&self) -> GameStatus {
        if self.grid.score() > self.config.victory_score {
            GameStatus::Victory
        } else if self.grid.game_over() {
            GameStatus::GameOver
        } else if self.paused {
            GameStatus::Paused
        } else {
            GameStatus::Playing
        }
    }

    /// Drain the events recorded since the last call.
    pub fn drain_events(&mut self) -> Vec<CoreEvent> {
        std::mem::take(&mut self.events)
    }

    /// Apply a single player action to the active piece.
    ///
    /// While paused only `Pause` (resume) and `Restart` are honoured.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        if self.status().is_terminal() && action != GameAction::Restart {
            return false;
        }

        match action {
            GameAction::Pause => {
                self.paused = !self.paused;
                true
            }
            GameAction::Restart => {
                self.restart();
                true
            }
            GameAction::Quit => false,
            _ if self.paused => false,
            GameAction::MoveLeft => self.current.move_by(Direction::Left, &self.grid),
            GameAction::MoveRight => self.current.move_by(Direction::Right, &self.grid),
            GameAction::SoftDrop => self.current.move_by(Direction::Down, &self.grid),
            GameAction::Rotate => self.current.rotate_clockwise(&self.grid),
            GameAction::HardDrop => self.current.hard_drop(&self.grid),
        }
    }

    /// Input, auto-fall and lock for one tick. Does nothing once terminal.
    pub fn tick(&mut self, action: Option<GameAction>) -> TickOutcome {
        let mut outcome = TickOutcome::default();
        if self.status().is_terminal() {
            return outcome;
        }

        if let Some(action) = action {
            outcome.action_applied = self.apply_action(action);
        }

        if self.paused || self.status().is_terminal() {
            return outcome;
        }
        self.ticks += 1;

        if self.current.move_by(Direction::Down, &self.grid) {
            outcome.descended = true;
        } else {
            self.lock_current();
            outcome.locked = true;
        }
        outcome
    }

    /// Lock the active piece and promote the queued one.
    fn lock_current(&mut self) {
        let fresh = self.generator.spawn(&self.grid);
        let promoted = std::mem::replace(&mut self.next, fresh);
        let landed = std::mem::replace(&mut self.current, promoted);

        let kind = landed.kind();
        let (tiles, origin) = landed.into_footprint();
        let game_over = self.grid.lock_tiles(&tiles, origin);
        self.pieces_locked += 1;

        self.events.push(CoreEvent::Locked {
            kind,
            tiles: tiles.occupied().count(),
            game_over,
        });
    }

    /// Merge resolution followed by row clearing.
    pub fn resolve(&mut self) -> Resolution {
        let merges = self.grid.merge_tiles();
        let cleared = self.grid.clear_rows();

        self.events.extend(merges.iter().copied().map(CoreEvent::Merged));
        if !cleared.rows.is_empty() {
            self.events.push(CoreEvent::Cleared {
                rows: cleared.rows.clone(),
                score: cleared.score,
            });
        }

        let status = self.status();
        if status.is_terminal() && !self.ended {
            self.ended = true;
            self.events.push(CoreEvent::Ended {
                status,
                score: self.score(),
            });
        }

        Resolution { merges, cleared }
    }

    /// One complete headless tick; returns the status for the next tick check.
    pub fn step(&mut self, action: Option<GameAction>) -> GameStatus {
        if !self.status().is_terminal() {
            self.tick(action);
            self.resolve();
        }
        self.status()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.height = self.grid.height();
        out.width = self.grid.width();
        out.cells.clear();
        out.cells.extend_from_slice(self.grid.cells());
        out.active = Some(ActiveSnapshot::from(&self.current));
        out.next = Some(NextSnapshot {
            kind: self.next.kind(),
            tiles: self.next.min_bounded_matrix(),
        });
        out.score = self.grid.score();
        out.victory_score = self.config.victory_score;
        out.status = self.status();
        out.tick = self.ticks;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
