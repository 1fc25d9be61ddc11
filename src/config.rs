//! Command line and environment configuration.

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Parser, ValueEnum};

use crate::types::{GameConfig, Speed, GRID_HEIGHT, GRID_WIDTH, MIN_GRID_DIM, VICTORY_SCORE};

/// Largest accepted grid dimension; keeps the rendered grid inside `u16` terminal space.
pub const MAX_GRID_DIM: usize = 100;

pub const DEFAULT_SCORES_FILE: &str = "high_scores.txt";

/// Fall speed as spelled on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SpeedArg {
    Slow,
    Medium,
    Fast,
}

impl From<SpeedArg> for Speed {
    fn from(value: SpeedArg) -> Self {
        match value {
            SpeedArg::Slow => Speed::Slow,
            SpeedArg::Medium => Speed::Medium,
            SpeedArg::Fast => Speed::Fast,
        }
    }
}

/// Tetris where stacked tiles merge 2048-style.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "tetris-2048",
    version,
    about = "Falling tetrominoes of numbered tiles that merge and double when stacked.",
    long_about = "Falling tetrominoes of numbered tiles; equal tiles stacked vertically merge and \
        double, full rows clear for the sum of their values. Score more than the victory \
        threshold to win.\n\n\
        CONTROLS:\n  Left/Right a/d  Move    Down s   Soft drop   Up w Space  Rotate\n  \
        h/n             Hard drop   p    Pause      q / Esc     Quit"
)]
pub struct Cli {
    /// Grid height in rows.
    #[arg(long, env = "TETRIS2048_HEIGHT", default_value_t = GRID_HEIGHT, value_name = "ROWS")]
    pub height: usize,

    /// Grid width in columns.
    #[arg(long, env = "TETRIS2048_WIDTH", default_value_t = GRID_WIDTH, value_name = "COLS")]
    pub width: usize,

    /// The game is won once the score exceeds this value.
    #[arg(
        long,
        env = "TETRIS2048_VICTORY_SCORE",
        default_value_t = VICTORY_SCORE,
        value_name = "N"
    )]
    pub victory_score: u32,

    /// Fall speed (slow 400ms, medium 250ms, fast 50ms per tick).
    #[arg(long, env = "TETRIS2048_SPEED", value_enum, default_value = "medium")]
    pub speed: SpeedArg,

    /// Seed for the piece generator; random when omitted.
    #[arg(long, env = "TETRIS2048_SEED")]
    pub seed: Option<u64>,

    /// High-score file (one score per line, best first).
    #[arg(
        long,
        env = "TETRIS2048_SCORES_FILE",
        default_value = DEFAULT_SCORES_FILE,
        value_name = "FILE"
    )]
    pub scores_file: PathBuf,

    /// Append JSON-lines game events to this file.
    #[arg(long, env = "TETRIS2048_LOG_PATH", value_name = "FILE")]
    pub log_path: Option<PathBuf>,

    /// Start playing immediately instead of showing the start menu.
    #[arg(long, env = "TETRIS2048_SKIP_MENU")]
    pub skip_menu: bool,
}

impl Cli {
    /// Validated rules for a new game.
    pub fn game_config(&self) -> Result<GameConfig> {
        for (name, value) in [("height", self.height), ("width", self.width)] {
            if value < MIN_GRID_DIM {
                bail!("grid {name} must be at least {MIN_GRID_DIM}, got {value}");
            }
            if value > MAX_GRID_DIM {
                bail!("grid {name} must be at most {MAX_GRID_DIM}, got {value}");
            }
        }

        Ok(GameConfig {
            height: self.height,
            width: self.width,
            victory_score: self.victory_score,
            speed: self.speed.into(),
        })
    }

    /// Event log destination; blank values disable logging.
    pub fn log_path(&self) -> Option<PathBuf> {
        self.log_path
            .as_ref()
            .filter(|p| !p.as_os_str().is_empty())
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["tetris-2048"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn defaults_match_game_rules() {
        let cli = parse(&["--scores-file", "scores.txt"]);
        let config = cli.game_config().unwrap();
        assert_eq!(config, GameConfig::default());
        assert!(!cli.skip_menu);
    }

    #[test]
    fn flags_override_rules() {
        let cli = parse(&[
            "--height",
            "8",
            "--width",
            "6",
            "--victory-score",
            "64",
            "--speed",
            "fast",
            "--seed",
            "42",
        ]);
        let config = cli.game_config().unwrap();
        assert_eq!((config.height, config.width), (8, 6));
        assert_eq!(config.victory_score, 64);
        assert_eq!(config.speed, Speed::Fast);
        assert_eq!(cli.seed, Some(42));
    }

    #[test]
    fn tiny_grid_is_rejected() {
        let err = parse(&["--width", "3"]).game_config().unwrap_err();
        assert!(err.to_string().contains("width"));
    }

    #[test]
    fn unknown_speed_is_a_parse_error() {
        assert!(Cli::try_parse_from(["tetris-2048", "--speed", "ludicrous"]).is_err());
    }

    #[test]
    fn blank_log_path_disables_logging() {
        let mut cli = parse(&["--log-path", "events.jsonl"]);
        assert_eq!(cli.log_path(), Some(PathBuf::from("events.jsonl")));

        cli.log_path = Some(PathBuf::new());
        assert_eq!(cli.log_path(), None);
    }
}
