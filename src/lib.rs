//! Tetris 2048 (workspace facade crate).
//!
//! Re-exports the member crates as `tetris_2048::{core,input,term,types}` and
//! hosts the application layer: CLI configuration, the session driver, the
//! high-score file and the optional event log.

pub use tetris_2048_core as core;
pub use tetris_2048_input as input;
pub use tetris_2048_term as term;
pub use tetris_2048_types as types;

pub mod config;
pub mod driver;
pub mod event_log;
pub mod high_scores;
