//! Optional JSON-lines event log.
//!
//! Enabled by `--log-path` / `TETRIS2048_LOG_PATH`. Every record carries a
//! monotonically increasing `seq` and the game tick it happened on. A log that
//! cannot be opened or written is silently disabled; the game keeps running.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::core::CoreEvent;
use crate::types::{GameConfig, GameStatus};

/// One logged event, tagged by `type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LogEvent {
    SessionStart {
        seed: u64,
        height: usize,
        width: usize,
        victory_score: u32,
        speed: &'static str,
    },
    Lock {
        piece: &'static str,
        tiles: usize,
        game_over: bool,
    },
    Merge {
        row: usize,
        col: usize,
        value: u32,
    },
    Clear {
        rows: Vec<usize>,
        score: u32,
    },
    GameEnd {
        status: &'static str,
        score: u32,
    },
    HighScore {
        score: u32,
        rank: usize,
    },
}

impl LogEvent {
    pub fn session_start(config: &GameConfig, seed: u64) -> Self {
        LogEvent::SessionStart {
            seed,
            height: config.height,
            width: config.width,
            victory_score: config.victory_score,
            speed: config.speed.label(),
        }
    }
}

impl From<&CoreEvent> for LogEvent {
    fn from(event: &CoreEvent) -> Self {
        match event {
            CoreEvent::Locked {
                kind,
                tiles,
                game_over,
            } => LogEvent::Lock {
                piece: kind.as_str(),
                tiles: *tiles,
                game_over: *game_over,
            },
            CoreEvent::Merged(merge) => LogEvent::Merge {
                row: merge.row,
                col: merge.col,
                value: merge.value,
            },
            CoreEvent::Cleared { rows, score } => LogEvent::Clear {
                rows: rows.clone(),
                score: *score,
            },
            CoreEvent::Ended { status, score } => LogEvent::GameEnd {
                status: status_name(*status),
                score: *score,
            },
        }
    }
}

fn status_name(status: GameStatus) -> &'static str {
    match status {
        GameStatus::Playing => "playing",
        GameStatus::Paused => "paused",
        GameStatus::GameOver => "game_over",
        GameStatus::Victory => "victory",
    }
}

#[derive(Debug, Serialize)]
struct LogRecord<'a> {
    seq: u64,
    tick: u64,
    #[serde(flatten)]
    event: &'a LogEvent,
}

/// Line-oriented JSON writer.
#[derive(Debug)]
pub struct EventLog<W: Write = BufWriter<File>> {
    out: Option<W>,
    seq: u64,
    buf: Vec<u8>,
}

impl EventLog<BufWriter<File>> {
    /// Append to `path`, or a disabled log when `path` is `None` or cannot be opened.
    pub fn open(path: Option<&Path>) -> Self {
        let out = path.and_then(|p| {
            OpenOptions::new()
                .create(true)
                .append(true)
                .open(p)
                .ok()
                .map(BufWriter::new)
        });
        Self {
            out,
            seq: 0,
            buf: Vec::with_capacity(256),
        }
    }

    pub fn disabled() -> Self {
        Self::open(None)
    }
}

impl<W: Write> EventLog<W> {
    pub fn with_writer(out: W) -> Self {
        Self {
            out: Some(out),
            seq: 0,
            buf: Vec::with_capacity(256),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.out.is_some()
    }

    /// Records written so far.
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn record(&mut self, tick: u64, event: &LogEvent) {
        let Some(out) = self.out.as_mut() else {
            return;
        };

        self.buf.clear();
        let record = LogRecord {
            seq: self.seq,
            tick,
            event,
        };
        if serde_json::to_writer(&mut self.buf, &record).is_err() {
            return;
        }
        self.buf.push(b'\n');
        if out.write_all(&self.buf).is_err() {
            self.out = None;
            return;
        }
        self.seq += 1;
    }

    /// Log a batch of core events drained from the game.
    pub fn record_core(&mut self, tick: u64, events: &[CoreEvent]) {
        for event in events {
            self.record(tick, &LogEvent::from(event));
        }
    }

    pub fn flush(&mut self) {
        if let Some(out) = self.out.as_mut() {
            if out.flush().is_err() {
                self.out = None;
            }
        }
    }

    /// Give back the writer (tests).
    pub fn into_inner(mut self) -> Option<W> {
        self.flush();
        self.out.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MergeEvent;
    use crate::types::PieceKind;

    fn lines(log: EventLog<Vec<u8>>) -> Vec<serde_json::Value> {
        let bytes = log.into_inner().unwrap();
        String::from_utf8(bytes)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[test]
    fn records_are_tagged_and_sequenced() {
        let mut log = EventLog::with_writer(Vec::new());
        log.record(0, &LogEvent::session_start(&GameConfig::default(), 9));
        log.record_core(
            3,
            &[
                CoreEvent::Locked {
                    kind: PieceKind::O,
                    tiles: 4,
                    game_over: false,
                },
                CoreEvent::Merged(MergeEvent {
                    row: 0,
                    col: 1,
                    value: 4,
                }),
            ],
        );
        assert_eq!(log.seq(), 3);

        let records = lines(log);
        assert_eq!(records[0]["type"], "session_start");
        assert_eq!(records[0]["speed"], "Medium");
        assert_eq!(records[0]["seed"], 9);
        assert_eq!(records[1]["type"], "lock");
        assert_eq!(records[1]["piece"], "O");
        assert_eq!(records[1]["tick"], 3);
        assert_eq!(records[2]["type"], "merge");
        assert_eq!(records[2]["value"], 4);
        assert_eq!(records[2]["seq"], 2);
    }

    #[test]
    fn game_end_uses_snake_case_status() {
        let event = LogEvent::from(&CoreEvent::Ended {
            status: GameStatus::GameOver,
            score: 40,
        });
        assert_eq!(
            event,
            LogEvent::GameEnd {
                status: "game_over",
                score: 40
            }
        );
    }

    #[test]
    fn disabled_log_ignores_records() {
        let mut log = EventLog::disabled();
        log.record(1, &LogEvent::HighScore { score: 8, rank: 0 });
        assert!(!log.is_enabled());
        assert_eq!(log.seq(), 0);
    }

    #[test]
    fn unopenable_path_disables_logging() {
        let dir = std::env::temp_dir().join("tetris-2048-missing-dir-for-log");
        let _ = std::fs::remove_dir_all(&dir);
        let path = dir.join("events.jsonl");
        let log = EventLog::open(Some(path.as_path()));
        assert!(!log.is_enabled());
    }
}
