//! Persisted high-score table.
//!
//! Plain text, one integer per line, best first. Unparseable lines are dropped
//! on load and a missing file is an empty table.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::types::HIGH_SCORE_DISPLAY_LIMIT;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighScores {
    path: PathBuf,
    scores: Vec<u32>,
}

impl HighScores {
    /// Empty table that will be saved to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            scores: Vec::new(),
        }
    }

    /// Read the table at `path`.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => Vec::new(),
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("reading high scores from {}", path.display()))
            }
        };

        // Lines that are not valid UTF-8 become replacement text and fail to parse.
        let mut scores = parse_scores(&String::from_utf8_lossy(&bytes));
        // Hand-edited files may be out of order.
        scores.sort_unstable_by(|a, b| b.cmp(a));
        Ok(Self { path, scores })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All scores, best first.
    pub fn scores(&self) -> &[u32] {
        &self.scores
    }

    /// The entries shown in the table.
    pub fn top(&self) -> &[u32] {
        &self.scores[..self.scores.len().min(HIGH_SCORE_DISPLAY_LIMIT)]
    }

    /// Insert `score` keeping descending order; it goes before any equal entry.
    ///
    /// Returns the 0-based rank it landed at.
    pub fn insert(&mut self, score: u32) -> usize {
        let rank = self.scores.partition_point(|&s| s > score);
        self.scores.insert(rank, score);
        rank
    }

    /// Rewrite the file, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        fs::write(&self.path, render_scores(&self.scores))
            .with_context(|| format!("writing high scores to {}", self.path.display()))
    }
}

/// One score per line; blank or malformed lines are skipped.
pub fn parse_scores(text: &str) -> Vec<u32> {
    text.lines()
        .filter_map(|line| line.trim().parse::<u32>().ok())
        .collect()
}

pub fn render_scores(scores: &[u32]) -> String {
    let mut out = String::with_capacity(scores.len() * 6);
    for score in scores {
        out.push_str(&score.to_string());
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_skips_garbage_lines() {
        assert_eq!(parse_scores("120\n\nabc\n 64 \n-3\n8"), vec![120, 64, 8]);
    }

    #[test]
    fn insert_places_new_score_before_equal_ones() {
        let mut table = HighScores::new("unused.txt");
        assert_eq!(table.insert(100), 0);
        assert_eq!(table.insert(50), 1);
        assert_eq!(table.insert(100), 0);
        assert_eq!(table.insert(75), 2);
        assert_eq!(table.insert(10), 4);
        assert_eq!(table.scores(), &[100, 100, 75, 50, 10]);
    }

    #[test]
    fn top_is_capped() {
        let mut table = HighScores::new("unused.txt");
        for score in 0..15 {
            table.insert(score * 2);
        }
        assert_eq!(table.top().len(), HIGH_SCORE_DISPLAY_LIMIT);
        assert_eq!(table.top()[0], 28);
    }

    #[test]
    fn render_is_one_per_line() {
        assert_eq!(render_scores(&[2048, 4]), "2048\n4\n");
        assert_eq!(render_scores(&[]), "");
    }
}
