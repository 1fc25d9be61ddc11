//! High-score file tests

use std::fs;
use std::path::PathBuf;

use tetris_2048::high_scores::HighScores;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("tetris-2048-{}-{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    dir
}

#[test]
fn missing_file_loads_as_empty_table() {
    let dir = scratch_dir("missing");
    let table = HighScores::load(dir.join("high_scores.txt")).unwrap();
    assert!(table.scores().is_empty());
    assert!(table.top().is_empty());
}

#[test]
fn save_then_load_keeps_order() {
    let dir = scratch_dir("roundtrip");
    let path = dir.join("nested").join("high_scores.txt");

    let mut table = HighScores::load(&path).unwrap();
    for score in [120, 2052, 64, 120] {
        table.insert(score);
    }
    table.save().unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "2052\n120\n120\n64\n");
    let reloaded = HighScores::load(&path).unwrap();
    assert_eq!(reloaded.scores(), &[2052, 120, 120, 64]);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn corrupt_lines_are_dropped_and_order_restored() {
    let dir = scratch_dir("corrupt");
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("high_scores.txt");
    fs::write(&path, "16\nnot a score\n\n512\n  32  \n99999999999\n").unwrap();

    let table = HighScores::load(&path).unwrap();
    assert_eq!(table.scores(), &[512, 32, 16]);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn invalid_utf8_lines_are_dropped() {
    let dir = scratch_dir("binary");
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("high_scores.txt");
    fs::write(&path, b"512\n\xff\xfe garbage\n64\n").unwrap();

    let table = HighScores::load(&path).unwrap();
    assert_eq!(table.scores(), &[512, 64]);

    let _ = fs::remove_dir_all(&dir);
}
