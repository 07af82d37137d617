//! Shared test utilities for progress store tests

#![allow(dead_code)]

use std::path::PathBuf;

use skyquiz::progress::{GameResult, ProgressStore};
use skyquiz::quiz::Level;
use tempfile::TempDir;

/// Creates a SQLite-backed progress store in a fresh temp directory.
///
/// Keep the `TempDir` alive for as long as the store is used.
pub fn create_test_store() -> (TempDir, PathBuf, ProgressStore) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("progress.db");
    let store = ProgressStore::open(&db_path).expect("Failed to open progress store");
    (temp_dir, db_path, store)
}

/// A finished eight-question round at `level`
pub fn round(player: &str, level: Level, score: u32) -> GameResult {
    let per_question = match level {
        Level::Mixed => 10,
        tier => tier.points(),
    };
    GameResult::new(
        player,
        level,
        score,
        score * per_question,
        8,
        8 * per_question,
        60,
    )
}
