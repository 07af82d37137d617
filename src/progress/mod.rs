//! Player progress tracking
//!
//! Persists finished rounds and keeps three aggregates up to date:
//!
//! ```text
//!  GameResult ──► game_results          (append-only log)
//!             ├─► player_stats_{name}   (recomputed per player)
//!             └─► leaderboard           (top 50, sorted)
//! ```
//!
//! All three documents are written in one atomic batch. Storage failures are
//! logged and never reach the caller: reads fall back to empty values and
//! failed writes are dropped.
//!
//! # Usage
//!
//! ```ignore
//! let progress = ProgressStore::open(&config.database_path())?;
//!
//! let outcome = progress.record_result(&result);
//! for id in &outcome.new_achievements {
//!     println!("Unlocked: {}", id.title());
//! }
//! ```

pub mod achievements;
pub mod leaderboard;
mod models;
pub mod player;
pub mod stats;

pub use achievements::{AchievementId, achievements_for};
pub use leaderboard::LEADERBOARD_CAPACITY;
pub use models::{
    GameResult, LeaderboardEntry, LevelBreakdown, LevelStats, PlayerStats, RecordOutcome,
    percentage,
};
pub use player::{PlayerNameError, validate_player_name};

use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};

use anyhow::{Context, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, error, info, warn};

use crate::quiz::ResultRecorder;
use crate::storage::{KeyValueStore, MemoryStore, SqliteStore};

pub const GAME_RESULTS_KEY: &str = "game_results";
pub const LEADERBOARD_KEY: &str = "leaderboard";
pub const CURRENT_PLAYER_KEY: &str = "current_player";
const PLAYER_STATS_PREFIX: &str = "player_stats_";

/// Storage key of a player's statistics document
pub fn player_stats_key(player_name: &str) -> String {
    format!("{PLAYER_STATS_PREFIX}{player_name}")
}

/// The player progress service.
///
/// Cheap to clone; clones share the same backend.
#[derive(Clone)]
pub struct ProgressStore {
    store: Arc<dyn KeyValueStore>,
    /// Serializes read-modify-write cycles within this process
    write_lock: Arc<Mutex<()>>,
}

impl ProgressStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Open (or create) a SQLite-backed store
    pub fn open(path: &Path) -> Result<Self> {
        let store = SqliteStore::open(path)
            .with_context(|| format!("Failed to open progress db: {}", path.display()))?;
        Ok(Self::new(Arc::new(store)))
    }

    /// A store that lives only as long as this process
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    fn lock_writes(&self) -> MutexGuard<'_, ()> {
        // The guarded value is `()`, so a poisoned lock carries no broken state.
        self.write_lock.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn read_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let Some(raw) = self.store.get(key)? else {
            return Ok(None);
        };
        let value = serde_json::from_str(&raw)
            .with_context(|| format!("Corrupt document under key '{key}'"))?;
        Ok(Some(value))
    }

    fn to_entry<T: Serialize>(key: impl Into<String>, value: &T) -> Result<(String, String)> {
        Ok((key.into(), serde_json::to_string(value)?))
    }

    // ========================================
    // RECORDING
    // ========================================

    /// Append a result and update the player's stats and the leaderboard.
    ///
    /// Nothing is written if any step fails; the failure is logged and an
    /// empty outcome is returned.
    pub fn record_result(&self, result: &GameResult) -> RecordOutcome {
        match self.try_record_result(result) {
            Ok(outcome) => outcome,
            Err(e) => {
                error!(player = %result.player_name, "Failed to save game result: {:#}", e);
                RecordOutcome::default()
            }
        }
    }

    fn try_record_result(&self, result: &GameResult) -> Result<RecordOutcome> {
        let _guard = self.lock_writes();
        let stats_key = player_stats_key(&result.player_name);

        let mut results: Vec<GameResult> = self.read_json(GAME_RESULTS_KEY)?.unwrap_or_default();
        let previous = self
            .read_json::<PlayerStats>(&stats_key)?
            .unwrap_or_else(|| PlayerStats::new(result.player_name.clone()));
        let board: Vec<LeaderboardEntry> = self.read_json(LEADERBOARD_KEY)?.unwrap_or_default();

        results.push(result.clone());
        let stats = stats::apply_result(&previous, result);
        let board = leaderboard::apply_result(board, result);
        let new_achievements: Vec<AchievementId> = stats
            .achievements
            .iter()
            .filter(|id| !previous.has_achievement(**id))
            .copied()
            .collect();

        self.store.multi_set(&[
            Self::to_entry(GAME_RESULTS_KEY, &results)?,
            Self::to_entry(stats_key, &stats)?,
            Self::to_entry(LEADERBOARD_KEY, &board)?,
        ])?;

        info!(
            player = %result.player_name,
            tier = result.level.number(),
            score = result.score,
            points = result.points,
            "Recorded game result"
        );
        if !new_achievements.is_empty() {
            debug!(player = %result.player_name, ?new_achievements, "Unlocked achievements");
        }

        Ok(RecordOutcome {
            stats: Some(stats),
            leaderboard: board,
            new_achievements,
        })
    }

    // ========================================
    // RESULTS LOG
    // ========================================

    /// Every recorded result, oldest first
    pub fn game_results(&self) -> Vec<GameResult> {
        self.read_json(GAME_RESULTS_KEY)
            .unwrap_or_else(|e| {
                warn!("Failed to read game results: {:#}", e);
                None
            })
            .unwrap_or_default()
    }

    pub fn player_game_results(&self, player_name: &str) -> Vec<GameResult> {
        self.game_results()
            .into_iter()
            .filter(|r| r.player_name == player_name)
            .collect()
    }

    /// Distinct player names from the results log, in first-played order
    pub fn recent_players(&self, limit: usize) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for result in self.game_results() {
            if names.len() == limit {
                break;
            }
            if !names.contains(&result.player_name) {
                names.push(result.player_name);
            }
        }
        names
    }

    // ========================================
    // PLAYER STATS
    // ========================================

    /// Stored statistics for a player, without creating a record
    pub fn player_stats(&self, player_name: &str) -> Option<PlayerStats> {
        self.read_json(&player_stats_key(player_name))
            .unwrap_or_else(|e| {
                warn!(player = %player_name, "Failed to read player stats: {:#}", e);
                None
            })
    }

    /// Stored statistics, or a freshly zeroed record that is saved for next time
    pub fn get_or_create_stats(&self, player_name: &str) -> PlayerStats {
        let _guard = self.lock_writes();
        if let Some(stats) = self.player_stats(player_name) {
            return stats;
        }

        let stats = PlayerStats::new(player_name);
        let saved = Self::to_entry(player_stats_key(player_name), &stats)
            .and_then(|entry| Ok(self.store.multi_set(&[entry])?));
        if let Err(e) = saved {
            error!(player = %player_name, "Failed to save new player stats: {:#}", e);
        }
        stats
    }

    // ========================================
    // LEADERBOARD
    // ========================================

    /// The stored top list, already sorted
    pub fn leaderboard(&self) -> Vec<LeaderboardEntry> {
        self.read_json(LEADERBOARD_KEY)
            .unwrap_or_else(|e| {
                warn!("Failed to read leaderboard: {:#}", e);
                None
            })
            .unwrap_or_default()
    }

    // ========================================
    // CURRENT PLAYER
    // ========================================

    pub fn set_current_player(&self, player_name: &str) {
        if let Err(e) = self.store.set(CURRENT_PLAYER_KEY, player_name) {
            error!(player = %player_name, "Failed to set current player: {}", e);
        }
    }

    pub fn current_player(&self) -> Option<String> {
        self.store.get(CURRENT_PLAYER_KEY).unwrap_or_else(|e| {
            warn!("Failed to read current player: {}", e);
            None
        })
    }

    // ========================================
    // RESET
    // ========================================

    /// Erase the results log, leaderboard, current player and every player's stats
    pub fn clear_all(&self) {
        let _guard = self.lock_writes();
        let mut keys = vec![
            GAME_RESULTS_KEY.to_string(),
            LEADERBOARD_KEY.to_string(),
            CURRENT_PLAYER_KEY.to_string(),
        ];
        match self.store.keys() {
            Ok(all) => keys.extend(all.into_iter().filter(|k| k.starts_with(PLAYER_STATS_PREFIX))),
            Err(e) => warn!("Failed to list player stats keys: {}", e),
        }

        match self.store.multi_remove(&keys) {
            Ok(()) => info!(removed = keys.len(), "Cleared all progress data"),
            Err(e) => error!("Failed to clear progress data: {}", e),
        }
    }
}

impl ResultRecorder for ProgressStore {
    fn record_result(&self, result: &GameResult) -> RecordOutcome {
        ProgressStore::record_result(self, result)
    }
}
