//! Persisted progress documents
//!
//! Field names serialize in camelCase so stored JSON keeps the shape written by
//! earlier versions of the game (`playerName`, `levelStats.allLevels`, ...).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::achievements::AchievementId;
use crate::quiz::Level;

/// One completed quiz round. Appended to the results log, never edited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameResult {
    pub id: String,
    pub player_name: String,
    pub level: Level,
    /// Correct answers
    pub score: u32,
    pub points: u32,
    pub total_questions: u32,
    pub max_points: u32,
    /// Rounded share of correct answers, 0-100
    pub percentage: u32,
    pub date: DateTime<Utc>,
    /// Elapsed seconds
    pub time_spent: u64,
}

impl GameResult {
    /// Create a result stamped with a fresh id and the current time
    pub fn new(
        player_name: impl Into<String>,
        level: Level,
        score: u32,
        points: u32,
        total_questions: u32,
        max_points: u32,
        time_spent: u64,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            player_name: player_name.into(),
            level,
            score,
            points,
            total_questions,
            max_points,
            percentage: percentage(score, total_questions),
            date: Utc::now(),
            time_spent,
        }
    }

    /// Closing remark for the completion screen
    pub fn verdict(&self) -> &'static str {
        match self.percentage {
            p if p >= 80 => "Excellent! You're an aviation expert!",
            p if p >= 60 => "Good job! You know your aircraft!",
            p if p >= 40 => "Not bad! Keep learning about aviation!",
            _ => "Keep studying! Aviation is fascinating!",
        }
    }
}

/// Rounded percentage of `score` out of `total`; an empty round scores 0
pub fn percentage(score: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    ((score as f64 / total as f64) * 100.0).round() as u32
}

/// Per-level slice of a player's statistics
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelStats {
    pub games_played: u32,
    pub best_score: u32,
    pub best_points: u32,
    /// Running mean of raw correct-answer counts (not a percentage)
    pub average_score: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelBreakdown {
    pub level1: LevelStats,
    pub level2: LevelStats,
    pub level3: LevelStats,
    pub all_levels: LevelStats,
}

impl LevelBreakdown {
    pub fn get(&self, level: Level) -> &LevelStats {
        match level {
            Level::Easy => &self.level1,
            Level::Medium => &self.level2,
            Level::Hard => &self.level3,
            Level::Mixed => &self.all_levels,
        }
    }

    pub fn get_mut(&mut self, level: Level) -> &mut LevelStats {
        match level {
            Level::Easy => &mut self.level1,
            Level::Medium => &mut self.level2,
            Level::Hard => &mut self.level3,
            Level::Mixed => &mut self.all_levels,
        }
    }
}

/// Cumulative statistics for one player, keyed by name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStats {
    pub player_name: String,
    pub total_games_played: u32,
    pub total_questions_answered: u32,
    pub total_correct_answers: u32,
    pub total_points_earned: u32,
    pub best_score: u32,
    pub best_points: u32,
    /// Correct answers over questions answered, 0.0-1.0
    pub average_score: f64,
    /// Points per game
    pub average_points: f64,
    pub level_stats: LevelBreakdown,
    /// Unlocked achievements in unlock order
    pub achievements: Vec<AchievementId>,
    pub last_played: DateTime<Utc>,
}

impl PlayerStats {
    /// A zeroed record for a player who has not finished a round yet
    pub fn new(player_name: impl Into<String>) -> Self {
        Self {
            player_name: player_name.into(),
            total_games_played: 0,
            total_questions_answered: 0,
            total_correct_answers: 0,
            total_points_earned: 0,
            best_score: 0,
            best_points: 0,
            average_score: 0.0,
            average_points: 0.0,
            level_stats: LevelBreakdown::default(),
            achievements: Vec::new(),
            last_played: Utc::now(),
        }
    }

    /// Overall accuracy as a whole percentage, for display
    pub fn accuracy_percent(&self) -> u32 {
        (self.average_score * 100.0).round() as u32
    }

    pub fn has_achievement(&self, id: AchievementId) -> bool {
        self.achievements.contains(&id)
    }
}

/// A player's best-ever round on the global leaderboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub player_name: String,
    pub best_score: u32,
    pub best_points: u32,
    pub total_games_played: u32,
    /// Level of the most recent round
    pub level: Level,
    /// When the best round was set
    pub date: DateTime<Utc>,
}

/// What `record_result` hands back to the caller
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordOutcome {
    /// Updated statistics, `None` if they could not be computed or stored
    pub stats: Option<PlayerStats>,
    /// Leaderboard after the update (empty on failure)
    pub leaderboard: Vec<LeaderboardEntry>,
    /// Achievements first unlocked by this result
    pub new_achievements: Vec<AchievementId>,
}
