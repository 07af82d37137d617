//! Achievement vocabulary and unlock rules
//!
//! Achievements are one-way flags: once a player has one it is never revoked.

use serde::{Deserialize, Serialize};

use super::models::{GameResult, PlayerStats};
use crate::quiz::Level;

/// Unique identifier for each achievement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AchievementId {
    #[serde(rename = "first_game")]
    FirstGame,
    #[serde(rename = "perfect_score")]
    PerfectScore,
    #[serde(rename = "expert_pilot")]
    ExpertPilot,
    #[serde(rename = "level1_master")]
    Level1Master,
    #[serde(rename = "level2_master")]
    Level2Master,
    #[serde(rename = "level3_master")]
    Level3Master,
    #[serde(rename = "dedicated_pilot")]
    DedicatedPilot,
    #[serde(rename = "aviation_enthusiast")]
    AviationEnthusiast,
}

impl AchievementId {
    /// Get the string ID used in stored documents
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FirstGame => "first_game",
            Self::PerfectScore => "perfect_score",
            Self::ExpertPilot => "expert_pilot",
            Self::Level1Master => "level1_master",
            Self::Level2Master => "level2_master",
            Self::Level3Master => "level3_master",
            Self::DedicatedPilot => "dedicated_pilot",
            Self::AviationEnthusiast => "aviation_enthusiast",
        }
    }

    /// Parse a stored string ID
    pub fn from_id(s: &str) -> Option<Self> {
        Self::all().iter().copied().find(|id| id.as_str() == s)
    }

    /// Get all achievement IDs
    pub fn all() -> &'static [AchievementId] {
        &[
            Self::FirstGame,
            Self::PerfectScore,
            Self::ExpertPilot,
            Self::Level1Master,
            Self::Level2Master,
            Self::Level3Master,
            Self::DedicatedPilot,
            Self::AviationEnthusiast,
        ]
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::FirstGame => "First Flight",
            Self::PerfectScore => "Perfect Landing",
            Self::ExpertPilot => "Expert Pilot",
            Self::Level1Master => "Level 1 Master",
            Self::Level2Master => "Level 2 Master",
            Self::Level3Master => "Level 3 Master",
            Self::DedicatedPilot => "Dedicated Pilot",
            Self::AviationEnthusiast => "Aviation Enthusiast",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::FirstGame => "Completed your first quiz!",
            Self::PerfectScore => "Got 100% on a quiz!",
            Self::ExpertPilot => "Scored 90% or higher!",
            Self::Level1Master => "Mastered the easy level!",
            Self::Level2Master => "Mastered the medium level!",
            Self::Level3Master => "Mastered the hard level!",
            Self::DedicatedPilot => "Played 10+ games!",
            Self::AviationEnthusiast => "Played 50+ games!",
        }
    }

    /// Mastery achievement for a playable tier
    fn master_of(level: Level) -> Option<Self> {
        match level {
            Level::Easy => Some(Self::Level1Master),
            Level::Medium => Some(Self::Level2Master),
            Level::Hard => Some(Self::Level3Master),
            Level::Mixed => None,
        }
    }
}

impl std::fmt::Display for AchievementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Unlocked set after `result`, given stats whose counters already include it.
///
/// Every rule is checked independently; ids already in `stats.achievements`
/// keep their position and new ones are appended.
pub fn achievements_for(stats: &PlayerStats, result: &GameResult) -> Vec<AchievementId> {
    let mut unlocked = stats.achievements.clone();
    let games = stats.total_games_played;

    let mut candidates = Vec::new();
    if games == 1 {
        candidates.push(AchievementId::FirstGame);
    }
    if result.percentage == 100 {
        candidates.push(AchievementId::PerfectScore);
    }
    if result.percentage >= 90 {
        candidates.push(AchievementId::ExpertPilot);
    }
    if result.percentage >= 80 {
        candidates.extend(AchievementId::master_of(result.level));
    }
    if games >= 10 {
        candidates.push(AchievementId::DedicatedPilot);
    }
    if games >= 50 {
        candidates.push(AchievementId::AviationEnthusiast);
    }

    for id in candidates {
        if !unlocked.contains(&id) {
            unlocked.push(id);
        }
    }
    unlocked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(level: Level, score: u32, total: u32) -> GameResult {
        GameResult::new("Ana", level, score, score * level.points(), total, total * level.points(), 30)
    }

    fn stats_after(games: u32, unlocked: &[AchievementId]) -> PlayerStats {
        let mut stats = PlayerStats::new("Ana");
        stats.total_games_played = games;
        stats.achievements = unlocked.to_vec();
        stats
    }

    #[test]
    fn test_perfect_first_game_on_easy() {
        let ids = achievements_for(&stats_after(1, &[]), &result(Level::Easy, 8, 8));
        assert_eq!(
            ids,
            vec![
                AchievementId::FirstGame,
                AchievementId::PerfectScore,
                AchievementId::ExpertPilot,
                AchievementId::Level1Master,
            ]
        );
    }

    #[test]
    fn test_mixed_round_never_grants_mastery() {
        let ids = achievements_for(&stats_after(2, &[]), &result(Level::Mixed, 22, 24));
        assert_eq!(ids, vec![AchievementId::ExpertPilot]);
    }

    #[test]
    fn test_mastery_threshold_is_80_percent() {
        let hard = achievements_for(&stats_after(3, &[]), &result(Level::Hard, 7, 8));
        assert_eq!(hard, vec![AchievementId::Level3Master]);

        let short = achievements_for(&stats_after(3, &[]), &result(Level::Medium, 6, 8));
        assert!(short.is_empty());
    }

    #[test]
    fn test_game_count_milestones() {
        let ten = achievements_for(&stats_after(10, &[]), &result(Level::Easy, 0, 8));
        assert_eq!(ten, vec![AchievementId::DedicatedPilot]);

        let fifty = achievements_for(
            &stats_after(50, &[AchievementId::DedicatedPilot]),
            &result(Level::Easy, 0, 8),
        );
        assert_eq!(
            fifty,
            vec![AchievementId::DedicatedPilot, AchievementId::AviationEnthusiast]
        );
    }

    #[test]
    fn test_existing_achievements_are_kept() {
        let owned = [AchievementId::PerfectScore, AchievementId::FirstGame];
        for score in 0..=8 {
            let ids = achievements_for(&stats_after(4, &owned), &result(Level::Medium, score, 8));
            assert_eq!(&ids[..2], &owned);
            let mut deduped = ids.clone();
            deduped.dedup();
            assert_eq!(deduped.len(), ids.len());
        }
    }

    #[test]
    fn test_ids_serialize_as_stored_strings() {
        assert_eq!(
            serde_json::to_string(&AchievementId::Level2Master).unwrap(),
            "\"level2_master\""
        );
        for id in AchievementId::all() {
            assert_eq!(AchievementId::from_id(id.as_str()), Some(*id));
        }
        assert_eq!(AchievementId::from_id("streak_7"), None);
    }
}
