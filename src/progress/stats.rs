//! Player statistics recomputation
//!
//! Each result rebuilds the whole record from the previous one: counters,
//! bests, averages, the per-level slice and the achievement set.

use super::achievements::achievements_for;
use super::models::{GameResult, PlayerStats};

/// Fold one finished round into a player's statistics
pub fn apply_result(previous: &PlayerStats, result: &GameResult) -> PlayerStats {
    let mut stats = previous.clone();

    stats.total_games_played += 1;
    stats.total_questions_answered += result.total_questions;
    stats.total_correct_answers += result.score;
    stats.total_points_earned += result.points;
    stats.last_played = result.date;

    stats.best_score = stats.best_score.max(result.score);
    stats.best_points = stats.best_points.max(result.points);

    stats.average_score = if stats.total_questions_answered == 0 {
        0.0
    } else {
        stats.total_correct_answers as f64 / stats.total_questions_answered as f64
    };
    stats.average_points = stats.total_points_earned as f64 / stats.total_games_played as f64;

    let level = stats.level_stats.get_mut(result.level);
    level.games_played += 1;
    level.best_score = level.best_score.max(result.score);
    level.best_points = level.best_points.max(result.points);
    // Incremental mean over raw scores; stored records depend on this exact form.
    let n = level.games_played as f64;
    level.average_score = (level.average_score * (n - 1.0) + result.score as f64) / n;

    stats.achievements = achievements_for(&stats, result);
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::AchievementId;
    use crate::quiz::Level;

    fn easy(score: u32) -> GameResult {
        GameResult::new("Bo", Level::Easy, score, score * 10, 8, 80, 60)
    }

    #[test]
    fn test_first_result_on_fresh_record() {
        let stats = apply_result(&PlayerStats::new("Ana"), &easy(8));

        assert_eq!(stats.total_games_played, 1);
        assert_eq!(stats.total_questions_answered, 8);
        assert_eq!(stats.best_points, 80);
        assert_eq!(stats.average_score, 1.0);
        assert_eq!(stats.level_stats.level1.games_played, 1);
        assert!(stats.has_achievement(AchievementId::FirstGame));
        assert!(stats.has_achievement(AchievementId::Level1Master));
    }

    #[test]
    fn test_overall_and_level_averages() {
        let mut stats = PlayerStats::new("Bo");
        for score in [5, 7, 6] {
            stats = apply_result(&stats, &easy(score));
        }

        assert!((stats.average_score - 0.75).abs() < 1e-9);
        assert!((stats.average_points - 60.0).abs() < 1e-9);
        assert!((stats.level_stats.level1.average_score - 6.0).abs() < 1e-9);
        assert_eq!(stats.level_stats.level1.best_score, 7);
        assert_eq!(stats.level_stats.level2, Default::default());
    }

    #[test]
    fn test_bests_never_decrease() {
        let mut stats = PlayerStats::new("Bo");
        let mut best = (0, 0);
        for score in [6, 2, 8, 0, 7] {
            stats = apply_result(&stats, &easy(score));
            assert!(stats.best_score >= best.0);
            assert!(stats.best_points >= best.1);
            best = (stats.best_score, stats.best_points);
        }
        assert_eq!(best, (8, 80));
    }

    #[test]
    fn test_mixed_round_lands_in_all_levels() {
        let result = GameResult::new("Bo", Level::Mixed, 12, 240, 24, 480, 300);
        let stats = apply_result(&PlayerStats::new("Bo"), &result);

        assert_eq!(stats.level_stats.all_levels.games_played, 1);
        assert_eq!(stats.level_stats.all_levels.average_score, 12.0);
        assert_eq!(stats.level_stats.level1.games_played, 0);
        assert_eq!(stats.last_played, result.date);
    }
}
