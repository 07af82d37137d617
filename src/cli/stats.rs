//! Personal statistics and history commands

use anyhow::Result;

use skyquiz::progress::{AchievementId, ProgressStore};
use skyquiz::progress::leaderboard::rank_of;
use skyquiz::quiz::Level;

pub fn stats_command(progress: &ProgressStore, player: &str) -> Result<()> {
    let Some(stats) = progress.player_stats(player) else {
        println!("No statistics for {} yet. Play a round first!", player);
        return Ok(());
    };

    println!("Statistics for {}\n", stats.player_name);
    println!("  Games played:      {}", stats.total_games_played);
    println!("  Questions:         {}", stats.total_questions_answered);
    println!("  Correct answers:   {}", stats.total_correct_answers);
    println!("  Accuracy:          {}%", stats.accuracy_percent());
    println!("  Points earned:     {}", stats.total_points_earned);
    println!("  Average points:    {:.1}", stats.average_points);
    println!("  Best score:        {}", stats.best_score);
    println!("  Best points:       {}", stats.best_points);
    println!("  Last played:       {}", stats.last_played.format("%Y-%m-%d %H:%M"));
    if let Some(rank) = rank_of(&progress.leaderboard(), &stats.player_name) {
        println!("  Leaderboard rank:  #{}", rank);
    }

    println!("\nBy level:\n");
    for level in Level::TIERS.into_iter().chain([Level::Mixed]) {
        let slice = stats.level_stats.get(level);
        if slice.games_played == 0 {
            println!("  {:<10} not played", level.label());
            continue;
        }
        println!(
            "  {:<10} {} games, best {} ({} pts), avg {:.1} correct",
            level.label(),
            slice.games_played,
            slice.best_score,
            slice.best_points,
            slice.average_score,
        );
    }

    println!(
        "\nAchievements ({}/{}):\n",
        stats.achievements.len(),
        AchievementId::all().len()
    );
    for id in AchievementId::all() {
        let mark = if stats.has_achievement(*id) { "x" } else { " " };
        println!("  [{}] {} - {}", mark, id.title(), id.description());
    }
    Ok(())
}

pub fn history_command(progress: &ProgressStore, player: &str) -> Result<()> {
    let results = progress.player_game_results(player);
    if results.is_empty() {
        println!("No games recorded for {}.", player);
        return Ok(());
    }

    println!("Games played by {} ({}):\n", player, results.len());
    for result in results.iter().rev() {
        println!(
            "  {}  {:<10} {}/{} ({}%)  {}/{} pts  {}s",
            result.date.format("%Y-%m-%d %H:%M"),
            result.level.label(),
            result.score,
            result.total_questions,
            result.percentage,
            result.points,
            result.max_points,
            result.time_spent,
        );
    }
    Ok(())
}
