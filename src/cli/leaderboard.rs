//! Leaderboard command implementation

use anyhow::Result;

use skyquiz::progress::ProgressStore;
use skyquiz::progress::leaderboard::ranked;

pub fn leaderboard_command(progress: &ProgressStore, limit: usize) -> Result<()> {
    let board = progress.leaderboard();
    if board.is_empty() {
        println!("No games played yet! Be the first to set a record!");
        return Ok(());
    }

    let current = progress.current_player();
    println!("Leaderboard ({} players):\n", board.len());
    println!("  {:>4}  {:<20} {:>5} {:>6} {:>5}  {:<10} {}", "#", "Player", "Best", "Points", "Games", "Level", "Date");

    for (rank, entry) in ranked(&board).take(limit) {
        let marker = if current.as_deref() == Some(entry.player_name.as_str()) { "*" } else { " " };
        println!(
            "{} {:>4}  {:<20} {:>5} {:>6} {:>5}  {:<10} {}",
            marker,
            rank,
            entry.player_name,
            entry.best_score,
            entry.best_points,
            entry.total_games_played,
            entry.level.label(),
            entry.date.format("%Y-%m-%d"),
        );
    }
    Ok(())
}
