//! Player selection commands

use anyhow::Result;

use skyquiz::progress::{ProgressStore, validate_player_name};

/// Number of names listed by `skyquiz players`
const RECENT_PLAYERS: usize = 5;

/// Make `raw_name` the current player, creating their stats if new
pub fn player_command(progress: &ProgressStore, raw_name: &str) -> Result<()> {
    let name = validate_player_name(raw_name)?;
    progress.set_current_player(&name);
    let stats = progress.get_or_create_stats(&name);

    if stats.total_games_played == 0 {
        println!("Welcome aboard, {}!", name);
    } else {
        println!(
            "Welcome back, {}! {} games played, best score {}.",
            name, stats.total_games_played, stats.best_score
        );
    }
    Ok(())
}

/// List recent players and mark the current one
pub fn players_command(progress: &ProgressStore) -> Result<()> {
    let current = progress.current_player();
    let players = progress.recent_players(RECENT_PLAYERS);

    if players.is_empty() {
        match current {
            Some(name) => println!("Current player: {} (no games yet)", name),
            None => println!("No players yet."),
        }
        return Ok(());
    }

    println!("Recent players:\n");
    for name in players {
        let marker = if current.as_deref() == Some(name.as_str()) { "*" } else { " " };
        println!("  {} {}", marker, name);
    }
    Ok(())
}
