//! Global leaderboard ranking
//!
//! Entries are ordered by best score, then best points, both descending. Equal
//! keys keep their previous relative order. Only the top
//! [`LEADERBOARD_CAPACITY`] entries are kept; anything below is dropped.

use std::cmp::Ordering;

use super::models::{GameResult, LeaderboardEntry};

pub const LEADERBOARD_CAPACITY: usize = 50;

/// Fold one result into the leaderboard and return the re-ranked list
pub fn apply_result(mut entries: Vec<LeaderboardEntry>, result: &GameResult) -> Vec<LeaderboardEntry> {
    match entries.iter_mut().find(|e| e.player_name == result.player_name) {
        Some(entry) => {
            if improves(result, entry) {
                entry.best_score = result.score;
                entry.best_points = result.points;
                entry.date = result.date;
            }
            entry.total_games_played += 1;
            entry.level = result.level;
        }
        None => entries.push(LeaderboardEntry {
            player_name: result.player_name.clone(),
            best_score: result.score,
            best_points: result.points,
            total_games_played: 1,
            level: result.level,
            date: result.date,
        }),
    }

    sort_entries(&mut entries);
    entries.truncate(LEADERBOARD_CAPACITY);
    entries
}

/// Whether a result beats an entry on (score, points)
fn improves(result: &GameResult, entry: &LeaderboardEntry) -> bool {
    (result.score, result.points) > (entry.best_score, entry.best_points)
}

fn compare(a: &LeaderboardEntry, b: &LeaderboardEntry) -> Ordering {
    b.best_score
        .cmp(&a.best_score)
        .then_with(|| b.best_points.cmp(&a.best_points))
}

/// Stable sort into leaderboard order
pub fn sort_entries(entries: &mut [LeaderboardEntry]) {
    entries.sort_by(compare);
}

/// Entries paired with their 1-based rank
pub fn ranked(entries: &[LeaderboardEntry]) -> impl Iterator<Item = (usize, &LeaderboardEntry)> {
    entries.iter().enumerate().map(|(i, e)| (i + 1, e))
}

/// 1-based rank of a player, if they are on the board
pub fn rank_of(entries: &[LeaderboardEntry], player_name: &str) -> Option<usize> {
    entries
        .iter()
        .position(|e| e.player_name == player_name)
        .map(|i| i + 1)
}
