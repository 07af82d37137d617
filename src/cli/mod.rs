//! CLI command implementations

pub mod init;
pub mod leaderboard;
pub mod levels;
pub mod play;
pub mod player;
pub mod reset;
pub mod stats;

use anyhow::{Result, bail};

use skyquiz::progress::{ProgressStore, validate_player_name};

/// Resolve the player for a command: an explicit name or the stored current
/// player. With `remember`, an explicit name becomes the current player and
/// gets a stats record.
pub fn resolve_player(
    progress: &ProgressStore,
    explicit: Option<String>,
    remember: bool,
) -> Result<String> {
    match explicit {
        Some(raw) => {
            let name = validate_player_name(&raw)?;
            if remember {
                progress.set_current_player(&name);
                progress.get_or_create_stats(&name);
            }
            Ok(name)
        }
        None => match progress.current_player() {
            Some(name) => Ok(name),
            None => bail!("No player selected. Run `skyquiz player <NAME>` first or pass --player"),
        },
    }
}
