//! Reset command implementation

use std::io::{self, BufRead, Write};

use anyhow::Result;

use skyquiz::progress::ProgressStore;

/// Erase all progress data, asking first unless `yes` is set
pub fn reset_command(progress: &ProgressStore, yes: bool) -> Result<()> {
    if !yes {
        print!("This deletes every result, stat and leaderboard entry. Type 'yes' to confirm: ");
        io::stdout().flush()?;

        let mut answer = String::new();
        io::stdin().lock().read_line(&mut answer)?;
        if answer.trim() != "yes" {
            println!("Aborted.");
            return Ok(());
        }
    }

    progress.clear_all();
    println!("All progress data cleared.");
    Ok(())
}
