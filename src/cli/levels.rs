//! Levels command implementation

use anyhow::Result;

use skyquiz::quiz::{Level, max_points_by_level, total_questions_by_level};

pub fn levels_command() -> Result<()> {
    println!("Levels:\n");
    for level in Level::TIERS.into_iter().chain([Level::Mixed]) {
        println!(
            "  {}  {:<10} {:>2} questions, {:>3} points max",
            level.number(),
            level.label(),
            total_questions_by_level(level),
            max_points_by_level(level),
        );
    }
    Ok(())
}
