use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use skyquiz::config::Config;
use skyquiz::progress::ProgressStore;

mod cli;

#[derive(Parser)]
#[command(name = "skyquiz")]
#[command(about = "Aircraft trivia quiz with local stats, achievements and a leaderboard")]
#[command(version)]
struct Cli {
    /// Path to the config file (defaults to ~/.skyquiz/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a round of the quiz
    Play {
        /// Player name (defaults to the current player)
        #[arg(short, long)]
        player: Option<String>,

        /// Level: 1 = easy, 2 = medium, 3 = hard, 0 = all levels
        #[arg(short, long)]
        level: Option<u8>,
    },

    /// Select (or create) the current player
    Player {
        /// Name, 2-20 characters
        name: String,
    },

    /// List recent players
    Players,

    /// Show personal statistics and achievements
    Stats {
        #[arg(short, long)]
        player: Option<String>,
    },

    /// Show a player's past games
    History {
        #[arg(short, long)]
        player: Option<String>,
    },

    /// Show the leaderboard
    Leaderboard {
        /// Number of rows to show (defaults to the configured limit)
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Show question counts and points per level
    Levels,

    /// Delete all results, stats and the leaderboard
    Reset {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// Write a default config file
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { config.logging.level.as_str() };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    if let Commands::Init { force } = cli.command {
        let path = cli.config.unwrap_or_else(Config::global_config_path);
        return cli::init::init_command(&path, force);
    }
    if let Commands::Levels = cli.command {
        return cli::levels::levels_command();
    }

    let progress = ProgressStore::open(&config.database_path())?;

    match cli.command {
        Commands::Play { player, level } => {
            cli::play::play_command(&config, &progress, player, level)?;
        }
        Commands::Player { name } => {
            cli::player::player_command(&progress, &name)?;
        }
        Commands::Players => {
            cli::player::players_command(&progress)?;
        }
        Commands::Stats { player } => {
            let player = cli::resolve_player(&progress, player, false)?;
            cli::stats::stats_command(&progress, &player)?;
        }
        Commands::History { player } => {
            let player = cli::resolve_player(&progress, player, false)?;
            cli::stats::history_command(&progress, &player)?;
        }
        Commands::Leaderboard { limit } => {
            let limit = limit.unwrap_or(config.leaderboard.display_limit);
            cli::leaderboard::leaderboard_command(&progress, limit)?;
        }
        Commands::Reset { yes } => {
            cli::reset::reset_command(&progress, yes)?;
        }
        Commands::Init { .. } | Commands::Levels => {}
    }

    Ok(())
}
