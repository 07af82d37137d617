//! Configuration loading and management
//!
//! Read from `~/.skyquiz/config.toml`. Every field has a default, so a missing
//! file or a missing section behaves like an empty file.

mod io;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::quiz::Level;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageSettings,

    #[serde(default)]
    pub quiz: QuizSettings,

    #[serde(default)]
    pub leaderboard: LeaderboardSettings,

    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorageSettings {
    /// Progress database location (defaults to ~/.skyquiz/progress.db)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizSettings {
    /// Level played when none is given on the command line (0 = mixed)
    #[serde(default = "default_level")]
    pub default_level: Level,

    /// Reveal the correct option after each answer
    #[serde(default = "default_show_explanations")]
    pub show_explanations: bool,
}

fn default_level() -> Level {
    Level::Easy
}

fn default_show_explanations() -> bool {
    true
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            default_level: default_level(),
            show_explanations: default_show_explanations(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardSettings {
    /// Rows shown by `skyquiz leaderboard`
    #[serde(default = "default_display_limit")]
    pub display_limit: usize,
}

fn default_display_limit() -> usize {
    10
}

impl Default for LeaderboardSettings {
    fn default() -> Self {
        Self {
            display_limit: default_display_limit(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Filter used when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Load an explicit config file, or the global one if it exists, or defaults
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        let global_path = Self::global_config_path();
        if global_path.exists() {
            Self::from_file(&global_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Where the progress database lives
    pub fn database_path(&self) -> PathBuf {
        self.storage
            .path
            .clone()
            .unwrap_or_else(|| Self::global_config_dir().join("progress.db"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_yields_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.quiz.default_level, Level::Easy);
        assert_eq!(config.leaderboard.display_limit, 10);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_partial_sections() {
        let config: Config = toml::from_str(
            r#"
[storage]
path = "/tmp/quiz/progress.db"

[quiz]
default_level = 0
"#,
        )
        .unwrap();

        assert_eq!(config.database_path(), PathBuf::from("/tmp/quiz/progress.db"));
        assert_eq!(config.quiz.default_level, Level::Mixed);
        assert!(config.quiz.show_explanations);
    }

    #[test]
    fn test_unknown_level_is_rejected() {
        let parsed: Result<Config, _> = toml::from_str("[quiz]\ndefault_level = 9\n");
        assert!(parsed.is_err());
    }

    #[test]
    fn test_default_database_under_global_dir() {
        let config = Config::default();
        assert!(config.database_path().ends_with(".skyquiz/progress.db"));
    }
}
