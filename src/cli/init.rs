//! Init command implementation

use std::path::Path;

use anyhow::{Result, bail};
use tracing::info;

use skyquiz::config::Config;

/// Write a default config file to `path`
pub fn init_command(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            path.display()
        );
    }

    Config::default().save_to_file(path)?;
    info!("Wrote default config to {}", path.display());
    println!("Created {}", path.display());
    Ok(())
}
