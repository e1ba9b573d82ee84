use crate::config::{CONFIG_FILE_NAME, FootprintConfig, FootprintSettings};
use crate::error::FootprintError;
use crate::validation;
use anyhow::Result;
use colored::Colorize;

use super::CommandContext;

pub fn handle_init(ctx: &CommandContext, days: u32, precision: usize) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let config_path = cwd.join(CONFIG_FILE_NAME);

    if config_path.exists() {
        return Err(FootprintError::AlreadyInitialized(config_path.display().to_string()).into());
    }

    validation::validate_days(i64::from(days))?;

    let config = FootprintConfig {
        footprint: FootprintSettings {
            default_days: days,
            precision,
        },
        output: Default::default(),
    };

    config.save(&config_path)?;

    println!("{} footprint config in {}", "Initialized".green(), cwd.display());
    println!("  Config: {}", config_path.display());
    // A config found further up the tree no longer applies below cwd
    if let Some(outer) = &ctx.config_path {
        println!("  Overrides: {}", outer.display());
    }

    Ok(())
}
