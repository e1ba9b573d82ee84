use crate::error::{FootprintError, Result};
use crate::model::NumberOfDays;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = ".footprint.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FootprintConfig {
    #[serde(default)]
    pub footprint: FootprintSettings,

    #[serde(default)]
    pub output: OutputSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FootprintSettings {
    /// Days used when neither the command line nor the entry sheet gives one.
    #[serde(default = "default_days")]
    pub default_days: u32,

    /// Decimal places in human-readable output.
    #[serde(default = "default_precision")]
    pub precision: usize,
}

fn default_days() -> u32 {
    1
}

fn default_precision() -> usize {
    2
}

impl Default for FootprintSettings {
    fn default() -> Self {
        Self {
            default_days: default_days(),
            precision: default_precision(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputSettings {
    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_color() -> bool {
    true
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            color: default_color(),
        }
    }
}

impl FootprintSettings {
    pub fn days(&self) -> Result<NumberOfDays> {
        NumberOfDays::new(i64::from(self.default_days)).map_err(|e| {
            FootprintError::Config(format!("footprint.default_days: {}", e))
        })
    }
}

impl FootprintConfig {
    /// Loads the nearest config file at or above `start_path`.
    ///
    /// Falls back to defaults when none exists. Returns the file that was read, if any.
    pub fn load(start_path: &Path) -> Result<(Self, Option<PathBuf>)> {
        match Self::find_config_file(start_path) {
            Some(path) => {
                let config = Self::load_from(&path)?;
                Ok((config, Some(path)))
            }
            None => {
                tracing::debug!(start = %start_path.display(), "No config file found, using defaults");
                Ok((Self::default(), None))
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            FootprintError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let config: FootprintConfig = toml::from_str(&content)
            .map_err(|e| FootprintError::Config(format!("{}: {}", path.display(), e)))?;
        config.footprint.days()?;
        tracing::debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path.to_path_buf();
        loop {
            let config_path = current.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return Some(config_path);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
