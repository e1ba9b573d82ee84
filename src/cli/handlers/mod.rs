mod calc;
mod categories;
mod factor;
mod init;
mod interactive;
mod report;
mod types;
mod utils;

pub use calc::handle_calc;
pub use categories::handle_categories;
pub use factor::handle_factor;
pub use init::handle_init;
pub use interactive::{handle_interactive, run_session};
pub use report::handle_report;
pub use types::handle_types;

use crate::config::FootprintConfig;
use crate::model::NumberOfDays;
use std::path::PathBuf;

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: FootprintConfig,
    /// Config file that was loaded, if any
    pub config_path: Option<PathBuf>,
}

impl CommandContext {
    pub fn new(config: FootprintConfig, config_path: Option<PathBuf>) -> Self {
        Self {
            config,
            config_path,
        }
    }

    pub fn precision(&self) -> usize {
        self.config.footprint.precision
    }

    pub fn default_days(&self) -> crate::error::Result<NumberOfDays> {
        self.config.footprint.days()
    }
}
