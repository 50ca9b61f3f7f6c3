//! Logger construction from config values and config files.

use super::{Logger, LoggerBuilder};
use crate::Error;
use crate::config::{Config, LoggerConfig};
use crate::internal;

impl Logger {
    /// Builds a logger from a single `LoggerConfig` with the built-in level colors.
    ///
    /// # Errors
    /// Same as `LoggerBuilder::build`.
    pub fn from_config(config: &LoggerConfig) -> Result<Self, Error> {
        LoggerBuilder::from_config(config).build()
    }

    /// Builds the logger `name` from a loaded config file: `[logger]` defaults,
    /// `[loggers.NAME]` overrides, and the `[colors]` table.
    ///
    /// # Errors
    /// Invalid colors in the config, plus everything `LoggerBuilder::build` can return.
    pub fn from_file_config(config: &Config, name: &str) -> Result<Self, Error> {
        internal::debug("LOGGER", &format!("Building logger {name} from config"));
        let logger_config = config.for_logger(name);
        let styles = config.style_table()?;
        LoggerBuilder::from_config(&logger_config)
            .styles(styles)
            .build()
    }
}
