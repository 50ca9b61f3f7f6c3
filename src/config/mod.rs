//! TOML configuration: a base `[logger]`, a `[colors]` level table, and
//! per-logger `[loggers.NAME]` overrides.
//!
//! Separated from struct definitions so the loading and merge logic stays
//! independent of the serde schema.

mod structs;

pub use structs::{LoggerConfig, LoggerOverride};

use crate::fmt::Color;
use crate::internal;
use crate::level::StyleTable;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "spacelog.toml";

/// A missing or empty file must still produce a working logger, hence `#[serde(default)]`.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Settings shared by every logger built from this file.
    pub logger: LoggerConfig,
    /// Level name → color name or `#RRGGBB`. Overrides built-in colors and may add levels.
    pub colors: HashMap<String, String>,
    /// Named loggers that diverge from `[logger]`.
    pub loggers: HashMap<String, LoggerOverride>,
}

impl Config {
    /// Reads the file at the default location, or returns defaults when there is none.
    ///
    /// # Errors
    /// Fails if the config directory can't be determined or the file can't be read or parsed.
    pub fn load() -> Result<Self, crate::Error> {
        let path = Self::get_config_path()?;
        if !path.exists() {
            internal::debug("CONFIG", "Config file not found, using defaults");
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// # Errors
    /// Returns error if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, crate::Error> {
        let content =
            fs::read_to_string(path).map_err(|e| crate::Error::filesystem(path, e))?;
        let config = Self::parse(&content)?;
        internal::info("CONFIG", &format!("Config loaded from {}", path.display()));
        Ok(config)
    }

    /// # Errors
    /// TOML syntax or type errors.
    pub fn parse(content: &str) -> Result<Self, crate::Error> {
        Ok(toml::from_str(content)?)
    }

    /// `<config dir>/spacelog/spacelog.toml`.
    ///
    /// # Errors
    /// Fails when the platform has no concept of a config directory.
    pub fn get_config_path() -> Result<PathBuf, crate::Error> {
        directories::ProjectDirs::from("", "", "spacelog")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE))
            .ok_or(crate::Error::ConfigDirNotFound)
    }

    /// The base config with `[loggers.NAME]` applied on top and `name` set.
    #[must_use]
    pub fn for_logger(&self, name: &str) -> LoggerConfig {
        let mut config = self.logger.clone();
        name.clone_into(&mut config.name);

        if let Some(overrides) = self.loggers.get(name) {
            internal::debug("CONFIG", &format!("Applying overrides for logger {name}"));
            overrides.apply(&mut config);
        }

        config
    }

    /// Built-in styles with `[colors]` entries applied.
    ///
    /// # Errors
    /// `Error::InvalidColor` for an unparsable color value.
    pub fn style_table(&self) -> Result<StyleTable, crate::Error> {
        let mut table = StyleTable::default();
        // Sorted so custom levels land in the table in a stable order.
        let mut entries: Vec<_> = self.colors.iter().collect();
        entries.sort();
        for (level, color) in entries {
            table.insert(level.as_str(), color.parse::<Color>()?);
        }
        Ok(table)
    }
}
