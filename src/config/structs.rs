//! Configuration struct definitions.

use serde::Deserialize;

/// Everything needed to construct one `Logger`.
///
/// Immutable once handed to the logger. Every field has a default so an empty
/// `[logger]` table still yields a console logger.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Prefix rendered before every message.
    pub template: String,
    /// Value of `%N`.
    pub name: String,
    /// Mode flags: any combination of `c` (console) and `f` (file).
    pub mode: String,
    /// Directory for the log file. Without one there is no file sink at all.
    pub directory: Option<String>,
    /// Log file name; blank means `<YYYY-MM-DD>.log`.
    pub filename: String,
    /// Master switch; a disabled logger accepts every call and writes nothing.
    pub enabled: bool,
    /// Style console lines with the level color.
    pub colors: bool,
    /// Keep the level color codes in the log file too.
    pub file_colors: bool,
    /// Create `directory` when it doesn't exist.
    pub make_dir: bool,
    /// Put a blank line between sessions appended to the same file.
    pub session_separator: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            template: "%N %L @ %T".to_string(),
            name: "ROOT".to_string(),
            mode: "c".to_string(),
            directory: None,
            filename: String::new(),
            enabled: true,
            colors: true,
            file_colors: false,
            make_dir: false,
            session_separator: false,
        }
    }
}

impl LoggerConfig {
    /// Defaults with the given prefix template.
    #[must_use]
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            ..Self::default()
        }
    }
}

/// Per-logger overrides; unset fields inherit from `[logger]`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoggerOverride {
    pub template: Option<String>,
    pub mode: Option<String>,
    pub directory: Option<String>,
    pub filename: Option<String>,
    pub enabled: Option<bool>,
    pub colors: Option<bool>,
    pub file_colors: Option<bool>,
    pub make_dir: Option<bool>,
    pub session_separator: Option<bool>,
}

impl LoggerOverride {
    pub(crate) fn apply(&self, config: &mut LoggerConfig) {
        if let Some(ref template) = self.template {
            config.template.clone_from(template);
        }
        if let Some(ref mode) = self.mode {
            config.mode.clone_from(mode);
        }
        // Only a non-empty directory overrides; an empty one removes the file sink.
        if let Some(ref directory) = self.directory {
            config.directory = if directory.is_empty() {
                None
            } else {
                Some(directory.clone())
            };
        }
        if let Some(ref filename) = self.filename {
            config.filename.clone_from(filename);
        }
        if let Some(enabled) = self.enabled {
            config.enabled = enabled;
        }
        if let Some(colors) = self.colors {
            config.colors = colors;
        }
        if let Some(file_colors) = self.file_colors {
            config.file_colors = file_colors;
        }
        if let Some(make_dir) = self.make_dir {
            config.make_dir = make_dir;
        }
        if let Some(session_separator) = self.session_separator {
            config.session_separator = session_separator;
        }
    }
}
