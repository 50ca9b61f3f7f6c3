//! Validates construction parameters and opens the file sink, so a `Logger`
//! that exists is always usable.

use super::Logger;
use crate::Error;
use crate::config::LoggerConfig;
use crate::fmt::{DATE_FORMAT, TIME_FORMAT, Template};
use crate::internal;
use crate::level::StyleTable;
use crate::output::{ConsoleOutput, FileOutput, LogMode, Router, Sink};
use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Stepwise construction; defaults match `LoggerConfig::default()`.
#[derive(Debug)]
pub struct LoggerBuilder {
    config: LoggerConfig,
    directory: Option<PathBuf>,
    styles: StyleTable,
    console: Option<ConsoleOutput>,
}

impl LoggerBuilder {
    #[must_use]
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            config: LoggerConfig::new(template),
            directory: None,
            styles: StyleTable::default(),
            console: None,
        }
    }

    /// Takes every field from `config`, including its directory.
    #[must_use]
    pub fn from_config(config: &LoggerConfig) -> Self {
        Self {
            config: config.clone(),
            directory: config.directory.as_ref().map(PathBuf::from),
            styles: StyleTable::default(),
            console: None,
        }
    }

    /// Value of `%N`. Defaults to `ROOT`.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.config.name = name.into();
        self
    }

    /// Mode flags, e.g. `"c"`, `"f"`, `"cf"`. Validated by `build`.
    #[must_use]
    pub fn mode(mut self, mode: impl Into<String>) -> Self {
        self.config.mode = mode.into();
        self
    }

    /// Enables the file sink. `~` is expanded; relative paths resolve against the working directory.
    #[must_use]
    pub fn directory(mut self, dir: impl AsRef<Path>) -> Self {
        self.directory = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Blank or whitespace-only means `<YYYY-MM-DD>.log`.
    #[must_use]
    pub fn filename(mut self, filename: impl Into<String>) -> Self {
        self.config.filename = filename.into();
        self
    }

    #[must_use]
    pub const fn enabled(mut self, enabled: bool) -> Self {
        self.config.enabled = enabled;
        self
    }

    #[must_use]
    pub const fn colors(mut self, enabled: bool) -> Self {
        self.config.colors = enabled;
        self
    }

    #[must_use]
    pub const fn file_colors(mut self, enabled: bool) -> Self {
        self.config.file_colors = enabled;
        self
    }

    /// Create the directory if it's missing instead of failing.
    #[must_use]
    pub const fn make_dir(mut self, enabled: bool) -> Self {
        self.config.make_dir = enabled;
        self
    }

    #[must_use]
    pub const fn session_separator(mut self, enabled: bool) -> Self {
        self.config.session_separator = enabled;
        self
    }

    /// Replaces the level table. It must still cover the five built-in levels.
    #[must_use]
    pub fn styles(mut self, styles: StyleTable) -> Self {
        self.styles = styles;
        self
    }

    /// Sends console lines somewhere other than stdout.
    #[must_use]
    pub fn console(mut self, console: ConsoleOutput) -> Self {
        self.console = Some(console);
        self
    }

    /// # Errors
    /// Configuration errors for bad mode flags, names, or style table;
    /// filesystem errors from creating the directory or opening the file.
    pub fn build(self) -> Result<Logger, Error> {
        let now = Local::now();
        let mode = LogMode::parse(&self.config.mode)?;
        self.styles.ensure_builtin()?;
        let filename = resolve_filename(&self.config.filename, now)?;

        let directory = match self.directory.as_deref() {
            Some(dir) => resolve_directory(dir)?,
            None => None,
        };

        let file = match directory {
            Some(dir) => {
                let mut file = FileOutput::open(&dir, &filename, self.config.make_dir)?
                    .colors(self.config.file_colors);
                if self.config.session_separator {
                    file.write_session_separator()?;
                }
                Some(file)
            }
            None => None,
        };

        if file.is_none() && mode.contains(Sink::File) {
            internal::debug(
                "LOGGER",
                &format!("Logger {} has no directory; file mode is a no-op", self.config.name),
            );
        }

        let console = self
            .console
            .unwrap_or_default()
            .colors(self.config.colors);
        let file_path = file.as_ref().map(|f| f.path().to_path_buf());

        Ok(Logger {
            name: self.config.name,
            template: Template::parse(&self.config.template),
            mode: mode.clone(),
            enabled: self.config.enabled,
            styles: self.styles,
            creation_time: now.format(TIME_FORMAT).to_string(),
            file_path,
            router: Mutex::new(Router::new(mode, console, file)),
        })
    }
}

fn starts_with_whitespace(s: &str) -> bool {
    s.chars().next().is_some_and(char::is_whitespace)
}

/// Blank means today's date; anything else must be a plain, non-indented file name.
fn resolve_filename(filename: &str, now: DateTime<Local>) -> Result<String, Error> {
    if filename.trim().is_empty() {
        return Ok(format!("{}.log", now.format(DATE_FORMAT)));
    }
    if starts_with_whitespace(filename)
        || filename.contains(['/', '\\'])
        || matches!(filename, "." | "..")
    {
        return Err(Error::InvalidName {
            what: "filename",
            value: filename.to_string(),
        });
    }
    Ok(filename.to_string())
}

/// Expands `~` and makes the path absolute. An empty path means "no directory".
fn resolve_directory(dir: &Path) -> Result<Option<PathBuf>, Error> {
    if dir.as_os_str().is_empty() {
        return Ok(None);
    }

    let invalid = || Error::InvalidName {
        what: "directory",
        value: dir.display().to_string(),
    };
    let raw = dir.to_string_lossy();
    if starts_with_whitespace(&raw) {
        return Err(invalid());
    }
    if dir
        .file_name()
        .is_some_and(|stem| starts_with_whitespace(&stem.to_string_lossy()))
    {
        return Err(invalid());
    }

    let expanded = match dir.to_str() {
        Some(s) => PathBuf::from(shellexpand::tilde(s).as_ref()),
        None => dir.to_path_buf(),
    };
    let absolute = std::path::absolute(&expanded).map_err(|e| Error::filesystem(&expanded, e))?;
    internal::debug("LOGGER", &format!("Resolved log directory: {}", absolute.display()));
    Ok(Some(absolute))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 3, 9, 8, 5, 0).single().unwrap()
    }

    #[test]
    fn blank_filename_uses_date() {
        assert_eq!(resolve_filename("", fixed_now()).unwrap(), "2024-03-09.log");
        assert_eq!(resolve_filename(" \t ", fixed_now()).unwrap(), "2024-03-09.log");
    }

    #[test]
    fn indented_or_nested_filename_rejected() {
        assert!(resolve_filename(" app.log", fixed_now()).is_err());
        assert!(resolve_filename("a/b.log", fixed_now()).is_err());
        assert!(resolve_filename(".", fixed_now()).is_err());
        assert!(resolve_filename("..", fixed_now()).is_err());
        assert_eq!(resolve_filename("..log", fixed_now()).unwrap(), "..log");
    }

    #[test]
    fn empty_directory_is_absent() {
        assert!(resolve_directory(Path::new("")).unwrap().is_none());
    }

    #[test]
    fn indented_directory_rejected() {
        assert!(resolve_directory(Path::new(" logs")).is_err());
        assert!(resolve_directory(Path::new("var/ logs")).is_err());
    }
}
