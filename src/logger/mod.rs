//! The logger façade: renders the prefix and the message with the level's name,
//! then hands the joined line to the router under the level's style.

mod builder;
mod from_config;

pub use builder::LoggerBuilder;

use crate::Error;
use crate::fmt::{RenderContext, Template};
use crate::internal;
use crate::level::{Level, StyleTable};
use crate::output::{LogMode, Router};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Configuration is fixed at build time; only the sinks are mutable, behind one lock,
/// so concurrent callers never interleave partial lines.
#[derive(Debug)]
pub struct Logger {
    name: String,
    template: Template,
    mode: LogMode,
    enabled: bool,
    styles: StyleTable,
    /// `HH:MM:SS` at build time, for `%C`.
    creation_time: String,
    file_path: Option<PathBuf>,
    router: Mutex<Router>,
}

impl Logger {
    /// Starts a builder with the prefix template rendered before every message.
    #[must_use]
    pub fn builder(template: impl Into<String>) -> LoggerBuilder {
        LoggerBuilder::new(template)
    }

    fn lock_router(&self) -> MutexGuard<'_, Router> {
        // A panic mid-write leaves nothing inconsistent worth refusing to log over.
        self.router.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn context(&self) -> RenderContext<'_> {
        RenderContext::new(&self.name, &self.creation_time).path(self.file_path.as_deref())
    }

    /// Renders the prefix and `message` with `level`, joined by one space.
    #[must_use]
    pub fn format(&self, level: &str, message: &str) -> String {
        let ctx = self.context();
        let prefix = self.template.render(level, &ctx);
        let body = Template::parse(message).render(level, &ctx);
        format!("{prefix} {body}")
    }

    /// Logs `message` at a level named by string, which must exist in the style table.
    /// A disabled logger returns `Ok` without looking at anything.
    ///
    /// # Errors
    /// `Error::InvalidLevel` before any sink is touched; I/O errors from the sinks.
    pub fn log(&self, message: &str, level: &str) -> Result<(), Error> {
        if !self.enabled {
            return Ok(());
        }

        let style = self.styles.resolve(level)?;
        let line = self.format(level, message);
        self.lock_router().route(style, &line)
    }

    /// Like `log_level`, but `text` is written as-is after the prefix.
    /// Diagnostics carry paths and names that may contain `%`.
    pub(crate) fn log_verbatim(&self, level: Level, text: &str) -> Result<(), Error> {
        if !self.enabled {
            return Ok(());
        }

        let style = self.styles.resolve(level.as_str())?;
        let prefix = self.template.render(level.as_str(), &self.context());
        self.lock_router().route(style, &format!("{prefix} {text}"))
    }

    /// # Errors
    /// I/O errors from the sinks.
    pub fn log_level(&self, level: Level, message: &str) -> Result<(), Error> {
        self.log(message, level.as_str())
    }

    /// # Errors
    /// I/O errors from the sinks.
    pub fn debug(&self, message: &str) -> Result<(), Error> {
        self.log_level(Level::Debug, message)
    }

    /// # Errors
    /// I/O errors from the sinks.
    pub fn info(&self, message: &str) -> Result<(), Error> {
        self.log_level(Level::Info, message)
    }

    /// # Errors
    /// I/O errors from the sinks.
    pub fn success(&self, message: &str) -> Result<(), Error> {
        self.log_level(Level::Success, message)
    }

    /// Logs at `WARNING`.
    ///
    /// # Errors
    /// I/O errors from the sinks.
    pub fn warn(&self, message: &str) -> Result<(), Error> {
        self.log_level(Level::Warning, message)
    }

    /// # Errors
    /// I/O errors from the sinks.
    pub fn critical(&self, message: &str) -> Result<(), Error> {
        self.log_level(Level::Critical, message)
    }

    /// # Errors
    /// The first flush error across sinks.
    pub fn flush(&self) -> Result<(), Error> {
        self.lock_router().flush()
    }

    /// Flushes, syncs and releases the file sink. Consuming `self` makes this terminal.
    ///
    /// # Errors
    /// Flushing or syncing failed; the handle is released either way.
    pub fn close(self) -> Result<(), Error> {
        let result = self.lock_router().close();
        match result {
            Ok(()) => internal::debug("LOGGER", &format!("Closed logger {}", self.name)),
            Err(ref e) => internal::error(
                "LOGGER",
                &format!("Closing logger {} failed: {e}", self.name),
            ),
        }
        result
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn template(&self) -> &str {
        self.template.as_str()
    }

    #[must_use]
    pub const fn mode(&self) -> &LogMode {
        &self.mode
    }

    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    #[must_use]
    pub fn creation_time(&self) -> &str {
        &self.creation_time
    }

    /// Absolute path of the log file, when a directory was configured.
    #[must_use]
    pub fn logfile_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    #[must_use]
    pub const fn styles(&self) -> &StyleTable {
        &self.styles
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        let router = self
            .router
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner);
        let _ = router.flush();
    }
}
