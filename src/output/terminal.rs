//! Console sink. It owns its writer rather than touching a process-wide
//! terminal mode, so several loggers (or a test harness) can coexist.

use super::Output;
use crate::Error;
use crate::fmt::Color;
use crate::level::LevelStyle;
use std::fmt;
use std::io::{self, Write};

pub struct ConsoleOutput {
    /// Piped output and CI logs don't want ANSI escape codes.
    colors_enabled: bool,
    writer: Box<dyn Write + Send>,
}

impl Default for ConsoleOutput {
    fn default() -> Self {
        Self::stdout()
    }
}

impl fmt::Debug for ConsoleOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsoleOutput")
            .field("colors_enabled", &self.colors_enabled)
            .finish_non_exhaustive()
    }
}

impl ConsoleOutput {
    #[must_use]
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout())
    }

    /// Redirects console output, e.g. into a buffer under test.
    #[must_use]
    pub fn with_writer(writer: impl Write + Send + 'static) -> Self {
        Self {
            colors_enabled: true,
            writer: Box::new(writer),
        }
    }

    #[must_use]
    pub const fn colors(mut self, enabled: bool) -> Self {
        self.colors_enabled = enabled;
        self
    }

    #[must_use]
    pub const fn colors_enabled(&self) -> bool {
        self.colors_enabled
    }

    /// Colored lines always end with a full reset so styling never bleeds into the next line.
    fn format_line(&self, style: &LevelStyle, line: &str) -> String {
        if self.colors_enabled {
            format!("{}{line}{}\n", style.open(), Color::RESET_ALL)
        } else {
            format!("{line}\n")
        }
    }
}

impl Output for ConsoleOutput {
    fn write(&mut self, style: &LevelStyle, line: &str) -> Result<(), Error> {
        let formatted = self.format_line(style, line);
        self.writer.write_all(formatted.as_bytes())?;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), Error> {
        self.writer.flush()?;
        Ok(())
    }
}
