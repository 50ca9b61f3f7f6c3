//! Sends each rendered line to the sinks named by the mode flags.

use super::{ConsoleOutput, FileOutput, LogMode, Output, Sink};
use crate::Error;
use crate::level::LevelStyle;
use std::path::Path;

#[derive(Debug)]
pub struct Router {
    mode: LogMode,
    console: ConsoleOutput,
    /// Absent when no directory was configured; `f` in the mode is then a no-op.
    file: Option<FileOutput>,
}

impl Router {
    #[must_use]
    pub const fn new(mode: LogMode, console: ConsoleOutput, file: Option<FileOutput>) -> Self {
        Self {
            mode,
            console,
            file,
        }
    }

    /// # Errors
    /// The first sink write that fails; later sinks are not attempted.
    pub fn route(&mut self, style: &LevelStyle, line: &str) -> Result<(), Error> {
        let Self {
            mode,
            console,
            file,
        } = self;

        for sink in mode.iter() {
            let output: Option<&mut dyn Output> = match sink {
                Sink::Console => Some(&mut *console),
                Sink::File => file.as_mut().map(|f| f as &mut dyn Output),
            };
            if let Some(output) = output {
                output.write(style, line)?;
            }
        }
        Ok(())
    }

    /// # Errors
    /// The first sink flush that fails.
    pub fn flush(&mut self) -> Result<(), Error> {
        self.console.flush()?;
        if let Some(file) = self.file.as_mut() {
            file.flush()?;
        }
        Ok(())
    }

    #[must_use]
    pub const fn mode(&self) -> &LogMode {
        &self.mode
    }

    #[must_use]
    pub fn file_path(&self) -> Option<&Path> {
        self.file.as_ref().map(FileOutput::path)
    }

    #[must_use]
    pub const fn has_file(&self) -> bool {
        self.file.is_some()
    }

    /// Flushes the console and closes the file sink, leaving the router without one.
    ///
    /// # Errors
    /// Flushing or closing failed.
    pub fn close(&mut self) -> Result<(), Error> {
        self.console.flush()?;
        if let Some(file) = self.file.take() {
            file.close()?;
        }
        Ok(())
    }
}
