//! File sink: one append-mode handle, opened when the logger is built and held
//! until the logger is closed or dropped. Every line is flushed before `write` returns.

use super::Output;
use crate::Error;
use crate::internal;
use crate::level::LevelStyle;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct FileOutput {
    path: PathBuf,
    /// Keep style codes in the file, for viewing with `less -R` or `cat`.
    colors_enabled: bool,
    file: File,
}

impl FileOutput {
    /// Opens `dir/filename` for appending, creating the file if needed.
    ///
    /// # Errors
    /// `Error::DirectoryMissing` if `dir` doesn't exist and `create_dir` is false;
    /// `Error::Filesystem` if creating the directory or opening the file fails.
    pub fn open(dir: &Path, filename: &str, create_dir: bool) -> Result<Self, Error> {
        if !dir.exists() {
            if !create_dir {
                internal::warn(
                    "FILE",
                    &format!("Log directory missing: {}", dir.display()),
                );
                return Err(Error::DirectoryMissing(dir.to_path_buf()));
            }
            fs::create_dir_all(dir).map_err(|e| Error::filesystem(dir, e))?;
            internal::debug("FILE", &format!("Created directory: {}", dir.display()));
        }

        let path = dir.join(filename);
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| Error::filesystem(&path, e))?;
        internal::debug("FILE", &format!("Opened log file: {}", path.display()));

        Ok(Self {
            path,
            colors_enabled: false,
            file,
        })
    }

    #[must_use]
    pub const fn colors(mut self, enabled: bool) -> Self {
        self.colors_enabled = enabled;
        self
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Separates this session's lines from an earlier session's with one blank line.
    /// Does nothing on an empty file. Returns whether the separator was written.
    ///
    /// # Errors
    /// Reading the file size or writing the separator failed.
    pub fn write_session_separator(&mut self) -> Result<bool, Error> {
        let len = self
            .file
            .metadata()
            .map_err(|e| Error::filesystem(&self.path, e))?
            .len();
        if len == 0 {
            return Ok(false);
        }
        self.file.write_all(b"\n")?;
        self.file.flush()?;
        internal::debug("FILE", "Wrote session separator");
        Ok(true)
    }

    /// Flushes and syncs the file to disk, then releases the handle.
    ///
    /// # Errors
    /// Flushing or syncing failed.
    pub fn close(mut self) -> Result<(), Error> {
        self.file.flush()?;
        self.file
            .sync_all()
            .map_err(|e| Error::filesystem(&self.path, e))?;
        internal::debug("FILE", &format!("Closed log file: {}", self.path.display()));
        Ok(())
    }

    fn format_line(&self, style: &LevelStyle, line: &str) -> String {
        if self.colors_enabled {
            format!("{}{line}{}\n", style.open(), style.reset())
        } else {
            format!("{line}\n")
        }
    }
}

impl Output for FileOutput {
    fn write(&mut self, style: &LevelStyle, line: &str) -> Result<(), Error> {
        // Single write so a line is never split across concurrent appenders.
        let content = self.format_line(style, line);
        self.file.write_all(content.as_bytes())?;
        self.file.flush()?;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), Error> {
        self.file.flush()?;
        Ok(())
    }
}
