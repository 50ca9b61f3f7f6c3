//! Unified error type for all spacelog operations.

use std::path::PathBuf;

/// Coarse classification so callers can decide between aborting and degrading
/// without matching on every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Bad construction parameters or config file contents.
    Configuration,
    /// Directory or file could not be created, opened, or written.
    Filesystem,
    /// A level name that the logger's style table doesn't know.
    InvalidLevel,
}

/// Error type for spacelog operations.
#[derive(Debug)]
pub enum Error {
    /// Mode string contained a character other than `c` or `f`.
    InvalidMode(char),
    /// Filename or directory is empty, starts with whitespace, or otherwise unusable.
    InvalidName {
        what: &'static str,
        value: String,
    },
    /// Style table lacks one of the built-in levels.
    MissingStyle(String),
    /// Color name or hex code could not be parsed.
    InvalidColor(String),
    /// TOML config parsing error.
    ConfigParse(toml::de::Error),
    /// Config directory not found.
    ConfigDirNotFound,
    /// Target directory does not exist and creation was not requested.
    DirectoryMissing(PathBuf),
    /// Creating or opening something on disk failed.
    Filesystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// I/O error while writing or flushing a sink.
    Io(std::io::Error),
    /// Level name absent from the style table.
    InvalidLevel(String),
}

impl Error {
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidMode(_)
            | Self::InvalidName { .. }
            | Self::MissingStyle(_)
            | Self::InvalidColor(_)
            | Self::ConfigParse(_)
            | Self::ConfigDirNotFound => ErrorKind::Configuration,
            Self::DirectoryMissing(_) | Self::Filesystem { .. } | Self::Io(_) => {
                ErrorKind::Filesystem
            }
            Self::InvalidLevel(_) => ErrorKind::InvalidLevel,
        }
    }

    pub(crate) fn filesystem(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Filesystem {
            path: path.into(),
            source,
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidMode(c) => {
                write!(f, "invalid log mode flag '{c}': mode may only contain 'c' and 'f'")
            }
            Self::InvalidName { what, value } => write!(f, "invalid {what}: {value:?}"),
            Self::MissingStyle(level) => write!(f, "style table has no entry for level {level}"),
            Self::InvalidColor(s) => write!(f, "invalid color: {s}"),
            Self::ConfigParse(e) => write!(f, "parse error: {e}"),
            Self::ConfigDirNotFound => write!(f, "config directory not found"),
            Self::DirectoryMissing(p) => write!(
                f,
                "log directory does not exist and creation is disabled: {}",
                p.display()
            ),
            Self::Filesystem { path, source } => write!(f, "{}: {source}", path.display()),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::InvalidLevel(level) => write!(f, "{level} is not a valid logging level"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) | Self::Filesystem { source: e, .. } => Some(e),
            Self::ConfigParse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Self::ConfigParse(e)
    }
}
