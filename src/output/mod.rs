//! Sinks and the router that fans a rendered line out to them.
//!
//! Both sinks implement `Output`, so the router treats them uniformly; the mode
//! flags decide which of them a line reaches and in what order.

mod file;
mod router;
mod terminal;

pub use file::FileOutput;
pub use router::Router;
pub use terminal::ConsoleOutput;

use crate::Error;
use crate::level::LevelStyle;
use std::fmt;
use std::str::FromStr;

/// A destination a logger can write to.
pub trait Output: Send {
    /// Writes one line. The sink adds the newline and, where enabled, the style codes.
    ///
    /// # Errors
    /// I/O errors from the underlying stream or file.
    fn write(&mut self, style: &LevelStyle, line: &str) -> Result<(), Error>;

    /// # Errors
    /// I/O errors from the underlying stream or file.
    fn flush(&mut self) -> Result<(), Error>;
}

/// One mode flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sink {
    /// `c`
    Console,
    /// `f`
    File,
}

impl Sink {
    #[must_use]
    pub const fn from_flag(c: char) -> Option<Self> {
        match c {
            'c' => Some(Self::Console),
            'f' => Some(Self::File),
            _ => None,
        }
    }

    #[must_use]
    pub const fn flag(self) -> char {
        match self {
            Self::Console => 'c',
            Self::File => 'f',
        }
    }
}

/// Validated mode flags. Order of first appearance is the write order; repeats are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogMode {
    sinks: Vec<Sink>,
}

impl LogMode {
    /// # Errors
    /// `Error::InvalidMode` on the first character that isn't a known flag.
    pub fn parse(flags: &str) -> Result<Self, Error> {
        let mut sinks = Vec::with_capacity(2);
        for c in flags.chars() {
            let sink = Sink::from_flag(c).ok_or(Error::InvalidMode(c))?;
            if !sinks.contains(&sink) {
                sinks.push(sink);
            }
        }
        Ok(Self { sinks })
    }

    #[must_use]
    pub fn contains(&self, sink: Sink) -> bool {
        self.sinks.contains(&sink)
    }

    pub fn iter(&self) -> impl Iterator<Item = Sink> + '_ {
        self.sinks.iter().copied()
    }
}

impl Default for LogMode {
    fn default() -> Self {
        Self {
            sinks: vec![Sink::Console],
        }
    }
}

impl FromStr for LogMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for LogMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.sinks
            .iter()
            .try_for_each(|s| write!(f, "{}", s.flag()))
    }
}
