//! `spacelog` - a small leveled logger with `%`-specifier templates.
//!
//! Every line is a rendered prefix template, a space, and the rendered message.
//! Lines go to the console, a file, or both, colored per level:
//! - `%D` date, `%T` time, `%C` logger creation time
//! - `%N` logger name, `%L` level, `%P` log file path, `%%` a literal `%`
//! - five built-in levels plus any custom ones from the style table
//! - TOML config with per-logger overrides
//!
//! # Example
//!
//! ```
//! use spacelog::Logger;
//!
//! let logger = Logger::builder("%N %L @ %T")
//!     .name("APP")
//!     .mode("c")
//!     .colors(false)
//!     .build()?;
//!
//! logger.info("ready")?;
//! logger.log("100%% done", "SUCCESS")?;
//! # Ok::<(), spacelog::Error>(())
//! ```
//!
//! # Features
//!
//! - `cli` (default): the `spacelog` command-line binary

pub mod config;
pub mod error;
pub mod fmt;
pub mod internal;
pub mod level;
pub mod logger;
pub mod output;

#[cfg(feature = "cli")]
pub mod cli;

pub use config::{Config, LoggerConfig};
pub use error::{Error, ErrorKind};
pub use fmt::{Color, RenderContext, Template, render};
pub use level::{Level, LevelStyle, StyleTable};
pub use logger::{Logger, LoggerBuilder};
pub use output::{ConsoleOutput, FileOutput, LogMode, Output, Router, Sink};
