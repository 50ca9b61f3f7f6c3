//! Command-line interface for spacelog.
//!
//! Flags override values from the config file, which override built-in defaults.

use crate::Error;
use crate::config::{Config, LoggerConfig};
use crate::internal;
use crate::level::Level;
use crate::logger::LoggerBuilder;
use clap::Parser;
use std::path::PathBuf;

/// spacelog - log one message through a template.
#[derive(Debug, Parser)]
#[command(
    name = "spacelog",
    version,
    about = "Log one message through a spacelog template"
)]
pub struct Cli {
    /// Level: DEBUG, INFO, SUCCESS, WARNING, CRITICAL, or a level from [colors]
    pub level: String,
    /// Message; words are joined with spaces
    #[arg(required = true)]
    pub message: Vec<String>,
    /// Config file (default: <config dir>/spacelog/spacelog.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
    /// Named logger from [loggers.NAME] in the config
    #[arg(long, short = 'l', value_name = "NAME")]
    pub logger: Option<String>,
    /// Prefix template, e.g. "%N %L @ %T"
    #[arg(long, short = 't')]
    pub template: Option<String>,
    /// Value of %N
    #[arg(long, short = 'n')]
    pub name: Option<String>,
    /// Mode flags: c (console), f (file)
    #[arg(long, short = 'm')]
    pub mode: Option<String>,
    /// Log file directory
    #[arg(long, short = 'd', value_name = "DIR")]
    pub dir: Option<PathBuf>,
    /// Log file name (default: <date>.log)
    #[arg(long, short = 'f', value_name = "NAME")]
    pub file: Option<String>,
    /// Disable console colors
    #[arg(long)]
    pub no_color: bool,
    /// Keep color codes in the log file
    #[arg(long)]
    pub file_colors: bool,
    /// Create the log directory if it is missing
    #[arg(long)]
    pub mkdir: bool,
    /// Print spacelog's own diagnostics to stderr
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

impl Cli {
    /// Built-in level names are accepted in any case; anything else is passed through
    /// for the style table to accept or reject.
    #[must_use]
    pub fn level_name(&self) -> String {
        self.level
            .parse::<Level>()
            .map_or_else(|_| self.level.clone(), |level| level.as_str().to_string())
    }

    #[must_use]
    pub fn message_text(&self) -> String {
        self.message.join(" ")
    }

    /// Layers command-line flags over a config-derived logger config.
    pub fn apply(&self, config: &mut LoggerConfig) {
        if let Some(ref template) = self.template {
            config.template.clone_from(template);
        }
        if let Some(ref name) = self.name {
            config.name.clone_from(name);
        }
        if let Some(ref mode) = self.mode {
            config.mode.clone_from(mode);
        }
        if let Some(ref dir) = self.dir {
            config.directory = Some(dir.to_string_lossy().into_owned());
        }
        if let Some(ref file) = self.file {
            config.filename.clone_from(file);
        }
        if self.no_color {
            config.colors = false;
        }
        if self.file_colors {
            config.file_colors = true;
        }
        if self.mkdir {
            config.make_dir = true;
        }
    }
}

/// Loads config, builds the logger, logs the message, and closes the logger.
///
/// # Errors
/// Anything from config loading, logger construction, or the log call itself.
pub fn run(cli: &Cli) -> Result<(), Error> {
    if cli.verbose {
        internal::init()?;
    }

    let config = match cli.config {
        Some(ref path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let mut logger_config = cli
        .logger
        .as_deref()
        .map_or_else(|| config.logger.clone(), |name| config.for_logger(name));
    cli.apply(&mut logger_config);

    let logger = LoggerBuilder::from_config(&logger_config)
        .styles(config.style_table()?)
        .build()?;

    logger.log(&cli.message_text(), &cli.level_name())?;
    logger.close()
}
