//! spacelog's own diagnostic logger, built from the same `Logger` type it reports on.
//!
//! Off until `init` is called: a library must not print on its users' behalf.
//! `OnceLock` makes the first successful `init` win; later calls are no-ops.

use crate::Error;
use crate::level::Level;
use crate::logger::Logger;
use crate::output::ConsoleOutput;
use std::io;
use std::sync::OnceLock;

static INTERNAL_LOGGER: OnceLock<Logger> = OnceLock::new();

/// Console-only diagnostics on stderr, so they never mix with logged output on stdout.
///
/// # Errors
/// Never in practice; building a console-only logger touches no filesystem.
pub fn init() -> Result<(), Error> {
    if is_initialized() {
        return Ok(());
    }
    let logger = Logger::builder("%T spacelog %L")
        .name("spacelog")
        .console(ConsoleOutput::with_writer(io::stderr()))
        .build()?;
    init_with(logger);
    Ok(())
}

/// Installs a caller-built diagnostic logger. Returns `false` if one was already installed.
pub fn init_with(logger: Logger) -> bool {
    let installed = INTERNAL_LOGGER.set(logger).is_ok();
    if installed {
        debug("INTERNAL", "Internal logger ready");
    }
    installed
}

#[must_use]
pub fn is_initialized() -> bool {
    INTERNAL_LOGGER.get().is_some()
}

/// Pre-init calls silently vanish. Errors writing diagnostics are dropped:
/// there is nowhere left to report them. `msg` is never template-rendered.
fn log(level: Level, scope: &str, msg: &str) {
    if let Some(logger) = INTERNAL_LOGGER.get() {
        let _ = logger.log_verbatim(level, &format!("{scope}: {msg}"));
    }
}

pub fn debug(scope: &str, msg: &str) {
    log(Level::Debug, scope, msg);
}

pub fn info(scope: &str, msg: &str) {
    log(Level::Info, scope, msg);
}

pub fn warn(scope: &str, msg: &str) {
    log(Level::Warning, scope, msg);
}

pub fn error(scope: &str, msg: &str) {
    log(Level::Critical, scope, msg);
}
