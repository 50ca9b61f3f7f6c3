//! Tests for spacelog's own diagnostics. The diagnostic logger is a process-wide
//! `OnceLock`, so everything runs in one test to keep the install order fixed.

mod common;

use common::Capture;
use spacelog::{Config, Logger, internal};
use std::fs;
use tempfile::TempDir;

#[test]
fn diagnostics_reach_installed_logger_verbatim() {
    // Nothing is installed yet, so this line must vanish.
    assert!(!internal::is_initialized());
    internal::warn("TEST", "before init");

    let capture = Capture::new();
    let diagnostics = Logger::builder("%L")
        .colors(false)
        .console(capture.console())
        .build()
        .unwrap();
    assert!(internal::init_with(diagnostics));
    assert!(internal::is_initialized());

    let other = Logger::builder("%L")
        .console(Capture::new().console())
        .build()
        .unwrap();
    assert!(!internal::init_with(other));
    internal::init().unwrap();

    let tmp_dir = TempDir::new().unwrap();
    let dir = tmp_dir.path().join("run%Nx%Ly");
    let log_path = dir.join("a.log");
    let build = || {
        Logger::builder("%L")
            .name("A%N")
            .mode("f")
            .directory(&dir)
            .filename("a.log")
            .make_dir(true)
            .session_separator(true)
            .build()
            .unwrap()
    };

    let first = build();
    first.info("one").unwrap();
    first.close().unwrap();
    build().info("two").unwrap();

    let config_path = tmp_dir.path().join("100%%.toml");
    fs::write(&config_path, "[logger]\nname = \"CFG\"\n").unwrap();
    let config = Config::load_from(&config_path).unwrap();
    assert_eq!(config.logger.name, "CFG");

    let lines = capture.lines();
    let expected = [
        "DEBUG INTERNAL: Internal logger ready".to_string(),
        format!("DEBUG FILE: Created directory: {}", dir.display()),
        format!("DEBUG FILE: Opened log file: {}", log_path.display()),
        format!("DEBUG FILE: Closed log file: {}", log_path.display()),
        "DEBUG LOGGER: Closed logger A%N".to_string(),
        "DEBUG FILE: Wrote session separator".to_string(),
        format!("INFO CONFIG: Config loaded from {}", config_path.display()),
    ];
    for line in &expected {
        assert!(lines.contains(line), "missing {line:?} in {lines:#?}");
    }
    assert!(lines.iter().all(|l| !l.contains("before init")));
    assert_eq!(
        lines
            .iter()
            .filter(|l| l.as_str() == "DEBUG INTERNAL: Internal logger ready")
            .count(),
        1
    );
}
