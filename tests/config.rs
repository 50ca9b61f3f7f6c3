//! Tests for config parsing, per-logger overrides and the color table.

use spacelog::{Color, Config, ErrorKind, Logger, LoggerConfig};
use std::fs;
use tempfile::TempDir;

const SAMPLE: &str = r##"
[logger]
template = "%D %T [%N] %L"
mode = "cf"
colors = false

[colors]
SUCCESS = "light_green"
AUDIT = "#ff79c6"

[loggers.NET]
mode = "f"
filename = "net.log"
file_colors = true
"##;

#[test]
fn empty_config_uses_defaults() {
    let config = Config::parse("").unwrap();
    assert_eq!(config.logger, LoggerConfig::default());
    assert!(config.colors.is_empty());
    assert!(config.loggers.is_empty());
}

#[test]
fn logger_config_defaults() {
    let config = LoggerConfig::default();
    assert_eq!(config.name, "ROOT");
    assert_eq!(config.mode, "c");
    assert!(config.directory.is_none());
    assert!(config.filename.is_empty());
    assert!(config.enabled);
    assert!(config.colors);
    assert!(!config.file_colors);
    assert!(!config.make_dir);
}

#[test]
fn parse_sample() {
    let config = Config::parse(SAMPLE).unwrap();
    assert_eq!(config.logger.template, "%D %T [%N] %L");
    assert_eq!(config.logger.mode, "cf");
    assert!(!config.logger.colors);
    assert!(config.logger.enabled);
    assert_eq!(config.colors.len(), 2);
}

#[test]
fn for_logger_applies_overrides() {
    let config = Config::parse(SAMPLE).unwrap();

    let net = config.for_logger("NET");
    assert_eq!(net.name, "NET");
    assert_eq!(net.mode, "f");
    assert_eq!(net.filename, "net.log");
    assert!(net.file_colors);
    // Inherited from [logger].
    assert_eq!(net.template, "%D %T [%N] %L");
    assert!(!net.colors);

    let other = config.for_logger("DB");
    assert_eq!(other.name, "DB");
    assert_eq!(other.mode, "cf");
}

#[test]
fn empty_directory_override_removes_file_sink() {
    let config = Config::parse(
        r#"
        [logger]
        directory = "/tmp/logs"

        [loggers.QUIET]
        directory = ""
        "#,
    )
    .unwrap();
    assert!(config.for_logger("QUIET").directory.is_none());
    assert_eq!(config.for_logger("LOUD").directory.as_deref(), Some("/tmp/logs"));
}

#[test]
fn style_table_merges_colors() {
    let config = Config::parse(SAMPLE).unwrap();
    let table = config.style_table().unwrap();

    assert_eq!(table.len(), 6);
    assert_eq!(table.get("SUCCESS").unwrap().color(), Color::BrightGreen);
    assert_eq!(table.get("AUDIT").unwrap().color(), Color::Rgb(255, 121, 198));
    assert_eq!(table.get("INFO").unwrap().color(), Color::BrightBlack);
}

#[test]
fn invalid_color_is_configuration_error() {
    let config = Config::parse("[colors]\nINFO = \"not-a-color\"").unwrap();
    let err = config.style_table().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Configuration);
}

#[test]
fn invalid_toml_is_configuration_error() {
    let err = Config::parse("[logger\nmode = ").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Configuration);

    let err = Config::parse("[logger]\nenabled = \"yes\"").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Configuration);
}

#[test]
fn load_from_missing_file_is_filesystem_error() {
    let tmp_dir = TempDir::new().unwrap();
    let err = Config::load_from(&tmp_dir.path().join("nope.toml")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Filesystem);
}

#[test]
fn from_file_config_builds_named_logger() {
    let tmp_dir = TempDir::new().unwrap();
    let config_path = tmp_dir.path().join("spacelog.toml");
    let log_dir = tmp_dir.path().join("logs");
    fs::write(
        &config_path,
        format!(
            r#"
            [logger]
            template = "%N %L"
            directory = "{}"
            make_dir = true

            [colors]
            AUDIT = "cyan"

            [loggers.NET]
            mode = "f"
            filename = "net.log"
            "#,
            log_dir.display()
        ),
    )
    .unwrap();

    let config = Config::load_from(&config_path).unwrap();
    let logger = Logger::from_file_config(&config, "NET").unwrap();
    logger.log("connected", "AUDIT").unwrap();
    logger.close().unwrap();

    let content = fs::read_to_string(log_dir.join("net.log")).unwrap();
    assert_eq!(content, "NET AUDIT connected\n");
}

#[test]
fn from_config_rejects_bad_mode() {
    let config = LoggerConfig {
        mode: "cx".to_string(),
        ..LoggerConfig::default()
    };
    let err = Logger::from_config(&config).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Configuration);
}

#[test]
fn from_config_disabled() {
    let config = LoggerConfig {
        enabled: false,
        ..LoggerConfig::new("%L")
    };
    let logger = Logger::from_config(&config).unwrap();
    assert!(!logger.is_enabled());
    logger.info("ignored").unwrap();
}
