//! Tests for logger construction and console output.

mod common;

use common::{Capture, is_clock_time};
use spacelog::{Color, ErrorKind, Level, LogMode, Logger, Sink, StyleTable};
use std::sync::Arc;
use std::thread;

fn console_logger(capture: &Capture, template: &str) -> Logger {
    Logger::builder(template)
        .name("APP")
        .colors(false)
        .console(capture.console())
        .build()
        .unwrap()
}

#[test]
fn builder_defaults() {
    let logger = Logger::builder("%L").build().unwrap();
    assert_eq!(logger.name(), "ROOT");
    assert_eq!(logger.template(), "%L");
    assert_eq!(logger.mode(), &LogMode::default());
    assert!(logger.is_enabled());
    assert!(logger.logfile_path().is_none());
    assert!(is_clock_time(logger.creation_time()));
}

#[test]
fn invalid_mode_is_configuration_error() {
    let err = Logger::builder("%L").mode("x").build().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Configuration);

    let err = Logger::builder("%L").mode("cfz").build().unwrap_err();
    assert!(err.to_string().contains("'z'"));
}

#[test]
fn mode_flags() {
    let mode = LogMode::parse("fcf").unwrap();
    assert_eq!(mode.iter().collect::<Vec<_>>(), vec![Sink::File, Sink::Console]);
    assert_eq!(mode.to_string(), "fc");
    assert!(LogMode::parse("").unwrap().iter().next().is_none());
}

#[test]
fn info_end_to_end() {
    let capture = Capture::new();
    let logger = console_logger(&capture, "%N %L @ %T");

    logger.info("ready").unwrap();

    let lines = capture.lines();
    assert_eq!(lines.len(), 1);
    let line = &lines[0];
    let rest = line.strip_prefix("APP INFO @ ").unwrap();
    let (time, message) = rest.split_at(8);
    assert!(is_clock_time(time), "bad time in {line:?}");
    assert_eq!(message, " ready");
}

#[test]
fn message_is_rendered_too() {
    let capture = Capture::new();
    let logger = console_logger(&capture, "[%N]");

    logger.warn("%L from %N at 100%%").unwrap();

    assert_eq!(capture.lines(), vec!["[APP] WARNING from APP at 100%"]);
}

#[test]
fn convenience_levels() {
    let capture = Capture::new();
    let logger = console_logger(&capture, "%L");

    logger.debug("a").unwrap();
    logger.info("b").unwrap();
    logger.success("c").unwrap();
    logger.warn("d").unwrap();
    logger.critical("e").unwrap();

    assert_eq!(
        capture.lines(),
        vec!["DEBUG a", "INFO b", "SUCCESS c", "WARNING d", "CRITICAL e"]
    );
}

#[test]
fn generic_log_matches_convenience() {
    let capture = Capture::new();
    let logger = console_logger(&capture, "%L");

    logger.log("x", "SUCCESS").unwrap();
    logger.log_level(Level::Success, "x").unwrap();

    let lines = capture.lines();
    assert_eq!(lines[0], lines[1]);
}

#[test]
fn invalid_level_fails_without_output() {
    let capture = Capture::new();
    let logger = console_logger(&capture, "%L");

    let err = logger.log("msg", "BOGUS").unwrap_err();

    assert_eq!(err.kind(), ErrorKind::InvalidLevel);
    assert!(capture.contents().is_empty());
}

#[test]
fn disabled_logger_is_silent() {
    let capture = Capture::new();
    let logger = Logger::builder("%L")
        .enabled(false)
        .console(capture.console())
        .build()
        .unwrap();

    logger.debug("a").unwrap();
    logger.info("a").unwrap();
    logger.success("a").unwrap();
    logger.warn("a").unwrap();
    logger.critical("a").unwrap();
    logger.log("a", "BOGUS").unwrap();

    assert!(capture.contents().is_empty());
}

#[test]
fn colored_console_line() {
    let capture = Capture::new();
    let logger = Logger::builder("%L")
        .console(capture.console())
        .build()
        .unwrap();

    logger.critical("boom").unwrap();

    assert_eq!(capture.contents(), "\x1b[91mCRITICAL boom\x1b[0m\n");
}

#[test]
fn file_mode_only_writes_nothing_to_console() {
    let capture = Capture::new();
    let logger = Logger::builder("%L")
        .mode("f")
        .console(capture.console())
        .build()
        .unwrap();

    logger.info("nowhere").unwrap();

    assert!(capture.contents().is_empty());
}

#[test]
fn custom_level_from_style_table() {
    let capture = Capture::new();
    let logger = Logger::builder("%L")
        .styles(StyleTable::default().with("AUDIT", Color::Magenta))
        .console(capture.console())
        .build()
        .unwrap();

    logger.log("checked", "AUDIT").unwrap();

    assert_eq!(capture.contents(), "\x1b[35mAUDIT checked\x1b[0m\n");
}

#[test]
fn incomplete_style_table_rejected() {
    let err = Logger::builder("%L")
        .styles(StyleTable::empty().with("INFO", Color::Cyan))
        .build()
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Configuration);
}

#[test]
fn creation_time_is_fixed() {
    let capture = Capture::new();
    let logger = console_logger(&capture, "%C");
    let created = logger.creation_time().to_string();

    logger.info("one").unwrap();
    logger.info("two").unwrap();

    assert_eq!(
        capture.lines(),
        vec![format!("{created} one"), format!("{created} two")]
    );
}

#[test]
fn format_without_output() {
    let logger = Logger::builder("<%N:%L>").name("X").build().unwrap();
    assert_eq!(logger.format("INFO", "hi"), "<X:INFO> hi");
}

#[test]
fn logger_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Logger>();
}

#[test]
fn concurrent_lines_do_not_interleave() {
    let capture = Capture::new();
    let logger = Arc::new(console_logger(&capture, "%N"));

    let handles: Vec<_> = (0..4)
        .map(|t| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                for i in 0..50 {
                    logger.info(&format!("thread-{t} line-{i}")).unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let lines = capture.lines();
    assert_eq!(lines.len(), 200);
    assert!(lines.iter().all(|l| l.starts_with("APP thread-")));
}

#[test]
fn close_consumes_logger() {
    let capture = Capture::new();
    let logger = console_logger(&capture, "%L");
    logger.info("last").unwrap();
    logger.close().unwrap();
    assert_eq!(capture.lines(), vec!["INFO last"]);
}
