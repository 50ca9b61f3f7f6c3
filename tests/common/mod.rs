//! Shared test helpers.

#![allow(dead_code)]

use spacelog::ConsoleOutput;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

/// In-memory console that tests can read back after logging.
#[derive(Clone, Default)]
pub struct Capture(Arc<Mutex<Vec<u8>>>);

impl Capture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn console(&self) -> ConsoleOutput {
        ConsoleOutput::with_writer(self.clone())
    }

    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }
}

impl Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// `HH:MM:SS` with digits in the right places.
pub fn is_clock_time(s: &str) -> bool {
    let b = s.as_bytes();
    b.len() == 8
        && b[2] == b':'
        && b[5] == b':'
        && [0, 1, 3, 4, 6, 7].iter().all(|&i| b[i].is_ascii_digit())
}

pub fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}
