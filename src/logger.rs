//! Console Logger
//!
//! `log` backend for the browser: records go to the devtools console by
//! level, and the most recent lines are kept for the diagnostics notice.

use std::collections::VecDeque;
use std::sync::Mutex;

use log::{Level, LevelFilter, Log, Metadata, Record};

use crate::config;

pub struct ConsoleLogger {
    capacity: usize,
    recent: Mutex<VecDeque<String>>,
}

static LOGGER: ConsoleLogger = ConsoleLogger::new(config::LOG_BUFFER_CAPACITY);

impl ConsoleLogger {
    pub const fn new(capacity: usize) -> Self {
        Self {
            capacity,
            recent: Mutex::new(VecDeque::new()),
        }
    }

    fn remember(&self, line: String) {
        let Ok(mut recent) = self.recent.lock() else {
            return;
        };
        if recent.len() == self.capacity {
            recent.pop_front();
        }
        recent.push_back(line);
    }

    pub fn recent(&self) -> Vec<String> {
        self.recent
            .lock()
            .map(|recent| recent.iter().cloned().collect())
            .unwrap_or_default()
    }
}

fn format_line(record: &Record) -> String {
    let target = record.target().rsplit("::").next().unwrap_or("app");
    format!("[{}] {}: {}", target.to_uppercase(), record.level(), record.args())
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Info => web_sys::console::info_1(&value),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, line: &str) {
    eprintln!("{}", line);
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(record);
        emit(record.level(), &line);
        self.remember(line);
    }

    fn flush(&self) {}
}

/// Install the console logger; later calls are ignored
pub fn init(level: LevelFilter) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

/// Most recent log lines, oldest first
pub fn recent() -> Vec<String> {
    LOGGER.recent()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_buffer_keeps_latest() {
        let logger = ConsoleLogger::new(3);
        for i in 0..5 {
            logger.remember(format!("line {}", i));
        }
        assert_eq!(logger.recent(), vec!["line 2", "line 3", "line 4"]);
    }

    #[test]
    fn test_format_line() {
        let line = format_line(
            &Record::builder()
                .args(format_args!("saved {}", "pagebuilder-default"))
                .level(Level::Warn)
                .target("landing_builder_ui::workspace")
                .build(),
        );
        assert_eq!(line, "[WORKSPACE] WARN: saved pagebuilder-default");
    }
}
