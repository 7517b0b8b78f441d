//! Rolling Logger
//!
//! `log` backend that prints to the browser console (stderr off wasm)
//! and keeps the most recent lines in a circular buffer so they can be
//! read back for bug reports.

use std::collections::VecDeque;
use std::sync::Mutex;

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Default number of lines retained in the buffer
pub const DEFAULT_CAPACITY: usize = 256;

/// Logger with a bounded history of formatted lines
pub struct RollingLogger {
    app_name: String,
    level: LevelFilter,
    capacity: usize,
    lines: Mutex<VecDeque<String>>,
}

impl RollingLogger {
    pub fn new(app_name: &str, level: LevelFilter, capacity: usize) -> Self {
        Self {
            app_name: app_name.to_string(),
            level,
            capacity: capacity.max(1),
            lines: Mutex::new(VecDeque::with_capacity(capacity.max(1))),
        }
    }

    /// Snapshot of buffered lines, oldest first
    pub fn recent_lines(&self) -> Vec<String> {
        match self.lines.lock() {
            Ok(lines) => lines.iter().cloned().collect(),
            Err(_) => Vec::new(),
        }
    }

    pub fn clear(&self) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.clear();
        }
    }

    fn format(&self, record: &Record) -> String {
        format!(
            "[{}] {:<5} {} {} - {}",
            chrono::Local::now().format("%H:%M:%S%.3f"),
            record.level(),
            self.app_name,
            record.target(),
            record.args()
        )
    }

    fn push(&self, line: String) {
        if let Ok(mut lines) = self.lines.lock() {
            if lines.len() >= self.capacity {
                lines.pop_front();
            }
            lines.push_back(line);
        }
    }
}

impl Log for RollingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = self.format(record);
        emit(record.level(), &line);
        self.push(line);
    }

    fn flush(&self) {}
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
    eprintln!("{line}");
}

/// Install a leaked `RollingLogger` as the global `log` backend.
///
/// Returns the installed instance so callers can read the buffer later.
pub fn init_logger(
    app_name: &str,
    level: LevelFilter,
    capacity: usize,
) -> Result<&'static RollingLogger, SetLoggerError> {
    let logger: &'static RollingLogger = Box::leak(Box::new(RollingLogger::new(app_name, level, capacity)));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(logger)
}
