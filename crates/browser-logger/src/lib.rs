//! Browser Logger
//!
//! `log` backend that keeps the most recent records in a circular buffer and
//! mirrors every record to the browser console (stderr when not on wasm32).

use std::collections::VecDeque;
use std::fmt;
use std::sync::{Mutex, OnceLock};

use chrono::{DateTime, Utc};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Records kept when no capacity is given
pub const DEFAULT_CAPACITY: usize = 200;

static LOGGER: OnceLock<BrowserLogger> = OnceLock::new();

/// One buffered log line
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    pub timestamp: DateTime<Utc>,
    pub level: Level,
    pub target: String,
    pub message: String,
}

impl fmt::Display for LogRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{} {:<5} {}] {}",
            self.timestamp.format("%H:%M:%S%.3f"),
            self.level,
            self.target,
            self.message
        )
    }
}

pub struct BrowserLogger {
    level: LevelFilter,
    capacity: usize,
    buffer: Mutex<VecDeque<LogRecord>>,
}

impl BrowserLogger {
    pub fn new(level: LevelFilter, capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            level,
            capacity,
            buffer: Mutex::new(VecDeque::with_capacity(capacity)),
        }
    }

    /// Append a record, evicting the oldest when full
    fn push(&self, record: LogRecord) {
        let mut buffer = self.buffer.lock().unwrap_or_else(|e| e.into_inner());
        while buffer.len() >= self.capacity {
            buffer.pop_front();
        }
        buffer.push_back(record);
    }

    /// Snapshot of the buffered records, oldest first
    pub fn recent(&self) -> Vec<LogRecord> {
        let buffer = self.buffer.lock().unwrap_or_else(|e| e.into_inner());
        buffer.iter().cloned().collect()
    }
}

impl Log for BrowserLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let entry = LogRecord {
            timestamp: Utc::now(),
            level: record.level(),
            target: record.target().to_string(),
            message: record.args().to_string(),
        };
        emit(&entry);
        self.push(entry);
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn emit(record: &LogRecord) {
    use web_sys::console;

    let line = wasm_bindgen::JsValue::from_str(&record.to_string());
    match record.level {
        Level::Error => console::error_1(&line),
        Level::Warn => console::warn_1(&line),
        Level::Info => console::info_1(&line),
        Level::Debug => console::debug_1(&line),
        Level::Trace => console::log_1(&line),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(record: &LogRecord) {
    eprintln!("{}", record);
}

/// Install the global logger with the default capacity
pub fn init(level: LevelFilter) -> Result<&'static BrowserLogger, SetLoggerError> {
    init_with_capacity(level, DEFAULT_CAPACITY)
}

/// Install the global logger. Fails if any logger is already installed.
pub fn init_with_capacity(
    level: LevelFilter,
    capacity: usize,
) -> Result<&'static BrowserLogger, SetLoggerError> {
    let logger = LOGGER.get_or_init(|| BrowserLogger::new(level, capacity));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(logger)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn log_line(logger: &BrowserLogger, level: Level, message: &str) {
        logger.log(
            &Record::builder()
                .args(format_args!("{}", message))
                .level(level)
                .target("test")
                .build(),
        );
    }

    #[test]
    fn test_ring_evicts_oldest() {
        let logger = BrowserLogger::new(LevelFilter::Trace, 3);
        for i in 0..5 {
            log_line(&logger, Level::Info, &format!("line {}", i));
        }

        let messages: Vec<String> = logger.recent().into_iter().map(|r| r.message).collect();
        assert_eq!(messages, vec!["line 2", "line 3", "line 4"]);
    }

    #[test]
    fn test_level_filter() {
        let logger = BrowserLogger::new(LevelFilter::Warn, 10);
        log_line(&logger, Level::Debug, "too chatty");
        log_line(&logger, Level::Error, "Error fetching items: boom");

        let recent = logger.recent();
        assert_eq!(recent.len(), 1);
        assert_eq!(recent[0].level, Level::Error);
        assert_eq!(recent[0].target, "test");
    }

    #[test]
    fn test_zero_capacity_keeps_last_record() {
        let logger = BrowserLogger::new(LevelFilter::Info, 0);
        log_line(&logger, Level::Info, "a");
        log_line(&logger, Level::Info, "b");
        assert_eq!(logger.recent().len(), 1);
        assert_eq!(logger.recent()[0].message, "b");
    }

    #[test]
    fn test_display_format() {
        let record = LogRecord {
            timestamp: DateTime::parse_from_rfc3339("2024-01-02T03:04:05.678Z")
                .unwrap()
                .with_timezone(&Utc),
            level: Level::Warn,
            target: "items".to_string(),
            message: "slow".to_string(),
        };
        assert_eq!(record.to_string(), "[03:04:05.678 WARN  items] slow");
    }

    #[test]
    fn test_init_twice_fails() {
        let installed = init(LevelFilter::Info).expect("first init");
        assert!(init(LevelFilter::Info).is_err());

        log::warn!(target: "items", "slow response");
        assert!(installed
            .recent()
            .iter()
            .any(|r| r.target == "items" && r.message == "slow response"));
    }
}
