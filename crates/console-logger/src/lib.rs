//! Console Logger
//!
//! `log` backend for the browser: each record becomes one console line,
//! routed to `console.error/warn/info/debug` by level.

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use wasm_bindgen::JsValue;

struct ConsoleLogger {
    level: LevelFilter,
}

/// Install the console logger. Call once, before anything logs.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_boxed_logger(Box::new(ConsoleLogger { level }))?;
    log::set_max_level(level);
    Ok(())
}

fn format_line(timestamp: &str, record: &Record) -> String {
    format!(
        "[{} {:<5} {}] {}",
        timestamp,
        record.level(),
        record.target(),
        record.args()
    )
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let timestamp = chrono::Local::now().format("%H:%M:%S%.3f").to_string();
        let line = JsValue::from_str(&format_line(&timestamp, record));
        match record.level() {
            Level::Error => web_sys::console::error_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            Level::Info => web_sys::console::info_1(&line),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}
