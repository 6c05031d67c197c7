//! Logging utilities.
//!
//! Routes the `log` facade to the browser console. Diagnostics from shader
//! compilation and GL error checks all go through here.

use std::sync::Once;

use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::JsValue;

/// Logger configuration.
#[derive(Debug, Clone, Copy)]
pub struct LoggingConfig {
    pub level: LevelFilter,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LevelFilter::Info,
        }
    }
}

impl LoggingConfig {
    /// Reads `log=<level>` from a page query string such as `?log=debug`.
    /// Unknown levels keep the default.
    pub fn from_query(search: &str) -> Self {
        let mut config = Self::default();
        for (key, value) in crate::config::query_pairs(search) {
            if key != "log" {
                continue;
            }
            if let Ok(level) = value.parse::<LevelFilter>() {
                config.level = level;
            }
        }
        config
    }
}

struct ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = JsValue::from_str(&format!(
            "[{}] {}: {}",
            record.level(),
            record.target(),
            record.args()
        ));
        match record.level() {
            Level::Error => web_sys::console::error_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            Level::Info => web_sys::console::info_1(&line),
            Level::Debug => web_sys::console::debug_1(&line),
            Level::Trace => web_sys::console::log_1(&line),
        }
    }

    fn flush(&self) {}
}

static LOGGER: ConsoleLogger = ConsoleLogger;
static INIT: Once = Once::new();

/// Installs the console logger once; later calls are ignored.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        // Another logger may already be installed by the embedding page's own wasm.
        if log::set_logger(&LOGGER).is_ok() {
            log::set_max_level(config.level);
        }
        log::debug!("logging initialized");
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_level_is_info() {
        assert_eq!(LoggingConfig::default().level, LevelFilter::Info);
    }

    #[test]
    fn query_selects_level() {
        assert_eq!(
            LoggingConfig::from_query("?sides=12&log=debug").level,
            LevelFilter::Debug
        );
        assert_eq!(LoggingConfig::from_query("log=off").level, LevelFilter::Off);
    }

    #[test]
    fn unknown_level_keeps_default() {
        assert_eq!(
            LoggingConfig::from_query("?log=loud").level,
            LevelFilter::Info
        );
    }
}
