//! Process-wide logger
//!
//! Free functions over a single shared [`Logger`] preserve the
//! initialize-once, log-anywhere usage: call [`init_logger`] from the
//! application entry point, then log from any module without passing a
//! handle around. Modules may also log before initialization, in which
//! case output goes to the console.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use once_cell::sync::Lazy;

use crate::config::LoggerConfig;
use crate::error::LoggerResult;
use crate::logger::{Logger, LoggerOptions};
use crate::message::Message;

static LOGGER: Lazy<RwLock<Logger>> = Lazy::new(|| RwLock::new(Logger::new()));

// Logging must never panic the host, so a poisoned lock is recovered
// instead of unwrapped.
fn read_logger() -> RwLockReadGuard<'static, Logger> {
    LOGGER.read().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn write_logger() -> RwLockWriteGuard<'static, Logger> {
    LOGGER.write().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Initialize the process-wide logger; see [`Logger::init`]
pub fn init_logger(path: &str, options: LoggerOptions) -> LoggerResult<()> {
    write_logger().init(path, options)
}

/// Initialize the process-wide logger from a loaded configuration
pub fn init_logger_from_config(config: &LoggerConfig) -> LoggerResult<()> {
    write_logger().init_from_config(config)
}

/// Log a debug message with tag `[DEBUG]` in yellow
pub fn log_debug(message: impl Into<Message>, sender: Option<&str>) {
    read_logger().debug(message, sender);
}

/// Log a warning message with tag `[WARNING]` in yellow
pub fn log_warning(message: impl Into<Message>, sender: Option<&str>) {
    read_logger().warning(message, sender);
}

/// Log an info message with tag `[INFO]`
pub fn log_info(message: impl Into<Message>, sender: Option<&str>) {
    read_logger().info(message, sender);
}

/// Log a success message with tag `[SUCCESS]` in green
pub fn log_success(message: impl Into<Message>, sender: Option<&str>) {
    read_logger().success(message, sender);
}

/// Log an error message with tag `[ERROR]` in red and record it for
/// [`get_last_error`]
pub fn log_error(message: impl Into<Message>, sender: Option<&str>) {
    read_logger().error(message, sender);
}

/// Log a raw text message: no timestamp, tag, or sender
pub fn log_text(message: impl Into<Message>) {
    read_logger().text(message);
}

/// The message text of the most recent [`log_error`] call
pub fn get_last_error() -> Option<String> {
    read_logger().last_error()
}

/// Clear the recorded last error
pub fn reset_last_error() {
    read_logger().reset_last_error();
}

/// Log a debug message through the process-wide logger, with the calling
/// module as the sender
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        $crate::global::log_debug(format!($($arg)*), Some(module_path!()))
    };
}

/// Log a warning message through the process-wide logger, with the calling
/// module as the sender
#[macro_export]
macro_rules! warning_log {
    ($($arg:tt)*) => {
        $crate::global::log_warning(format!($($arg)*), Some(module_path!()))
    };
}

/// Log an info message through the process-wide logger, with the calling
/// module as the sender
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {
        $crate::global::log_info(format!($($arg)*), Some(module_path!()))
    };
}

/// Log a success message through the process-wide logger, with the calling
/// module as the sender
#[macro_export]
macro_rules! success_log {
    ($($arg:tt)*) => {
        $crate::global::log_success(format!($($arg)*), Some(module_path!()))
    };
}

/// Log an error message through the process-wide logger, with the calling
/// module as the sender
#[macro_export]
macro_rules! error_log {
    ($($arg:tt)*) => {
        $crate::global::log_error(format!($($arg)*), Some(module_path!()))
    };
}

/// Log a raw text message through the process-wide logger
#[macro_export]
macro_rules! text_log {
    ($($arg:tt)*) => {
        $crate::global::log_text(format!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    // These tests share the process-wide logger, so each re-initializes it
    // with its own file and runs serialized.

    #[test]
    #[serial]
    fn global_logger_writes_to_configured_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("log.txt");
        init_logger(
            path.to_str().unwrap(),
            LoggerOptions::new().with_suppress(Vec::<String>::new()),
        )
        .unwrap();

        log_info("started", Some("app::main"));

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("[INFO]"));
        assert!(content.contains("[app::main]"));
        assert!(content.contains("started"));
    }

    #[test]
    #[serial]
    fn last_error_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("log.txt");
        init_logger(path.to_str().unwrap(), LoggerOptions::new()).unwrap();

        reset_last_error();
        assert_eq!(get_last_error(), None);

        log_error("Ohh!", Some("bank::delete-account"));
        assert_eq!(get_last_error().as_deref(), Some("Ohh!"));

        reset_last_error();
        assert_eq!(get_last_error(), None);
    }

    #[test]
    #[serial]
    fn macros_send_module_path_as_sender() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("log.txt");
        init_logger(
            path.to_str().unwrap(),
            LoggerOptions::new().with_suppress(Vec::<String>::new()),
        )
        .unwrap();

        crate::info_log!("listening on {}", 8080);
        crate::text_log!("raw {}", "line");

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("listening on 8080"));
        assert!(content.contains(module_path!()));
        assert!(content.contains("raw line"));
    }

    #[test]
    #[serial]
    fn init_from_loaded_config() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("log.txt");
        let config_path = dir.path().join("logger.yaml");
        std::fs::write(
            &config_path,
            format!("path: {}\nsuppress: []\n", log_path.display()),
        )
        .unwrap();

        let config = LoggerConfig::load(&config_path).unwrap();
        init_logger_from_config(&config).unwrap();

        log_success("deployed", None);
        let content = std::fs::read_to_string(&log_path).unwrap();
        assert!(content.contains("[SUCCESS]"));
        assert!(content.contains("deployed"));
    }
}
