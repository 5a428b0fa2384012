//! Taglog
//!
//! Tagged, timestamped logging to console and file sinks.
//!
//! Messages carry a severity tag (`[DEBUG]`, `[ERROR]`, `[WARNING]`,
//! `[INFO]`, `[SUCCESS]`, or none for raw text), a local-time timestamp,
//! and an optional sender hint (a module path, method name, or similar).
//! Output goes to a single log file, the console, or both:
//!
//! - not initialized, or no file path configured: console only
//! - file path configured: file only
//! - file path configured and `tee` enabled: file and console
//!
//! Console output is colorized per tag when the stream is a terminal;
//! error-tagged messages print to the error stream and are additionally
//! remembered for [`get_last_error`]. Tags listed in the `suppress` option
//! produce no output at all. File appends never fail the calling log
//! operation.
//!
//! ## Usage
//!
//! Initialize once at the application entry point, then log from anywhere:
//!
//! ```no_run
//! use taglog::{init_logger, log_error, log_info, log_text, LoggerOptions};
//!
//! init_logger(
//!     "logs/app.log",
//!     LoggerOptions::new().with_tee(true).with_suppress(["debug"]),
//! )?;
//!
//! log_info("Hello, World!", None);                 // 2020-08-21 06:21:11 [INFO] Hello, World!
//! log_info("GET index", Some("app::router"));      // 2020-08-21 06:21:11 [INFO] [app::router] GET index
//! log_error("Ohh!", Some("bank::delete-account")); // 2020-08-21 06:21:11 [ERROR] [bank::delete-account] Ohh!
//! log_text("So Long, and Thanks for All the Fish!");
//! # Ok::<(), taglog::LoggerError>(())
//! ```
//!
//! Components that prefer an explicit handle over process-wide state can
//! own a [`Logger`] directly (or share one via [`SharedLogger`]).

pub mod config;
pub mod console;
pub mod error;
pub mod global;
pub mod logger;
pub mod message;
pub mod tag;

// Re-export commonly used types
pub use config::LoggerConfig;
pub use console::{Color, Console, StdConsole};
pub use error::{LoggerError, LoggerResult};
pub use global::{
    get_last_error, init_logger, init_logger_from_config, log_debug, log_error, log_info,
    log_success, log_text, log_warning, reset_last_error,
};
pub use logger::{Logger, LoggerOptions, SharedLogger};
pub use message::Message;
pub use tag::Tag;
