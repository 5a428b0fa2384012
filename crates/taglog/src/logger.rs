//! Tagged logger with console and file sinks
//!
//! A [`Logger`] formats tagged, timestamped messages and dispatches them to
//! an optional log file and/or the console:
//!
//! - not initialized, or no file path configured: console only
//! - file path configured: file only
//! - file path configured and tee enabled: file and console
//!
//! File appends are best-effort: a failed write is reported on the console
//! error stream and never surfaces to the caller.

use std::collections::HashSet;
use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use chrono::Local;

use crate::config::LoggerConfig;
use crate::console::{Color, Console, StdConsole};
use crate::error::{LoggerError, LoggerResult};
use crate::message::Message;
use crate::tag::Tag;

#[cfg(windows)]
const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
const LINE_ENDING: &str = "\n";

/// Options applied by [`Logger::init`]
///
/// Fields left as `None` keep whatever the logger already has, so `init`
/// can be called again to adjust a single setting.
#[derive(Debug, Clone, Default)]
pub struct LoggerOptions {
    /// Write to the console in addition to the log file
    pub tee: Option<bool>,
    /// Tag names whose output is discarded (replaces the previous set)
    pub suppress: Option<Vec<String>>,
}

impl LoggerOptions {
    /// Create empty options (nothing is overridden)
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable the console tee
    pub fn with_tee(mut self, tee: bool) -> Self {
        self.tee = Some(tee);
        self
    }

    /// Replace the suppressed-tag set
    pub fn with_suppress<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.suppress = Some(tags.into_iter().map(Into::into).collect());
        self
    }
}

/// Shared handle for injecting one logger into many components
pub type SharedLogger = Arc<Logger>;

/// Tagged, timestamped logger
///
/// Logging methods take `&self`; only the last-error cache is
/// interior-mutable, so a `Logger` can be shared across threads once
/// configured. Concurrent file appends may interleave and their ordering
/// is not guaranteed.
pub struct Logger {
    path: Option<PathBuf>,
    tee: bool,
    suppress: HashSet<String>,
    initialized: bool,
    last_error: Mutex<Option<String>>,
    console: Box<dyn Console>,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Create an uninitialized logger writing to the standard console
    ///
    /// Until [`Logger::init`] is called, messages go to the console only.
    pub fn new() -> Self {
        Self::with_console(Box::new(StdConsole::new()))
    }

    /// Create a logger with a custom console implementation
    pub fn with_console(console: Box<dyn Console>) -> Self {
        Self {
            path: None,
            tee: false,
            suppress: HashSet::new(),
            initialized: false,
            last_error: Mutex::new(None),
            console,
        }
    }

    /// Apply configuration and prepare the log file
    ///
    /// A non-empty `path` replaces the configured log file path; an empty
    /// `path` keeps the previous one. Option fields are applied only when
    /// present, and a new suppress list replaces the old one. When a path
    /// is configured, the file is created if it does not exist yet.
    ///
    /// # Errors
    ///
    /// [`LoggerError::NotAFile`] when the path exists but is not a regular
    /// file, [`LoggerError::Io`] for any other filesystem failure.
    pub fn init(&mut self, path: &str, options: LoggerOptions) -> LoggerResult<()> {
        if !path.is_empty() {
            self.path = Some(PathBuf::from(path));
        }
        if let Some(tee) = options.tee {
            self.tee = tee;
        }
        if let Some(suppress) = options.suppress {
            self.suppress = suppress.into_iter().collect();
        }
        self.initialized = true;

        match &self.path {
            Some(path) => ensure_log_file(path),
            None => Ok(()),
        }
    }

    /// Apply a loaded [`LoggerConfig`]
    pub fn init_from_config(&mut self, config: &LoggerConfig) -> LoggerResult<()> {
        self.init(config.path.as_deref().unwrap_or(""), config.options())
    }

    /// Log a debug message with tag `[DEBUG]` in yellow
    pub fn debug(&self, message: impl Into<Message>, sender: Option<&str>) {
        self.log(Tag::Debug, message.into(), sender);
    }

    /// Log a warning message with tag `[WARNING]` in yellow
    pub fn warning(&self, message: impl Into<Message>, sender: Option<&str>) {
        self.log(Tag::Warning, message.into(), sender);
    }

    /// Log an info message with tag `[INFO]`
    pub fn info(&self, message: impl Into<Message>, sender: Option<&str>) {
        self.log(Tag::Info, message.into(), sender);
    }

    /// Log a success message with tag `[SUCCESS]` in green
    pub fn success(&self, message: impl Into<Message>, sender: Option<&str>) {
        self.log(Tag::Success, message.into(), sender);
    }

    /// Log an error message with tag `[ERROR]` in red
    ///
    /// The message text is recorded for [`Logger::last_error`] before the
    /// suppression check, so it is available even when the `error` tag is
    /// suppressed. On the console, errors print to the error stream.
    pub fn error(&self, message: impl Into<Message>, sender: Option<&str>) {
        let message = message.into();
        if let Ok(mut last) = self.last_error.lock() {
            *last = Some(message.to_string());
        }
        self.log(Tag::Error, message, sender);
    }

    /// Log a raw text message: no timestamp, tag, or sender
    pub fn text(&self, message: impl Into<Message>) {
        self.log(Tag::Text, message.into(), None);
    }

    /// The message text of the most recent [`Logger::error`] call
    pub fn last_error(&self) -> Option<String> {
        match self.last_error.lock() {
            Ok(last) => last.clone(),
            Err(_) => None,
        }
    }

    /// Clear the recorded last error
    pub fn reset_last_error(&self) {
        if let Ok(mut last) = self.last_error.lock() {
            *last = None;
        }
    }

    /// Whether [`Logger::init`] has been called
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// The configured log file path, if any
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    fn log(&self, tag: Tag, message: Message, sender: Option<&str>) {
        if self.suppress.contains(tag.name()) {
            return;
        }

        let text = match tag {
            Tag::Text => message.to_string(),
            _ => compose(tag, &message, sender),
        };

        if self.initialized {
            if let Some(path) = &self.path {
                if let Err(err) = append_line(path, &text) {
                    self.console.err(&err.to_string(), Color::None);
                }
            }
        }

        if !self.initialized || self.tee || self.path.is_none() {
            if tag == Tag::Error {
                self.console.err(&text, tag.color());
            } else {
                self.console.out(&text, tag.color());
            }
        }
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("path", &self.path)
            .field("tee", &self.tee)
            .field("suppress", &self.suppress)
            .field("initialized", &self.initialized)
            .finish()
    }
}

/// `<timestamp> <label> [<sender>] <message>`; the sender segment is
/// dropped when absent or empty
fn compose(tag: Tag, message: &Message, sender: Option<&str>) -> String {
    let sender = match sender {
        Some(s) if !s.is_empty() => format!("[{}] ", s),
        _ => String::new(),
    };
    format!("{} {} {}{}", local_time_text(), tag.label(), sender, message)
}

/// `YYYY-MM-DD hh:mm:ss`, local time, 24-hour clock
fn local_time_text() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

fn ensure_log_file(path: &Path) -> LoggerResult<()> {
    match std::fs::metadata(path) {
        Ok(meta) if meta.is_file() => Ok(()),
        Ok(_) => Err(LoggerError::NotAFile(path.to_path_buf())),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            std::fs::write(path, "")?;
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}

fn append_line(path: &Path, text: &str) -> std::io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(text.as_bytes())?;
    file.write_all(LINE_ENDING.as_bytes())
}
