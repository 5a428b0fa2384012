//! Console output seam
//!
//! The logger talks to the terminal through the [`Console`] trait so hosts
//! and tests can substitute their own stream handling.

use std::io::IsTerminal;

/// ANSI console colors used by the tags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    None,
    Red,
    Yellow,
    Green,
}

impl Color {
    pub const RESET: &'static str = "\x1b[0m";

    /// ANSI escape code (empty for `None`)
    pub fn code(self) -> &'static str {
        match self {
            Color::None => "",
            Color::Red => "\x1b[31m",
            Color::Yellow => "\x1b[33m",
            Color::Green => "\x1b[32m",
        }
    }
}

/// Console abstraction with selectable output and error streams
pub trait Console: Send + Sync {
    /// Print a line to the standard output stream
    fn out(&self, text: &str, color: Color);

    /// Print a line to the error stream
    fn err(&self, text: &str, color: Color);
}

/// A console that writes to stdout/stderr
///
/// Text is wrapped in the requested ANSI color only when the target stream
/// is a terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdConsole;

impl StdConsole {
    /// Create a new standard console
    pub fn new() -> Self {
        Self
    }
}

impl Console for StdConsole {
    fn out(&self, text: &str, color: Color) {
        if color != Color::None && std::io::stdout().is_terminal() {
            println!("{}{}{}", color.code(), text, Color::RESET);
        } else {
            println!("{}", text);
        }
    }

    fn err(&self, text: &str, color: Color) {
        if color != Color::None && std::io::stderr().is_terminal() {
            eprintln!("{}{}{}", color.code(), text, Color::RESET);
        } else {
            eprintln!("{}", text);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_codes() {
        assert_eq!(Color::None.code(), "");
        assert_eq!(Color::Red.code(), "\x1b[31m");
        assert_eq!(Color::Yellow.code(), "\x1b[33m");
        assert_eq!(Color::Green.code(), "\x1b[32m");
    }

    #[test]
    fn std_console_prints_without_panicking() {
        let console = StdConsole::new();
        console.out("stdout line", Color::Green);
        console.err("stderr line", Color::Red);
    }
}
