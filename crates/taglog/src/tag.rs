//! Severity tags

use crate::console::Color;

/// Severity/category tag controlling formatting, coloring, and suppression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Debug,
    Error,
    Warning,
    Info,
    Success,
    Text,
}

impl Tag {
    /// Display label written in front of the message (empty for `Text`)
    pub fn label(self) -> &'static str {
        match self {
            Tag::Debug => "[DEBUG]",
            Tag::Error => "[ERROR]",
            Tag::Warning => "[WARNING]",
            Tag::Info => "[INFO]",
            Tag::Success => "[SUCCESS]",
            Tag::Text => "",
        }
    }

    /// Console color for this tag
    pub fn color(self) -> Color {
        match self {
            Tag::Debug | Tag::Warning => Color::Yellow,
            Tag::Error => Color::Red,
            Tag::Success => Color::Green,
            Tag::Info | Tag::Text => Color::None,
        }
    }

    /// Suppression key, matched case-sensitively against the configured
    /// suppressed-tag set
    pub fn name(self) -> &'static str {
        match self {
            Tag::Debug => "debug",
            Tag::Error => "error",
            Tag::Warning => "warning",
            Tag::Info => "info",
            Tag::Success => "success",
            Tag::Text => "text",
        }
    }
}
