//! Log message payloads

use std::fmt;

use serde_json::Value;

/// A loggable payload: plain text, a number, or a structured value
///
/// Every variant converts to display text exactly once, via the `Display`
/// implementation: structured values render as 2-space-indented JSON,
/// numbers and text as their plain string representation. Errors are
/// brought in through [`Message::from_error`] and contribute their
/// display text.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Text(String),
    Int(i64),
    Float(f64),
    Json(Value),
}

impl Message {
    /// Build a message from any error value, using its display text
    pub fn from_error<E: std::error::Error + ?Sized>(err: &E) -> Self {
        Message::Text(err.to_string())
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Message::Text(text) => f.write_str(text),
            Message::Int(n) => write!(f, "{}", n),
            Message::Float(n) => write!(f, "{}", n),
            Message::Json(value) => {
                let text = serde_json::to_string_pretty(value)
                    .unwrap_or_else(|_| value.to_string());
                f.write_str(&text)
            }
        }
    }
}

impl From<&str> for Message {
    fn from(text: &str) -> Self {
        Message::Text(text.to_string())
    }
}

impl From<String> for Message {
    fn from(text: String) -> Self {
        Message::Text(text)
    }
}

impl From<i32> for Message {
    fn from(n: i32) -> Self {
        Message::Int(n.into())
    }
}

impl From<i64> for Message {
    fn from(n: i64) -> Self {
        Message::Int(n)
    }
}

impl From<u32> for Message {
    fn from(n: u32) -> Self {
        Message::Int(n.into())
    }
}

impl From<f64> for Message {
    fn from(n: f64) -> Self {
        Message::Float(n)
    }
}

impl From<Value> for Message {
    fn from(value: Value) -> Self {
        Message::Json(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strings_pass_through() {
        assert_eq!(Message::from("plain").to_string(), "plain");
        assert_eq!(Message::from(String::from("owned")).to_string(), "owned");
    }

    #[test]
    fn numbers_render_plainly() {
        assert_eq!(Message::from(42).to_string(), "42");
        assert_eq!(Message::from(7u32).to_string(), "7");
        assert_eq!(Message::from(3.5).to_string(), "3.5");
    }

    #[test]
    fn json_values_render_indented() {
        let message = Message::from(serde_json::json!({"name": "socket", "port": 8080}));
        let text = message.to_string();
        assert!(text.contains('\n'));
        assert!(text.contains("  \"name\": \"socket\""));
        assert!(text.contains("\"port\": 8080"));
    }

    #[test]
    fn errors_use_display_text() {
        let err = std::io::Error::new(std::io::ErrorKind::Other, "disk on fire");
        assert_eq!(Message::from_error(&err).to_string(), "disk on fire");
    }
}
