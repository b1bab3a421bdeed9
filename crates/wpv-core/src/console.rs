//! Console call types and argument formatting.
//!
//! A console call is a severity plus a list of arguments, mirroring the
//! browser `console.log("fmt %c text", "color: red", obj)` shape. This module
//! turns those arguments into display segments; capturing the calls is done
//! by the sink layer in `wpv-app`.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::ansi::strip_ansi_codes;

/// Style directive placeholder inside a format string
pub const STYLE_PLACEHOLDER: &str = "%c";

// ─────────────────────────────────────────────────────────────────────────────
// ConsoleLevel
// ─────────────────────────────────────────────────────────────────────────────

/// Severity of a console call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsoleLevel {
    /// Plain `log` output
    Log,
    /// `warn` output
    Warn,
    /// `error` output
    Error,
    /// Informational `info` output
    Info,
}

impl ConsoleLevel {
    /// All levels in sink-table order
    pub const ALL: [ConsoleLevel; 4] = [
        ConsoleLevel::Log,
        ConsoleLevel::Warn,
        ConsoleLevel::Error,
        ConsoleLevel::Info,
    ];

    /// Position of this level in per-level tables
    pub fn slot(self) -> usize {
        match self {
            ConsoleLevel::Log => 0,
            ConsoleLevel::Warn => 1,
            ConsoleLevel::Error => 2,
            ConsoleLevel::Info => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ConsoleLevel::Log => "log",
            ConsoleLevel::Warn => "warn",
            ConsoleLevel::Error => "error",
            ConsoleLevel::Info => "info",
        }
    }
}

impl fmt::Display for ConsoleLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// ConsoleArg
// ─────────────────────────────────────────────────────────────────────────────

/// One argument of a console call
#[derive(Debug, Clone, PartialEq)]
pub enum ConsoleArg {
    /// A string argument, shown verbatim
    Str(String),
    /// A structured value, shown pretty-printed when it is an object or array
    Value(Value),
}

impl ConsoleArg {
    /// Build an argument from any serializable value.
    ///
    /// If serialization fails the value's `Debug` text is used instead.
    pub fn serialize<T>(value: &T) -> Self
    where
        T: Serialize + fmt::Debug + ?Sized,
    {
        match serde_json::to_value(value) {
            Ok(value) => Self::from(value),
            Err(e) => {
                tracing::debug!("Console argument not serializable ({}), using Debug text", e);
                Self::Str(format!("{:?}", value))
            }
        }
    }

    /// The argument as a string, if it is one
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ConsoleArg::Str(s) => Some(s),
            ConsoleArg::Value(Value::String(s)) => Some(s),
            ConsoleArg::Value(_) => None,
        }
    }

    /// Display text: strings as-is, objects/arrays pretty-printed,
    /// scalars in their plain textual form.
    pub fn to_display_text(&self) -> String {
        match self {
            ConsoleArg::Str(s) => s.clone(),
            ConsoleArg::Value(Value::String(s)) => s.clone(),
            ConsoleArg::Value(value @ (Value::Object(_) | Value::Array(_))) => {
                serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
            }
            ConsoleArg::Value(value) => value.to_string(),
        }
    }
}

impl From<&str> for ConsoleArg {
    fn from(s: &str) -> Self {
        ConsoleArg::Str(s.to_string())
    }
}

impl From<String> for ConsoleArg {
    fn from(s: String) -> Self {
        ConsoleArg::Str(s)
    }
}

impl From<&String> for ConsoleArg {
    fn from(s: &String) -> Self {
        ConsoleArg::Str(s.clone())
    }
}

impl From<Value> for ConsoleArg {
    fn from(value: Value) -> Self {
        match value {
            Value::String(s) => ConsoleArg::Str(s),
            other => ConsoleArg::Value(other),
        }
    }
}

macro_rules! impl_from_scalar {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for ConsoleArg {
                fn from(v: $ty) -> Self {
                    ConsoleArg::Value(Value::from(v))
                }
            }
        )*
    };
}

impl_from_scalar!(bool, i32, i64, u32, u64, usize, f64);

/// Build a `Vec<ConsoleArg>` from heterogeneous values.
///
/// ```
/// use wpv_core::console_args;
///
/// let args = console_args!["%c Hello", "color: red", 42];
/// assert_eq!(args.len(), 3);
/// ```
#[macro_export]
macro_rules! console_args {
    () => {
        ::std::vec::Vec::<$crate::ConsoleArg>::new()
    };
    ($($arg:expr),+ $(,)?) => {
        ::std::vec![$($crate::ConsoleArg::from($arg)),+]
    };
}

// ─────────────────────────────────────────────────────────────────────────────
// LogPart / ConsoleLog
// ─────────────────────────────────────────────────────────────────────────────

/// A run of text with an optional inline style string
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogPart {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
}

impl LogPart {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: None,
        }
    }

    pub fn styled(text: impl Into<String>, style: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: Some(style.into()),
        }
    }
}

/// A captured console call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsoleLog {
    pub level: ConsoleLevel,
    pub parts: Vec<LogPart>,
    pub timestamp: DateTime<Local>,
}

impl ConsoleLog {
    /// Create an entry stamped with the current local time
    pub fn new(level: ConsoleLevel, parts: Vec<LogPart>) -> Self {
        Self {
            level,
            parts,
            timestamp: Local::now(),
        }
    }

    /// Capture time as `HH:MM:SS`
    pub fn time_display(&self) -> String {
        self.timestamp.format("%H:%M:%S").to_string()
    }

    /// All segment texts concatenated, without styles
    pub fn text(&self) -> String {
        self.parts.iter().map(|p| p.text.as_str()).collect()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Formatting
// ─────────────────────────────────────────────────────────────────────────────

/// Turn console call arguments into display segments.
///
/// - No arguments yields a single empty segment.
/// - A leading string containing `%c` is split on the placeholder. Empty
///   pieces are dropped. The first piece is unstyled; every later piece
///   takes the next unused argument as its style, if any remain. Leftover
///   arguments follow as unstyled segments.
/// - Anything else is joined into one space-separated segment with ANSI
///   color codes removed.
pub fn format_args(args: &[ConsoleArg]) -> Vec<LogPart> {
    let Some(first) = args.first() else {
        return vec![LogPart::plain("")];
    };

    match first.as_str() {
        Some(format) if format.contains(STYLE_PLACEHOLDER) => format_styled(format, &args[1..]),
        _ => vec![format_plain(args)],
    }
}

fn format_styled(format: &str, rest: &[ConsoleArg]) -> Vec<LogPart> {
    let mut parts = Vec::new();
    let mut remaining = rest.iter();

    for (i, text) in format.split(STYLE_PLACEHOLDER).enumerate() {
        if text.is_empty() {
            continue;
        }
        let style = if i > 0 {
            remaining.next().map(ConsoleArg::to_display_text)
        } else {
            None
        };
        parts.push(LogPart {
            text: text.to_string(),
            style,
        });
    }

    parts.extend(remaining.map(|arg| LogPart::plain(arg.to_display_text())));
    parts
}

fn format_plain(args: &[ConsoleArg]) -> LogPart {
    let joined = args
        .iter()
        .map(ConsoleArg::to_display_text)
        .collect::<Vec<_>>()
        .join(" ");
    LogPart::plain(strip_ansi_codes(&joined))
}
