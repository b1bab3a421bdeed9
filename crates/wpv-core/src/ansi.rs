//! ANSI escape code handling utilities
//!
//! Hosted applications sometimes pass text that was formatted for a real
//! terminal (SGR color codes). Those sequences would show up as garbage in
//! the console pane, so the plain formatting path removes them.
//!
//! Only Select Graphic Rendition sequences (`ESC [ ... m`) are stripped.
//! Cursor movement and other CSI sequences are left alone.

use regex::Regex;
use std::sync::LazyLock;

/// Regex pattern for SGR (color/attribute) escape sequences.
static ANSI_COLOR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1b\[[0-9;]*m").expect("ANSI regex pattern is valid"));

/// Strip all ANSI color escape sequences from a string.
///
/// # Examples
///
/// ```
/// use wpv_core::strip_ansi_codes;
///
/// let input = "\x1b[31mred text\x1b[0m";
/// assert_eq!(strip_ansi_codes(input), "red text");
///
/// // Non-color sequences are preserved
/// let input = "\x1b[2Jcleared";
/// assert_eq!(strip_ansi_codes(input), input);
/// ```
pub fn strip_ansi_codes(input: &str) -> String {
    ANSI_COLOR_PATTERN.replace_all(input, "").into_owned()
}

/// Check if a string contains ANSI color escape sequences.
///
/// # Examples
///
/// ```
/// use wpv_core::contains_ansi_codes;
///
/// assert!(contains_ansi_codes("\x1b[31mred\x1b[0m"));
/// assert!(!contains_ansi_codes("plain text"));
/// ```
pub fn contains_ansi_codes(input: &str) -> bool {
    ANSI_COLOR_PATTERN.is_match(input)
}
