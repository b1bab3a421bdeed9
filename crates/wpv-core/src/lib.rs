//! # wpv-core - Core Domain Types
//!
//! Foundation crate for Web Preview. Provides the navigation history, the
//! console argument and entry types, console argument formatting, inline
//! style parsing, and error handling.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, chrono, thiserror, regex, tracing).
//!
//! ## Public API
//!
//! ### Navigation (`history`)
//! - [`NavigationHistory`] - Browser-style path history with a current index
//!
//! ### Console (`console`)
//! - [`ConsoleLevel`] - Severity of a console call (log, warn, error, info)
//! - [`ConsoleArg`] - One argument passed to a console call
//! - [`LogPart`] - A display segment with an optional inline style
//! - [`ConsoleLog`] - A captured console call
//! - [`format_args()`] - Turn console arguments into display segments
//!
//! ### Styles (`style`)
//! - [`StyleDeclarations`] - Parsed `property: value` pairs
//! - [`parse_style()`] - Parse a `%c` style string
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use wpv_core::prelude::*;
//! ```

pub mod ansi;
pub mod console;
pub mod error;
pub mod history;
pub mod logging;
pub mod style;

/// Prelude for common imports used throughout all Web Preview crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use ansi::{contains_ansi_codes, strip_ansi_codes};
pub use console::{format_args, ConsoleArg, ConsoleLevel, ConsoleLog, LogPart};
pub use error::{Error, Result, ResultExt};
pub use history::NavigationHistory;
pub use style::{parse_style, to_camel_case, StyleDeclarations};
