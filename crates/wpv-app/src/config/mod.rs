//! Configuration file parsing for Web Preview
//!
//! Supports `.wpv/config.toml` for global settings.

pub mod settings;
pub mod types;

pub use settings::{load_settings, load_settings_from_dir, load_source_file};
pub use types::*;
