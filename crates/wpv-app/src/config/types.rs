//! Configuration types for Web Preview
//!
//! Defines `Settings` (`.wpv/config.toml`) and its sections.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Lowest console height accepted, as a percentage of the terminal
pub const MIN_CONSOLE_PERCENT: u16 = 10;
/// Highest console height accepted
pub const MAX_CONSOLE_PERCENT: u16 = 90;

/// Application settings (.wpv/config.toml)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub preview: PreviewSettings,

    #[serde(default)]
    pub console: ConsoleSettings,

    #[serde(default)]
    pub ui: UiSettings,

    #[serde(default)]
    pub behavior: BehaviorSettings,
}

/// What to preview
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PreviewSettings {
    /// Path the history is seeded with
    #[serde(default = "default_initial_path")]
    pub initial_path: String,

    /// File shown in the code view; the bundled page's source when unset
    #[serde(default)]
    pub source_file: Option<PathBuf>,
}

impl Default for PreviewSettings {
    fn default() -> Self {
        Self {
            initial_path: default_initial_path(),
            source_file: None,
        }
    }
}

fn default_initial_path() -> String {
    "/".to_string()
}

/// Console pane settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ConsoleSettings {
    /// Open the console pane at startup
    #[serde(default)]
    pub show_on_start: bool,

    /// Console pane height as a percentage of the preview area
    #[serde(default = "default_height_percent")]
    pub height_percent: u16,

    /// Prefix entries with their HH:MM:SS capture time
    #[serde(default = "default_true")]
    pub show_timestamps: bool,
}

impl Default for ConsoleSettings {
    fn default() -> Self {
        Self {
            show_on_start: false,
            height_percent: default_height_percent(),
            show_timestamps: true,
        }
    }
}

impl ConsoleSettings {
    /// Height percentage clamped to the usable range
    pub fn effective_height_percent(&self) -> u16 {
        self.height_percent
            .clamp(MIN_CONSOLE_PERCENT, MAX_CONSOLE_PERCENT)
    }
}

fn default_height_percent() -> u16 {
    30
}

fn default_true() -> bool {
    true
}

/// Border drawn around the preview frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FrameBorder {
    #[default]
    Rounded,
    Plain,
    Double,
}

/// Display settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Title on the preview frame; the hosted application's title when empty
    #[serde(default)]
    pub frame_title: String,

    #[serde(default)]
    pub border: FrameBorder,

    /// When false the display refuses fullscreen requests
    #[serde(default = "default_true")]
    pub allow_fullscreen: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            frame_title: String::new(),
            border: FrameBorder::default(),
            allow_fullscreen: true,
        }
    }
}

/// Behavior settings
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct BehaviorSettings {
    /// Command used to open external links (empty = platform default)
    #[serde(default)]
    pub browser: String,
}
