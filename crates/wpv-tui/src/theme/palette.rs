//! Color palette for the preview TUI.

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Black; // Terminal background
pub const CARD_BG: Color = Color::Black; // Panel/card backgrounds

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray; // Inactive borders
pub const BORDER_ACTIVE: Color = Color::Cyan; // Focused borders

// --- Accent ---
pub const ACCENT: Color = Color::Cyan; // Primary accent
pub const CONTRAST_FG: Color = Color::Black; // Text on accent backgrounds

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;
pub const TEXT_BRIGHT: Color = Color::White;

// --- Status ---
pub const STATUS_GREEN: Color = Color::Green;
pub const STATUS_RED: Color = Color::Red;
pub const STATUS_YELLOW: Color = Color::Yellow;
pub const STATUS_BLUE: Color = Color::Blue;

// --- Document elements ---
pub const LINK_FG: Color = Color::LightBlue;
pub const BUTTON_FG: Color = Color::White;
pub const BUTTON_BG: Color = Color::Blue;
pub const FIELD_BG: Color = Color::Rgb(28, 33, 43);

// --- Console level colors ---
pub const LOG_ERROR: Color = Color::Red;
pub const LOG_ERROR_MSG: Color = Color::LightRed;
pub const LOG_WARNING: Color = Color::Yellow;
pub const LOG_WARNING_MSG: Color = Color::Yellow;
pub const LOG_INFO: Color = Color::Blue;
pub const LOG_INFO_MSG: Color = Color::White;
pub const LOG_PLAIN: Color = Color::Gray;
pub const LOG_PLAIN_MSG: Color = Color::White;

// --- Code view ---
pub const LINE_NUMBER: Color = Color::DarkGray;
