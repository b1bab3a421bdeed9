//! Semantic style builders for the preview TUI.

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};
use wpv_app::config::FrameBorder;
use wpv_core::ConsoleLevel;

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

pub fn text_bright_bold() -> Style {
    Style::default()
        .fg(palette::TEXT_BRIGHT)
        .add_modifier(Modifier::BOLD)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Status styles ---
pub fn status_green() -> Style {
    Style::default().fg(palette::STATUS_GREEN)
}

pub fn status_red() -> Style {
    Style::default().fg(palette::STATUS_RED)
}

/// "Black on Cyan" - used for focused and active controls
pub fn focused_selected() -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Document element styles ---
pub fn link() -> Style {
    Style::default()
        .fg(palette::LINK_FG)
        .add_modifier(Modifier::UNDERLINED)
}

pub fn button() -> Style {
    Style::default()
        .fg(palette::BUTTON_FG)
        .bg(palette::BUTTON_BG)
        .add_modifier(Modifier::BOLD)
}

pub fn field() -> Style {
    Style::default()
        .fg(palette::TEXT_MUTED)
        .bg(palette::FIELD_BG)
}

/// Toolbar control; disabled controls are drawn muted
pub fn control(enabled: bool) -> Style {
    if enabled {
        text_primary()
    } else {
        text_muted()
    }
}

// --- Console level styles ---

/// `(badge style, message style)` for a console level
pub fn console_level(level: ConsoleLevel) -> (Style, Style) {
    let (badge, message) = match level {
        ConsoleLevel::Error => (palette::LOG_ERROR, palette::LOG_ERROR_MSG),
        ConsoleLevel::Warn => (palette::LOG_WARNING, palette::LOG_WARNING_MSG),
        ConsoleLevel::Info => (palette::LOG_INFO, palette::LOG_INFO_MSG),
        ConsoleLevel::Log => (palette::LOG_PLAIN, palette::LOG_PLAIN_MSG),
    };
    (
        Style::default().fg(badge).add_modifier(Modifier::BOLD),
        Style::default().fg(message),
    )
}

// --- Block builders ---
pub fn glass_block(focused: bool) -> Block<'static> {
    frame_block(FrameBorder::Rounded, focused)
}

/// Bordered block using the configured frame border
pub fn frame_block(border: FrameBorder, focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(border_type(border))
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
}

fn border_type(border: FrameBorder) -> BorderType {
    match border {
        FrameBorder::Rounded => BorderType::Rounded,
        FrameBorder::Plain => BorderType::Plain,
        FrameBorder::Double => BorderType::Double,
    }
}
