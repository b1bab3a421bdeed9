//! Abstract input events, independent of the terminal library.
//!
//! The TUI converts crossterm key and mouse events into these types so that
//! wpv-app never depends on crossterm.

/// Abstract key event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputKey {
    /// Regular character key (a-z, 0-9, symbols)
    Char(char),
    /// Character with Ctrl modifier (Ctrl+l, Ctrl+c, etc.)
    CharCtrl(char),

    // Navigation
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,

    // Action keys
    Enter,
    Esc,
    Tab,
    /// Shift+Tab
    BackTab,
    Backspace,
    Delete,

    /// Function key (F1-F12)
    F(u8),
}

/// Mouse events the preview reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseInput {
    /// Left button pressed at a cell
    Click { column: u16, row: u16 },
    /// Wheel scrolled up at a cell
    ScrollUp { column: u16, row: u16 },
    /// Wheel scrolled down at a cell
    ScrollDown { column: u16, row: u16 },
}
