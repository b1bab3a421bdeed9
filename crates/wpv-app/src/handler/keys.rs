//! Key event handlers for different UI modes

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, UiMode, ViewMode};

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match state.ui_mode {
        UiMode::Normal => handle_key_normal(state, key),
        UiMode::AddressInput => handle_key_address_input(state, key),
    }
}

/// Handle key events while editing the address bar
fn handle_key_address_input(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc => Some(Message::CancelAddressInput),
        InputKey::Enter => Some(Message::SubmitAddress),

        InputKey::Backspace => {
            let mut text = state.address_input.clone();
            text.pop();
            Some(Message::AddressInput { text })
        }

        // Clear all input
        InputKey::CharCtrl('u') => Some(Message::AddressInput {
            text: String::new(),
        }),

        InputKey::Char(c) => {
            let mut text = state.address_input.clone();
            text.push(c);
            Some(Message::AddressInput { text })
        }

        // Force quit even while editing
        InputKey::CharCtrl('c') => Some(Message::Quit),

        _ => None,
    }
}

/// Handle key events in normal mode
fn handle_key_normal(state: &AppState, key: InputKey) -> Option<Message> {
    let failed = state.host.boundary().is_failed();
    let preview = state.view_mode == ViewMode::Preview;

    match key {
        InputKey::Char('q') | InputKey::CharCtrl('c') => Some(Message::Quit),

        // Esc leaves fullscreen the way a browser does
        InputKey::Esc if state.fullscreen => Some(Message::ToggleFullscreen),

        // ─────────────────────────────────────────────────────────
        // Navigation
        // ─────────────────────────────────────────────────────────
        InputKey::Left | InputKey::Char('H') => Some(Message::Back),
        InputKey::Right | InputKey::Char('L') => Some(Message::Forward),
        InputKey::Char('r') | InputKey::F(5) => Some(Message::Refresh),
        InputKey::Char('g') | InputKey::CharCtrl('l') => Some(Message::StartAddressInput),

        // ─────────────────────────────────────────────────────────
        // Chrome Controls
        // ─────────────────────────────────────────────────────────
        InputKey::Char('v') => Some(Message::ToggleViewMode),
        InputKey::Char('c') => Some(Message::ToggleConsole),
        InputKey::Char('x') if state.show_console => Some(Message::ClearConsole),
        InputKey::Char('f') | InputKey::F(11) => Some(Message::ToggleFullscreen),
        InputKey::Char('y') if !preview => Some(Message::CopySource),

        // ─────────────────────────────────────────────────────────
        // Preview Content
        // ─────────────────────────────────────────────────────────
        InputKey::Char('t') if failed => Some(Message::TryAgain),
        InputKey::Tab if preview => Some(Message::FocusNext),
        InputKey::BackTab if preview => Some(Message::FocusPrev),
        InputKey::Enter if preview => Some(Message::ActivateFocused),

        // ─────────────────────────────────────────────────────────
        // Scrolling
        // ─────────────────────────────────────────────────────────
        InputKey::Char('j') | InputKey::Down => Some(Message::ScrollDown),
        InputKey::Char('k') | InputKey::Up => Some(Message::ScrollUp),
        InputKey::PageDown => Some(Message::PageDown),
        InputKey::PageUp => Some(Message::PageUp),
        InputKey::Home => Some(Message::ScrollToTop),
        InputKey::End => Some(Message::ScrollToBottom),
        InputKey::Char('J') => Some(Message::ConsoleScrollDown),
        InputKey::Char('K') => Some(Message::ConsoleScrollUp),

        _ => None,
    }
}
