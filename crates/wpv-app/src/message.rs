//! Message types for the application (TEA pattern)

use crate::document::ClickTarget;
use crate::input_key::{InputKey, MouseInput};
use crate::state::ViewMode;

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),
    /// Mouse event from terminal
    Mouse(MouseInput),
    /// Tick for periodic updates (status notice expiry)
    Tick,
    /// Quit the application
    Quit,

    // ─────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────
    /// Visit a path, truncating forward history
    Navigate { path: String },
    Back,
    Forward,
    /// Remount the hosted application without touching history
    Refresh,
    /// Clear a caught render failure and render again
    TryAgain,

    // ─────────────────────────────────────────────────────────
    // Address Bar
    // ─────────────────────────────────────────────────────────
    StartAddressInput,
    /// Replace the address bar text while editing
    AddressInput { text: String },
    SubmitAddress,
    CancelAddressInput,

    // ─────────────────────────────────────────────────────────
    // Preview Content
    // ─────────────────────────────────────────────────────────
    /// A click landed on a target in the preview
    ContentClicked { target: ClickTarget },
    /// Move keyboard focus to the next click target
    FocusNext,
    FocusPrev,
    /// Activate the focused click target
    ActivateFocused,

    // ─────────────────────────────────────────────────────────
    // Chrome Controls
    // ─────────────────────────────────────────────────────────
    ToggleViewMode,
    SetViewMode(ViewMode),
    ToggleConsole,
    ClearConsole,
    /// Ask the display to enter or leave fullscreen
    ToggleFullscreen,
    /// The display reports its fullscreen state changed
    FullscreenChanged { active: bool },
    /// Copy the source text to the clipboard
    CopySource,
    SourceCopied,
    CopyFailed { reason: String },

    // ─────────────────────────────────────────────────────────
    // Scrolling
    // ─────────────────────────────────────────────────────────
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    ScrollToTop,
    ScrollToBottom,
    ConsoleScrollUp,
    ConsoleScrollDown,
}
