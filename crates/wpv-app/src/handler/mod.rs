//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers for UI modes
//! - `mouse`: Mouse click and wheel handling
//! - `content`: Preview content clicks (actions, then link interception)

pub(crate) mod content;
pub(crate) mod keys;
pub(crate) mod mouse;
pub(crate) mod update;

#[cfg(test)]
mod tests;

// Re-export main entry point
pub use update::update;

#[cfg(test)]
pub(crate) use keys::handle_key;
#[cfg(test)]
pub(crate) use mouse::handle_mouse;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Ask the display to enter fullscreen
    RequestFullscreen,
    /// Ask the display to leave fullscreen
    ExitFullscreen,
    /// Put text on the system clipboard
    CopyToClipboard { text: String },
    /// Open a non-preview link with the system browser
    OpenExternal { url: String, browser: String },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<crate::message::Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: crate::message::Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
