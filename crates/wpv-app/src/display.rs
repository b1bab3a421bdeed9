//! The display's own fullscreen state.
//!
//! The app never sets its fullscreen flag directly. It asks the display,
//! and the display reports back with `Message::FullscreenChanged` when its
//! state actually changes. A display that refuses fullscreen never reports.

use tracing::debug;

#[derive(Debug, Clone)]
pub struct Display {
    allow_fullscreen: bool,
    fullscreen: bool,
}

impl Display {
    pub fn new(allow_fullscreen: bool) -> Self {
        Self {
            allow_fullscreen,
            fullscreen: false,
        }
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    /// Enter fullscreen. Returns the new state to report, or `None` if the
    /// request was refused or changed nothing.
    pub fn request_fullscreen(&mut self) -> Option<bool> {
        if !self.allow_fullscreen {
            debug!("Display refused fullscreen request");
            return None;
        }
        if self.fullscreen {
            return None;
        }
        self.fullscreen = true;
        Some(true)
    }

    /// Leave fullscreen. Returns the new state to report, if it changed.
    pub fn exit_fullscreen(&mut self) -> Option<bool> {
        if !self.fullscreen {
            return None;
        }
        self.fullscreen = false;
        Some(false)
    }
}
