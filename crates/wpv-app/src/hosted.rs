//! Contract between the preview host and the application it previews.

use serde::Serialize;

use crate::console::Console;
use crate::document::Document;

/// Error raised by a hosted application while rendering or handling an action
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct RenderError {
    pub message: String,
}

impl RenderError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<wpv_core::Error> for RenderError {
    fn from(e: wpv_core::Error) -> Self {
        Self::new(e.to_string())
    }
}

/// Where a failure happened, passed along with the error to diagnostics
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorInfo {
    /// Title of the hosted application
    pub application: String,
    /// Path being rendered when the failure happened
    pub path: String,
    /// Lifecycle step that failed; always `render`, since action handler
    /// errors never reach the boundary
    pub phase: String,
}

/// Handles given to a hosted application for one call.
pub struct AppContext<'a> {
    console: &'a Console,
    navigations: &'a mut Vec<String>,
}

impl<'a> AppContext<'a> {
    pub fn new(console: &'a Console, navigations: &'a mut Vec<String>) -> Self {
        Self {
            console,
            navigations,
        }
    }

    /// Console shared with the host
    pub fn console(&self) -> &Console {
        self.console
    }

    /// Ask the host to navigate to `path` once this call returns
    pub fn navigate(&mut self, path: impl Into<String>) {
        self.navigations.push(path.into());
    }
}

/// An application rendered inside the preview.
///
/// The host creates a fresh instance on every mount and on every refresh,
/// so any state the application keeps lives exactly as long as one mount.
pub trait HostedApplication {
    /// Name shown in the preview frame
    fn title(&self) -> &str;

    /// Render the page for `path`.
    ///
    /// Returning an error trips the failure boundary.
    fn render(&mut self, path: &str, ctx: &mut AppContext<'_>) -> Result<Document, RenderError>;

    /// Run the handler bound to `action`.
    ///
    /// Called before any link navigation for the same click. Unknown actions
    /// are ignored.
    fn on_action(&mut self, action: &str, ctx: &mut AppContext<'_>) -> Result<(), RenderError> {
        let _ = (action, ctx);
        Ok(())
    }
}

/// Builds a new hosted application instance
pub type AppFactory = Box<dyn Fn() -> Box<dyn HostedApplication>>;
