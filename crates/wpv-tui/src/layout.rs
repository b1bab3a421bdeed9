//! Screen layout definitions for the TUI
//!
//! Splits the terminal into the toolbar, the preview frame, the optional
//! console pane and the status line. In fullscreen the toolbar and status
//! line are hidden and the frame (plus console, when open) takes the whole
//! terminal.

use ratatui::layout::{Constraint, Layout, Rect};

/// Toolbar height: top border + control row + bottom border
const TOOLBAR_HEIGHT: u16 = 3;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Navigation and view controls (hidden in fullscreen)
    pub toolbar: Option<Rect>,

    /// Preview frame: rendered document, failure notice or source code
    pub content: Rect,

    /// Console pane when open
    pub console: Option<Rect>,

    /// Key hints and transient notices (hidden in fullscreen)
    pub status: Option<Rect>,
}

/// Create the main screen layout
///
/// # Arguments
/// * `area` - Total screen area
/// * `console_percent` - Console pane height as a percentage of the body, `None` when closed
/// * `fullscreen` - Whether the display is in fullscreen
pub fn create(area: Rect, console_percent: Option<u16>, fullscreen: bool) -> ScreenAreas {
    let (toolbar, body, status) = if fullscreen {
        (None, area, None)
    } else {
        let chunks = Layout::vertical([
            Constraint::Length(TOOLBAR_HEIGHT),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);
        (Some(chunks[0]), chunks[1], Some(chunks[2]))
    };

    let (content, console) = match console_percent {
        Some(percent) => {
            let percent = percent.min(100);
            let chunks = Layout::vertical([
                Constraint::Percentage(100 - percent),
                Constraint::Percentage(percent),
            ])
            .split(body);
            (chunks[0], Some(chunks[1]))
        }
        None => (body, None),
    };

    ScreenAreas {
        toolbar,
        content,
        console,
        status,
    }
}
