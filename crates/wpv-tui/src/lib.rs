//! wpv-tui - Terminal UI for Web Preview
//!
//! This crate provides the ratatui-based terminal interface: the toolbar,
//! the preview frame (rendered document, failure notice, or source code),
//! the console pane, terminal event polling, and the runner loop.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;
