//! wpv-app - Application state and orchestration for Web Preview
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management, the preview host (console capture, failure boundary, link
//! interception), configuration loading, and the bundled demo page.

pub mod actions;
pub mod boundary;
pub mod config;
pub mod console;
pub mod demo;
pub mod diagnostics;
pub mod display;
pub mod document;
pub mod handler;
pub mod hit_map;
pub mod host;
pub mod hosted;
pub mod input_key;
pub mod link;
pub mod message;
pub mod process;
pub mod signals;
pub mod state;
pub mod view_state;

// Re-export primary types
pub use console::{Console, ConsoleCapture, ConsoleSink, LogBuffer};
pub use display::Display;
pub use document::{ClickTarget, Document, Node};
pub use handler::{UpdateAction, UpdateResult};
pub use host::PreviewHost;
pub use hosted::{AppContext, AppFactory, ErrorInfo, HostedApplication, RenderError};
pub use message::Message;
pub use state::AppState;
