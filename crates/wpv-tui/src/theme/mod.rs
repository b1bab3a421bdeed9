//! Centralized theme for the preview TUI.
//!
//! This module provides:
//! - `palette`: Raw color constants
//! - `styles`: Semantic style builder functions
//! - `css`: Maps parsed inline style declarations onto terminal styles

pub mod css;
pub mod palette;
pub mod styles;
