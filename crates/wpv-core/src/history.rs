//! Navigation history for the preview address bar.
//!
//! Behaves like a browser tab's session history: a list of visited paths
//! and a cursor. Navigating from the middle of the list drops everything
//! after the cursor; there is no redo branch.

use serde::{Deserialize, Serialize};

/// Ordered list of visited paths plus the index of the current one.
///
/// The list is never empty and `index` always points into it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationHistory {
    entries: Vec<String>,
    index: usize,
}

impl NavigationHistory {
    /// Create a history seeded with `initial_path`
    pub fn new(initial_path: impl Into<String>) -> Self {
        Self {
            entries: vec![initial_path.into()],
            index: 0,
        }
    }

    /// Visit `path`, discarding any forward entries.
    ///
    /// The path is not validated; interpreting it is up to the hosted
    /// application.
    pub fn navigate(&mut self, path: impl Into<String>) {
        self.entries.truncate(self.index + 1);
        self.entries.push(path.into());
        self.index = self.entries.len() - 1;
    }

    /// Step back one entry. Returns `false` (and does nothing) at the start.
    pub fn back(&mut self) -> bool {
        if !self.can_go_back() {
            return false;
        }
        self.index -= 1;
        true
    }

    /// Step forward one entry. Returns `false` (and does nothing) at the end.
    pub fn forward(&mut self) -> bool {
        if !self.can_go_forward() {
            return false;
        }
        self.index += 1;
        true
    }

    /// The path at the current index
    pub fn current_path(&self) -> &str {
        &self.entries[self.index]
    }

    pub fn can_go_back(&self) -> bool {
        self.index > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.index + 1 < self.entries.len()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for NavigationHistory {
    fn default() -> Self {
        Self::new("/")
    }
}
