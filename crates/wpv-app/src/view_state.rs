//! Scroll and focus state shared by the handler layer and the TUI.
//!
//! Content sizes are written during render; handlers only move offsets.

// ─────────────────────────────────────────────────────────────────────────────
// ScrollState
// ─────────────────────────────────────────────────────────────────────────────

/// Vertical scroll position of a line-based pane
#[derive(Debug, Clone)]
pub struct ScrollState {
    /// Index of the first visible line
    pub offset: usize,
    /// Keep the last line in view as content grows
    pub auto_scroll: bool,
    /// Total number of lines (set during render)
    pub total_lines: usize,
    /// Visible lines (set during render)
    pub visible_lines: usize,
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollState {
    pub fn new() -> Self {
        Self {
            offset: 0,
            auto_scroll: false,
            total_lines: 0,
            visible_lines: 0,
        }
    }

    /// State that follows the tail, for the console pane
    pub fn following() -> Self {
        Self {
            auto_scroll: true,
            ..Self::new()
        }
    }

    fn max_offset(&self) -> usize {
        self.total_lines.saturating_sub(self.visible_lines)
    }

    /// Record content and viewport sizes, then clamp the offset
    pub fn update_content_size(&mut self, total_lines: usize, visible_lines: usize) {
        self.total_lines = total_lines;
        self.visible_lines = visible_lines;
        if self.auto_scroll {
            self.offset = self.max_offset();
        } else {
            self.offset = self.offset.min(self.max_offset());
        }
    }

    pub fn scroll_up(&mut self, n: usize) {
        self.offset = self.offset.saturating_sub(n);
        if self.offset < self.max_offset() {
            self.auto_scroll = false;
        }
    }

    pub fn scroll_down(&mut self, n: usize, follow_at_bottom: bool) {
        self.offset = (self.offset + n).min(self.max_offset());
        if follow_at_bottom && self.offset >= self.max_offset() {
            self.auto_scroll = true;
        }
    }

    pub fn page_up(&mut self) {
        self.scroll_up(self.visible_lines.saturating_sub(1).max(1));
    }

    pub fn page_down(&mut self, follow_at_bottom: bool) {
        self.scroll_down(self.visible_lines.saturating_sub(1).max(1), follow_at_bottom);
    }

    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
        self.auto_scroll = false;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.offset = self.max_offset();
    }

    /// Make `line` visible, moving the offset as little as possible
    pub fn ensure_visible(&mut self, line: usize) {
        if self.visible_lines == 0 {
            return;
        }
        if line < self.offset {
            self.offset = line;
        } else if line >= self.offset + self.visible_lines {
            self.offset = line + 1 - self.visible_lines;
        }
    }

    /// Back to the top, keeping the follow setting
    pub fn reset(&mut self) {
        self.offset = 0;
        self.total_lines = 0;
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// PreviewViewState
// ─────────────────────────────────────────────────────────────────────────────

/// Preview pane state: scroll plus keyboard focus among click targets
#[derive(Debug, Clone, Default)]
pub struct PreviewViewState {
    pub scroll: ScrollState,
    /// Index into `Document::targets()`
    pub focused: Option<usize>,
    /// Scroll the focused target into view on the next render
    pub reveal_focus: bool,
}

impl PreviewViewState {
    /// Move focus forward, wrapping; `count` is the number of targets
    pub fn focus_next(&mut self, count: usize) {
        self.focused = match (self.focused, count) {
            (_, 0) => None,
            (None, _) => Some(0),
            (Some(i), n) => Some((i + 1) % n),
        };
        self.reveal_focus = self.focused.is_some();
    }

    /// Move focus backward, wrapping
    pub fn focus_prev(&mut self, count: usize) {
        self.focused = match (self.focused, count) {
            (_, 0) => None,
            (None, n) => Some(n - 1),
            (Some(0), n) => Some(n - 1),
            (Some(i), _) => Some(i - 1),
        };
        self.reveal_focus = self.focused.is_some();
    }

    /// Drop focus that no longer points at a target
    pub fn clamp_focus(&mut self, count: usize) {
        if matches!(self.focused, Some(i) if i >= count) {
            self.focused = None;
        }
    }

    /// Fresh page: top of the document, nothing focused
    pub fn reset(&mut self) {
        self.scroll.reset();
        self.focused = None;
        self.reveal_focus = false;
    }
}
