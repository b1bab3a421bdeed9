//! Console pane widget
//!
//! Shows captured console entries, oldest first, with an optional capture
//! time, a level badge, and the `%c` styles of each segment applied.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{StatefulWidget, Widget},
};
use wpv_app::config::FrameBorder;
use wpv_app::hit_map::{ChromeControl, HitMap, HitTarget, Region};
use wpv_app::view_state::ScrollState;
use wpv_core::ConsoleLog;

use unicode_width::UnicodeWidthChar;

use crate::theme::{css, styles};

use super::{display_width, put, region_of};

const CLEAR_LABEL: &str = " Clear ";
const EMPTY_TEXT: &str = "No console output";

pub struct ConsolePane<'a> {
    entries: &'a [ConsoleLog],
    show_timestamps: bool,
    border: FrameBorder,
    hits: &'a mut HitMap,
}

impl<'a> ConsolePane<'a> {
    pub fn new(entries: &'a [ConsoleLog], hits: &'a mut HitMap) -> Self {
        Self {
            entries,
            show_timestamps: true,
            border: FrameBorder::default(),
            hits,
        }
    }

    pub fn show_timestamps(mut self, show: bool) -> Self {
        self.show_timestamps = show;
        self
    }

    pub fn border(mut self, border: FrameBorder) -> Self {
        self.border = border;
        self
    }

    /// Terminal lines for one entry, wrapped to `width` cells.
    ///
    /// Embedded newlines and wrapped overflow both continue on lines
    /// indented past the timestamp and level badge. Wrapping breaks
    /// anywhere, mid-word included.
    fn entry_lines(&self, entry: &ConsoleLog, width: usize) -> Vec<Line<'static>> {
        let (badge_style, message_style) = styles::console_level(entry.level);

        let mut prefix = Vec::new();
        if self.show_timestamps {
            prefix.push(Span::styled(
                format!("{} ", entry.time_display()),
                styles::text_muted(),
            ));
        }
        prefix.push(Span::styled(
            format!("{:<5} ", entry.level.as_str()),
            badge_style,
        ));
        let indent: usize = prefix.iter().map(|s| display_width(&s.content)).sum();
        let available = width.saturating_sub(indent).max(1);

        let mut lines = Vec::new();
        let mut current = prefix;
        let mut used = 0;

        for part in &entry.parts {
            let style = match &part.style {
                Some(style) => css::style_for(style, message_style),
                None => message_style,
            };
            for (i, piece) in part.text.split('\n').enumerate() {
                if i > 0 {
                    continue_line(&mut lines, &mut current, &mut used, indent);
                }
                let mut run = String::new();
                for ch in piece.replace('\t', "    ").chars() {
                    let ch_width = ch.width().unwrap_or(0);
                    if used > 0 && used + ch_width > available {
                        if !run.is_empty() {
                            current.push(Span::styled(std::mem::take(&mut run), style));
                        }
                        continue_line(&mut lines, &mut current, &mut used, indent);
                    }
                    run.push(ch);
                    used += ch_width;
                }
                if !run.is_empty() {
                    current.push(Span::styled(run, style));
                }
            }
        }
        lines.push(Line::from(current));
        lines
    }
}

/// Close the current line and start an indented continuation
fn continue_line(
    lines: &mut Vec<Line<'static>>,
    current: &mut Vec<Span<'static>>,
    used: &mut usize,
    indent: usize,
) {
    lines.push(Line::from(std::mem::take(current)));
    current.push(Span::raw(" ".repeat(indent)));
    *used = 0;
}

impl StatefulWidget for ConsolePane<'_> {
    type State = ScrollState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let title = format!(" Console ({}) ", self.entries.len());
        let block = styles::frame_block(self.border, false)
            .title(Span::styled(title, styles::accent_bold()));
        let inner = block.inner(area);
        block.render(area, buf);

        self.hits.push(region_of(area), HitTarget::ConsolePane);

        // Clear control sits on the top border, right-aligned
        let label_width = display_width(CLEAR_LABEL) as u16;
        if area.width > label_width + 2 && area.height > 0 {
            let x = area.right() - 1 - label_width;
            let used = put(buf, x, area.y, CLEAR_LABEL, styles::button(), area.right() - 1);
            self.hits.push(
                Region::new(x, area.y, used, 1),
                HitTarget::Chrome(ChromeControl::ClearConsole),
            );
        }

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        if self.entries.is_empty() {
            state.update_content_size(0, usize::from(inner.height));
            put(buf, inner.x + 1, inner.y, EMPTY_TEXT, styles::text_muted(), inner.right());
            return;
        }

        let lines: Vec<Line<'static>> = self
            .entries
            .iter()
            .flat_map(|entry| self.entry_lines(entry, usize::from(inner.width)))
            .collect();
        state.update_content_size(lines.len(), usize::from(inner.height));

        let visible = lines
            .iter()
            .skip(state.offset)
            .take(usize::from(inner.height));
        for (row, line) in visible.enumerate() {
            buf.set_line(inner.x, inner.y + row as u16, line, inner.width);
        }
    }
}
