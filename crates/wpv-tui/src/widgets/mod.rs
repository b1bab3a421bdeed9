//! Custom widget components
//!
//! Widgets that contain clickable controls take a `&mut HitMap` and record
//! the regions they draw, so mouse clicks resolve against the last frame.

mod code_view;
mod console_pane;
mod fallback;
mod preview_pane;
mod status_bar;
mod toolbar;

pub use code_view::CodeView;
pub use console_pane::ConsolePane;
pub use fallback::FallbackNotice;
pub use preview_pane::PreviewPane;
pub use status_bar::StatusBar;
pub use toolbar::Toolbar;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};
use wpv_app::hit_map::Region;

/// Hit-map region covering a layout rect
pub(crate) fn region_of(rect: Rect) -> Region {
    Region::new(rect.x, rect.y, rect.width, rect.height)
}

/// Draw `text` at `(x, y)` without passing `max_x`; returns the columns used
pub(crate) fn put(buf: &mut Buffer, x: u16, y: u16, text: &str, style: Style, max_x: u16) -> u16 {
    if x >= max_x {
        return 0;
    }
    let (end, _) = buf.set_stringn(x, y, text, usize::from(max_x - x), style);
    end.saturating_sub(x)
}

/// Display width of a string in terminal cells
pub(crate) fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Word-wrap `text` to `width` cells.
///
/// Explicit newlines are kept; words wider than `width` are broken
/// mid-word. Always returns at least one (possibly empty) line.
pub(crate) fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut current = String::new();
        let mut current_width = 0;

        for word in paragraph.split_whitespace() {
            let word_width = display_width(word);
            let needed = if current.is_empty() {
                word_width
            } else {
                current_width + 1 + word_width
            };

            if needed <= width {
                if !current.is_empty() {
                    current.push(' ');
                    current_width += 1;
                }
                current.push_str(word);
                current_width += word_width;
                continue;
            }

            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }

            if word_width <= width {
                current.push_str(word);
                current_width = word_width;
            } else {
                for ch in word.chars() {
                    let ch_width = ch.width().unwrap_or(0);
                    if current_width + ch_width > width && !current.is_empty() {
                        lines.push(std::mem::take(&mut current));
                        current_width = 0;
                    }
                    current.push(ch);
                    current_width += ch_width;
                }
            }
        }
        lines.push(current);
    }

    lines
}
