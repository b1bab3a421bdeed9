//! Toolbar widget
//!
//! Back/forward/refresh, the address bar, and the view, console and
//! fullscreen toggles, all clickable.

use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};
use wpv_app::hit_map::{ChromeControl, HitMap, HitTarget, Region};
use wpv_app::state::{AppState, UiMode, ViewMode};

use crate::theme::{palette, styles};

use super::{display_width, put};

/// Narrowest the address bar is allowed to get before toggles are dropped
const MIN_ADDRESS_WIDTH: u16 = 12;

/// Cursor drawn at the end of the address while editing
const CURSOR: &str = "▏";

pub struct Toolbar<'a> {
    state: &'a AppState,
    hits: &'a mut HitMap,
}

/// A clickable run of styled labels
struct Control {
    parts: Vec<(&'static str, Style)>,
    target: ChromeControl,
}

impl Control {
    fn width(&self) -> u16 {
        self.parts
            .iter()
            .map(|(text, _)| display_width(text) as u16)
            .sum()
    }
}

impl<'a> Toolbar<'a> {
    pub fn new(state: &'a AppState, hits: &'a mut HitMap) -> Self {
        Self { state, hits }
    }

    fn toggle_style(active: bool) -> Style {
        if active {
            styles::focused_selected()
        } else {
            styles::text_secondary()
        }
    }

    fn right_controls(&self) -> Vec<Control> {
        let code = self.state.view_mode == ViewMode::Code;
        vec![
            Control {
                parts: vec![
                    (" Preview ", Self::toggle_style(!code)),
                    (" Code ", Self::toggle_style(code)),
                ],
                target: ChromeControl::ToggleView,
            },
            Control {
                parts: vec![(" Console ", Self::toggle_style(self.state.show_console))],
                target: ChromeControl::ToggleConsole,
            },
            Control {
                parts: vec![(" Fullscreen ", Self::toggle_style(self.state.fullscreen))],
                target: ChromeControl::ToggleFullscreen,
            },
        ]
    }

    fn draw_control(&mut self, buf: &mut Buffer, control: &Control, x: u16, y: u16, max_x: u16) -> u16 {
        let mut cursor = x;
        for (text, style) in &control.parts {
            cursor += put(buf, cursor, y, text, *style, max_x);
        }
        let used = cursor - x;
        self.hits
            .push(Region::new(x, y, used, 1), HitTarget::Chrome(control.target));
        used
    }

    fn draw_address(&mut self, buf: &mut Buffer, x: u16, y: u16, width: u16) {
        let editing = self.state.ui_mode == UiMode::AddressInput;
        let (text, style) = if editing {
            (
                format!("{}{}", self.state.address_input, CURSOR),
                styles::text_primary().bg(palette::FIELD_BG),
            )
        } else {
            (
                self.state.current_path().to_string(),
                styles::text_secondary().bg(palette::FIELD_BG),
            )
        };

        // Keep the end of long addresses (and the cursor) in view
        let inner_width = usize::from(width.saturating_sub(2));
        let mut shown: &str = &text;
        while display_width(shown) > inner_width {
            let mut chars = shown.chars();
            chars.next();
            shown = chars.as_str();
        }

        let mut line = format!(" {}", shown);
        let pad = usize::from(width).saturating_sub(display_width(&line));
        line.push_str(&" ".repeat(pad));
        put(buf, x, y, &line, style, x + width);

        self.hits.push(
            Region::new(x, y, width, 1),
            HitTarget::Chrome(ChromeControl::AddressBar),
        );
    }
}

impl Widget for Toolbar<'_> {
    fn render(mut self, area: Rect, buf: &mut Buffer) {
        let state = self.state;
        let editing = state.ui_mode == UiMode::AddressInput;
        let block = styles::glass_block(editing);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }
        let y = inner.y;

        let history = &state.history;
        let left = [
            Control {
                parts: vec![(" ← ", styles::control(history.can_go_back()))],
                target: ChromeControl::Back,
            },
            Control {
                parts: vec![(" → ", styles::control(history.can_go_forward()))],
                target: ChromeControl::Forward,
            },
            Control {
                parts: vec![(" ↻ ", styles::control(true))],
                target: ChromeControl::Refresh,
            },
        ];

        let mut x = inner.x;
        for control in &left {
            x += self.draw_control(buf, control, x, y, inner.right());
        }
        x = (x + 1).min(inner.right());

        // Drop toggles from the end until the address bar has room
        let mut right = self.right_controls();
        let right_width = |controls: &[Control]| -> u16 {
            controls.iter().map(|c| c.width() + 1).sum()
        };
        while !right.is_empty()
            && inner.right().saturating_sub(x).saturating_sub(right_width(&right)) < MIN_ADDRESS_WIDTH
        {
            right.pop();
        }

        let right_start = inner.right().saturating_sub(right_width(&right));
        let address_width = right_start.saturating_sub(x).saturating_sub(1);
        if address_width > 0 {
            self.draw_address(buf, x, y, address_width);
        }

        let mut rx = right_start;
        for control in &right {
            rx += 1;
            rx += self.draw_control(buf, control, rx, y, inner.right());
        }
    }
}
