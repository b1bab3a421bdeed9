//! Failure notice drawn in place of a preview that failed to render

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};
use wpv_app::boundary::{FALLBACK_MESSAGE, FALLBACK_TITLE, TRY_AGAIN_LABEL};
use wpv_app::hit_map::{ChromeControl, HitMap, HitTarget, Region};
use wpv_app::RenderError;

use crate::theme::{palette, styles};

use super::{display_width, put, wrap_text};

/// Horizontally centered notice with the caught error and a retry control
pub struct FallbackNotice<'a> {
    error: &'a RenderError,
    hits: &'a mut HitMap,
}

impl<'a> FallbackNotice<'a> {
    pub fn new(error: &'a RenderError, hits: &'a mut HitMap) -> Self {
        Self { error, hits }
    }
}

impl Widget for FallbackNotice<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let text_width = usize::from(area.width.saturating_sub(4)).max(1);
        let title_style = Style::default()
            .fg(palette::STATUS_RED)
            .add_modifier(Modifier::BOLD);

        let mut lines: Vec<(String, Style)> = vec![
            (format!("⚠ {}", FALLBACK_TITLE), title_style),
            (String::new(), Style::default()),
        ];
        lines.extend(
            wrap_text(FALLBACK_MESSAGE, text_width)
                .into_iter()
                .map(|line| (line, styles::text_secondary())),
        );
        lines.push((String::new(), Style::default()));
        lines.extend(
            wrap_text(&self.error.message, text_width)
                .into_iter()
                .map(|line| (line, styles::text_muted())),
        );
        lines.push((String::new(), Style::default()));

        let mut y = area.y + 1;
        for (text, style) in lines {
            if y >= area.bottom() {
                return;
            }
            put(buf, centered_x(area, &text), y, &text, style, area.right());
            y += 1;
        }

        if y < area.bottom() {
            let label = format!(" {} ", TRY_AGAIN_LABEL);
            let x = centered_x(area, &label);
            let used = put(buf, x, y, &label, styles::button(), area.right());
            self.hits.push(
                Region::new(x, y, used, 1),
                HitTarget::Chrome(ChromeControl::TryAgain),
            );
        }
    }
}

fn centered_x(area: Rect, text: &str) -> u16 {
    let width = u16::try_from(display_width(text)).unwrap_or(u16::MAX);
    area.x + area.width.saturating_sub(width) / 2
}
