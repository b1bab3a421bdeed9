//! Status bar widget
//!
//! One line at the bottom: the transient notice when there is one,
//! otherwise key hints for the current mode; history position on the right.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};
use wpv_app::state::{AppState, NoticeKind, UiMode, ViewMode};

use crate::theme::styles;

use super::display_width;

pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Key hints for the current mode
    fn hints(&self) -> &'static str {
        let state = self.state;
        if state.ui_mode == UiMode::AddressInput {
            return "Enter go · Esc cancel · Ctrl+U clear";
        }
        if state.host.boundary().is_failed() {
            return "t try again · r refresh · ←/→ history · c console · q quit";
        }
        match state.view_mode {
            ViewMode::Preview => {
                "Tab focus · Enter open · ←/→ history · r refresh · g address · v code · c console · f fullscreen · q quit"
            }
            ViewMode::Code => "y copy · j/k scroll · v preview · c console · f fullscreen · q quit",
        }
    }

    fn left(&self) -> Span<'static> {
        match &self.state.status {
            Some(notice) => {
                let style = match notice.kind {
                    NoticeKind::Info => styles::status_green(),
                    NoticeKind::Error => styles::status_red(),
                };
                Span::styled(format!(" {}", notice.text), style)
            }
            None => Span::styled(format!(" {}", self.hints()), styles::text_muted()),
        }
    }

    fn right(&self) -> Span<'static> {
        let history = &self.state.history;
        Span::styled(
            format!("{}/{} ", history.index() + 1, history.len()),
            styles::text_secondary(),
        )
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let right = self.right();
        let right_width = display_width(&right.content) as u16;
        let left_width = area.width.saturating_sub(right_width + 1);

        buf.set_line(area.x, area.y, &Line::from(self.left()), left_width);
        if right_width < area.width {
            buf.set_stringn(
                area.right() - right_width,
                area.y,
                &right.content,
                usize::from(right_width),
                right.style,
            );
        }
    }
}
