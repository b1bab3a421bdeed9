//! Preview pane: the hosted application's rendered document

mod layout;


use layout::DocumentLayout;

use ratatui::{buffer::Buffer, layout::Rect, widgets::StatefulWidget};
use wpv_app::document::Document;
use wpv_app::hit_map::{HitMap, HitTarget, Region};
use wpv_app::view_state::PreviewViewState;

use crate::theme::styles;

use super::{put, region_of};

/// Draws a laid-out document and records a click region per target
pub struct PreviewPane<'a> {
    document: &'a Document,
    hits: &'a mut HitMap,
}

impl<'a> PreviewPane<'a> {
    pub fn new(document: &'a Document, hits: &'a mut HitMap) -> Self {
        Self { document, hits }
    }
}

impl StatefulWidget for PreviewPane<'_> {
    type State = PreviewViewState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let layout = DocumentLayout::build(self.document, area.width);
        state
            .scroll
            .update_content_size(layout.len(), usize::from(area.height));

        if std::mem::take(&mut state.reveal_focus) {
            if let Some(line) = state.focused.and_then(|i| layout.line_of_target(i)) {
                state.scroll.ensure_visible(line);
            }
        }

        self.hits.push(region_of(area), HitTarget::ContentPane);

        let visible = layout
            .lines
            .iter()
            .skip(state.scroll.offset)
            .take(usize::from(area.height));

        for (row, line) in visible.enumerate() {
            let y = area.y + row as u16;
            let mut x = area.x;

            for segment in &line.segments {
                let style = if segment.is_focused(state.focused) {
                    styles::focused_selected()
                } else {
                    segment.style
                };
                let used = put(buf, x, y, &segment.text, style, area.right());
                if let Some(target) = segment.target {
                    self.hits
                        .push(Region::new(x, y, used, 1), HitTarget::Content(target));
                }
                x += used;
                if x >= area.right() {
                    break;
                }
            }
        }
    }
}
