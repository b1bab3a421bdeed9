//! Read-only source view with line numbers and a copy control

use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::StatefulWidget};
use wpv_app::hit_map::{ChromeControl, HitMap, HitTarget, Region};
use wpv_app::state::NO_SOURCE_TEXT;
use wpv_app::view_state::ScrollState;

use crate::theme::{palette, styles};

use super::{display_width, put, region_of};

const COPY_LABEL: &str = " Copy ";

pub struct CodeView<'a> {
    source: Option<&'a str>,
    hits: &'a mut HitMap,
}

impl<'a> CodeView<'a> {
    pub fn new(source: Option<&'a str>, hits: &'a mut HitMap) -> Self {
        Self { source, hits }
    }
}

impl StatefulWidget for CodeView<'_> {
    type State = ScrollState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let Some(source) = self.source else {
            state.update_content_size(0, usize::from(area.height));
            let x = area.x + area.width.saturating_sub(NO_SOURCE_TEXT.len() as u16) / 2;
            let y = area.y + area.height / 2;
            put(buf, x, y, NO_SOURCE_TEXT, styles::text_muted(), area.right());
            return;
        };

        // Top row holds the copy control; code fills the rest
        let toolbar_y = area.y;
        let code_area = Rect {
            y: area.y + 1,
            height: area.height.saturating_sub(1),
            ..area
        };

        let lines: Vec<&str> = source.lines().collect();
        state.update_content_size(lines.len(), usize::from(code_area.height));

        self.hits.push(region_of(code_area), HitTarget::ContentPane);

        let gutter = lines.len().max(1).to_string().len();
        let visible = lines
            .iter()
            .enumerate()
            .skip(state.offset)
            .take(usize::from(code_area.height));

        for (row, (index, line)) in visible.enumerate() {
            let y = code_area.y + row as u16;
            let number = format!("{:>width$} │ ", index + 1, width = gutter);
            let used = put(
                buf,
                code_area.x,
                y,
                &number,
                Style::default().fg(palette::LINE_NUMBER),
                code_area.right(),
            );
            // Tabs would desync cell positions
            let line = line.replace('\t', "    ");
            put(buf, code_area.x + used, y, &line, styles::text_primary(), code_area.right());
        }

        let label_width = display_width(COPY_LABEL) as u16;
        let x = area.right().saturating_sub(label_width).max(area.x);
        let used = put(buf, x, toolbar_y, COPY_LABEL, styles::button(), area.right());
        self.hits.push(
            Region::new(x, toolbar_y, used, 1),
            HitTarget::Chrome(ChromeControl::CopySource),
        );
        put(
            buf,
            area.x,
            toolbar_y,
            &format!("{} lines", lines.len()),
            styles::text_muted(),
            x,
        );
    }
}
