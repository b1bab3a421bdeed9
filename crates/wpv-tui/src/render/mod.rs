//! Main render/view function (View in TEA pattern)


use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Span;
use ratatui::widgets::Block;
use ratatui::Frame;
use wpv_app::hit_map::HitMap;
use wpv_app::state::{AppState, ViewMode};

use super::{layout, widgets};
use crate::theme::{palette, styles};

/// Render the complete UI (View function in TEA)
///
/// Besides drawing, this records content sizes into the scroll states and
/// rebuilds `state.hit_map` so mouse clicks resolve against this frame.
pub fn view(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();

    // Fill entire terminal with deepest background color
    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let mut hits = std::mem::take(&mut state.hit_map);
    hits.clear();

    let console_percent = state
        .show_console
        .then(|| state.settings.console.effective_height_percent());
    let areas = layout::create(area, console_percent, state.fullscreen);

    if let Some(toolbar) = areas.toolbar {
        frame.render_widget(widgets::Toolbar::new(state, &mut hits), toolbar);
    }

    render_frame(frame, areas.content, state, &mut hits);

    if let Some(console) = areas.console {
        let show_timestamps = state.settings.console.show_timestamps;
        let border = state.settings.ui.border;
        let console_view = &mut state.console_view;
        state.host.logs().with_entries(|entries| {
            let pane = widgets::ConsolePane::new(entries, &mut hits)
                .show_timestamps(show_timestamps)
                .border(border);
            frame.render_stateful_widget(pane, console, console_view);
        });
    }

    if let Some(status) = areas.status {
        frame.render_widget(widgets::StatusBar::new(state), status);
    }

    state.hit_map = hits;
}

/// The preview frame: bordered, titled, holding the document, the failure
/// notice, or the source view
fn render_frame(
    frame: &mut Frame,
    area: Rect,
    state: &mut AppState,
    hits: &mut HitMap,
) {
    let mode = match state.view_mode {
        ViewMode::Preview => "",
        ViewMode::Code => " · source",
    };
    let title = format!(" {}{} ", state.frame_title(), mode);
    let block = styles::frame_block(state.settings.ui.border, state.fullscreen)
        .title(Span::styled(title, styles::accent_bold()));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    match state.view_mode {
        ViewMode::Code => {
            let source = state.source.as_deref();
            frame.render_stateful_widget(
                widgets::CodeView::new(source, hits),
                inner,
                &mut state.code_view,
            );
        }
        ViewMode::Preview => {
            if let Some(error) = state.host.boundary().error() {
                frame.render_widget(widgets::FallbackNotice::new(error, hits), inner);
            } else if let Some(document) = state.host.document() {
                frame.render_stateful_widget(
                    widgets::PreviewPane::new(document, hits),
                    inner,
                    &mut state.preview_view,
                );
            }
        }
    }
}
