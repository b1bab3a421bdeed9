//! Preview content click handling

use crate::document::ClickTarget;
use crate::link::{classify_href, LinkDisposition};
use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

/// Run the click's action handlers innermost first, then apply link
/// interception: internal hrefs navigate the preview, anything else is
/// opened externally, an empty href does nothing.
pub fn handle_content_click(state: &mut AppState, target: ClickTarget) -> UpdateResult {
    for action in &target.actions {
        state.host.dispatch_action(action);
    }
    let requested = state.host.take_navigations();
    let handled = !target.actions.is_empty() || !requested.is_empty();
    state.apply_navigations(requested);

    match classify_href(target.href.as_deref()) {
        LinkDisposition::Internal(path) => {
            state.navigate(path);
            UpdateResult::none()
        }
        LinkDisposition::External(url) => {
            if handled {
                state.render_current();
            }
            tracing::info!("Opening external link {}", url);
            UpdateResult::action(UpdateAction::OpenExternal {
                url,
                browser: state.settings.behavior.browser.clone(),
            })
        }
        LinkDisposition::Ignore => {
            if handled {
                state.render_current();
            }
            UpdateResult::none()
        }
    }
}

/// Resolve the focused target (if any) to a click
pub fn focused_target(state: &AppState) -> Option<ClickTarget> {
    let index = state.preview_view.focused?;
    state.click_targets().into_iter().nth(index)
}
