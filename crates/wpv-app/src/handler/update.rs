//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::{AppPhase, AppState, NoticeKind, UiMode, ViewMode};
use tracing::{debug, warn};

use super::{content, keys::handle_key, mouse::handle_mouse, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Mouse(mouse) => match handle_mouse(state, mouse) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Tick => {
            state.tick();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Navigation
        // ─────────────────────────────────────────────────────────
        Message::Navigate { path } => {
            state.navigate(path);
            UpdateResult::none()
        }

        Message::Back => {
            if !state.go_back() {
                debug!("Back ignored: already at first entry");
            }
            UpdateResult::none()
        }

        Message::Forward => {
            if !state.go_forward() {
                debug!("Forward ignored: already at last entry");
            }
            UpdateResult::none()
        }

        Message::Refresh => {
            state.refresh();
            UpdateResult::none()
        }

        Message::TryAgain => {
            state.try_again();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Address Bar
        // ─────────────────────────────────────────────────────────
        Message::StartAddressInput => {
            state.address_input = state.current_path().to_string();
            state.ui_mode = UiMode::AddressInput;
            UpdateResult::none()
        }

        Message::AddressInput { text } => {
            state.address_input = text;
            UpdateResult::none()
        }

        Message::SubmitAddress => {
            state.ui_mode = UiMode::Normal;
            let path = std::mem::take(&mut state.address_input);
            if path.trim().is_empty() {
                UpdateResult::none()
            } else {
                UpdateResult::message(Message::Navigate { path })
            }
        }

        Message::CancelAddressInput => {
            state.ui_mode = UiMode::Normal;
            state.address_input.clear();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Preview Content
        // ─────────────────────────────────────────────────────────
        Message::ContentClicked { target } => content::handle_content_click(state, target),

        Message::FocusNext => {
            if state.view_mode == ViewMode::Preview {
                let count = state.click_targets().len();
                state.preview_view.focus_next(count);
            }
            UpdateResult::none()
        }

        Message::FocusPrev => {
            if state.view_mode == ViewMode::Preview {
                let count = state.click_targets().len();
                state.preview_view.focus_prev(count);
            }
            UpdateResult::none()
        }

        Message::ActivateFocused => {
            if state.host.boundary().is_failed() {
                return UpdateResult::message(Message::TryAgain);
            }
            match content::focused_target(state) {
                Some(target) => UpdateResult::message(Message::ContentClicked { target }),
                None => UpdateResult::none(),
            }
        }

        // ─────────────────────────────────────────────────────────
        // Chrome Controls
        // ─────────────────────────────────────────────────────────
        Message::ToggleViewMode => {
            state.view_mode = state.view_mode.toggled();
            UpdateResult::none()
        }

        Message::SetViewMode(mode) => {
            state.view_mode = mode;
            UpdateResult::none()
        }

        Message::ToggleConsole => {
            state.show_console = !state.show_console;
            UpdateResult::none()
        }

        Message::ClearConsole => {
            state.logs().clear();
            state.console_view.reset();
            state.console_view.auto_scroll = true;
            UpdateResult::none()
        }

        Message::ToggleFullscreen => {
            if state.fullscreen {
                UpdateResult::action(UpdateAction::ExitFullscreen)
            } else {
                UpdateResult::action(UpdateAction::RequestFullscreen)
            }
        }

        Message::FullscreenChanged { active } => {
            state.fullscreen = active;
            UpdateResult::none()
        }

        // Copies exactly what the code view shows, placeholder included
        Message::CopySource => UpdateResult::action(UpdateAction::CopyToClipboard {
            text: state.source_text().to_string(),
        }),

        Message::SourceCopied => {
            state.set_notice("Copied to clipboard", NoticeKind::Info);
            UpdateResult::none()
        }

        Message::CopyFailed { reason } => {
            warn!("Copy to clipboard failed: {}", reason);
            state.set_notice(format!("Copy failed: {}", reason), NoticeKind::Error);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Scrolling
        // ─────────────────────────────────────────────────────────
        Message::ScrollUp => {
            content_scroll(state).scroll_up(1);
            UpdateResult::none()
        }
        Message::ScrollDown => {
            content_scroll(state).scroll_down(1, false);
            UpdateResult::none()
        }
        Message::PageUp => {
            content_scroll(state).page_up();
            UpdateResult::none()
        }
        Message::PageDown => {
            content_scroll(state).page_down(false);
            UpdateResult::none()
        }
        Message::ScrollToTop => {
            content_scroll(state).scroll_to_top();
            UpdateResult::none()
        }
        Message::ScrollToBottom => {
            content_scroll(state).scroll_to_bottom();
            UpdateResult::none()
        }

        Message::ConsoleScrollUp => {
            if state.show_console {
                state.console_view.scroll_up(1);
            }
            UpdateResult::none()
        }
        Message::ConsoleScrollDown => {
            if state.show_console {
                state.console_view.scroll_down(1, true);
            }
            UpdateResult::none()
        }
    }
}

/// Scroll state of whichever content pane is showing
fn content_scroll(state: &mut AppState) -> &mut crate::view_state::ScrollState {
    match state.view_mode {
        ViewMode::Preview => &mut state.preview_view.scroll,
        ViewMode::Code => &mut state.code_view,
    }
}
