//! Tests for handler module

use super::*;
use crate::console::Console;
use crate::demo::DemoApp;
use crate::display::Display;
use crate::document::{ClickTarget, Document, Node};
use crate::hit_map::{ChromeControl, HitTarget, Region};
use crate::host::PreviewHost;
use crate::hosted::{AppContext, HostedApplication, RenderError};
use crate::input_key::{InputKey, MouseInput};
use crate::message::Message;
use crate::state::{AppState, NoticeKind, UiMode, ViewMode, NO_SOURCE_TEXT};
use wpv_core::ConsoleLevel;

fn demo_host() -> PreviewHost {
    PreviewHost::new(
        Console::new(),
        Box::new(|| Box::new(DemoApp::new()) as Box<dyn HostedApplication>),
    )
}

fn demo_state() -> AppState {
    AppState::new(demo_host())
}

/// Run a message and any follow-ups, returning the last action produced
fn run(state: &mut AppState, message: Message) -> Option<UpdateAction> {
    let mut msg = Some(message);
    let mut action = None;
    while let Some(m) = msg {
        let result = update(state, m);
        if result.action.is_some() {
            action = result.action;
        }
        msg = result.message;
    }
    action
}

fn log_texts(state: &AppState) -> Vec<String> {
    state.logs().snapshot().iter().map(|l| l.text()).collect()
}

fn click(state: &mut AppState, target: ClickTarget) -> Option<UpdateAction> {
    run(state, Message::ContentClicked { target })
}

/// Application whose `/old` page redirects to `/new` while rendering
struct Redirecting;

impl HostedApplication for Redirecting {
    fn title(&self) -> &str {
        "Redirecting"
    }

    fn render(&mut self, path: &str, ctx: &mut AppContext<'_>) -> Result<Document, RenderError> {
        match path {
            "/old" => ctx.navigate("/new"),
            "/loop" => ctx.navigate("/loop"),
            _ => {}
        }
        Ok(Document::new(vec![Node::text(path)]))
    }
}

fn redirecting_state() -> AppState {
    AppState::new(PreviewHost::new(
        Console::new(),
        Box::new(|| Box::new(Redirecting) as Box<dyn HostedApplication>),
    ))
}

// ─────────────────────────────────────────────────────────
// Startup / Quit
// ─────────────────────────────────────────────────────────

#[test]
fn test_initial_state_renders_initial_path() {
    let state = demo_state();
    assert_eq!(state.current_path(), "/");
    assert!(state.host.is_mounted());
    assert!(state.host.document().is_some());
    assert_eq!(state.view_mode, ViewMode::Preview);
    assert!(!state.show_console);
    assert!(!state.fullscreen);
}

#[test]
fn test_mount_log_is_captured() {
    let state = demo_state();
    let logs = state.logs().snapshot();
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].level, ConsoleLevel::Info);
    let parts = &logs[0].parts;
    assert_eq!(parts.len(), 3);
    assert_eq!(parts[0].text, " Preview ");
    assert!(parts[0].style.is_some());
    assert_eq!(parts[1].text, " mounted at ");
    assert_eq!(parts[1].style.as_deref(), Some("color: inherit"));
    assert_eq!(parts[2].text, "/");
    assert_eq!(parts[2].style, None);
}

#[test]
fn test_quit_message_sets_quitting_phase() {
    let mut state = demo_state();
    assert!(!state.should_quit());
    update(&mut state, Message::Quit);
    assert!(state.should_quit());
}

#[test]
fn test_q_and_ctrl_c_quit() {
    let state = demo_state();
    assert_eq!(handle_key(&state, InputKey::Char('q')), Some(Message::Quit));
    assert_eq!(handle_key(&state, InputKey::CharCtrl('c')), Some(Message::Quit));
}

// ─────────────────────────────────────────────────────────
// Navigation
// ─────────────────────────────────────────────────────────

#[test]
fn test_navigate_back_forward() {
    let mut state = demo_state();
    run(&mut state, Message::Navigate { path: "/about".into() });
    assert_eq!(state.current_path(), "/about");
    assert!(state.history.can_go_back());

    run(&mut state, Message::Back);
    assert_eq!(state.current_path(), "/");
    assert!(state.history.can_go_forward());

    run(&mut state, Message::Forward);
    assert_eq!(state.current_path(), "/about");
}

#[test]
fn test_navigate_from_middle_truncates_forward_entries() {
    let mut state = demo_state();
    for path in ["/a", "/b"] {
        run(&mut state, Message::Navigate { path: path.into() });
    }
    run(&mut state, Message::Back);
    run(&mut state, Message::Navigate { path: "/d".into() });

    assert_eq!(state.history.entries(), ["/", "/a", "/d"]);
    assert_eq!(state.history.index(), 2);
    assert!(!state.history.can_go_forward());
}

#[test]
fn test_back_at_start_and_forward_at_end_are_noops() {
    let mut state = demo_state();
    let before = state.history.clone();
    run(&mut state, Message::Back);
    run(&mut state, Message::Forward);
    assert_eq!(state.history, before);
}

#[test]
fn test_arrow_keys_map_to_history() {
    let state = demo_state();
    assert_eq!(handle_key(&state, InputKey::Left), Some(Message::Back));
    assert_eq!(handle_key(&state, InputKey::Right), Some(Message::Forward));
    assert_eq!(handle_key(&state, InputKey::Char('r')), Some(Message::Refresh));
}

#[test]
fn test_unknown_path_renders_not_found() {
    let mut state = demo_state();
    run(&mut state, Message::Navigate { path: "/quiz/9".into() });
    let doc = state.host.document().unwrap();
    assert_eq!(doc.nodes[0], Node::heading("Page Not Found"));
}

#[test]
fn test_refresh_keeps_history_and_bumps_key() {
    let mut state = demo_state();
    run(&mut state, Message::Navigate { path: "/about".into() });
    let history = state.history.clone();

    run(&mut state, Message::Refresh);

    assert_eq!(state.history, history);
    assert_eq!(state.refresh_key, 1);
    assert_eq!(state.current_path(), "/about");
    assert!(state.host.document().is_some());
}

#[test]
fn test_render_time_navigation_is_followed() {
    let mut state = redirecting_state();
    run(&mut state, Message::Navigate { path: "/old".into() });
    assert_eq!(state.history.entries(), ["/", "/old", "/new"]);
    assert_eq!(
        state.host.document().map(|d| d.nodes[0].clone()),
        Some(Node::text("/new"))
    );
}

#[test]
fn test_navigation_loop_is_cut_off() {
    let mut state = redirecting_state();
    run(&mut state, Message::Navigate { path: "/loop".into() });
    assert_eq!(state.current_path(), "/loop");
    assert!(state.history.len() < 40);
}

// ─────────────────────────────────────────────────────────
// Content Clicks
// ─────────────────────────────────────────────────────────

#[test]
fn test_internal_link_navigates() {
    let mut state = demo_state();
    let action = click(&mut state, ClickTarget::link("/quiz/2"));
    assert_eq!(action, None);
    assert_eq!(state.current_path(), "/quiz/2");
}

#[test]
fn test_fragment_link_navigates() {
    let mut state = demo_state();
    click(&mut state, ClickTarget::link("#top"));
    assert_eq!(state.current_path(), "#top");
}

#[test]
fn test_external_link_is_left_to_browser() {
    let mut state = demo_state();
    state.settings.behavior.browser = "firefox".into();

    let action = click(&mut state, ClickTarget::link("https://example.com"));

    assert_eq!(
        action,
        Some(UpdateAction::OpenExternal {
            url: "https://example.com".into(),
            browser: "firefox".into(),
        })
    );
    assert_eq!(state.history.len(), 1);
}

#[test]
fn test_empty_href_does_nothing() {
    let mut state = demo_state();
    let action = click(&mut state, ClickTarget::link(""));
    assert_eq!(action, None);
    assert_eq!(state.history.len(), 1);
}

#[test]
fn test_button_action_logs_to_console() {
    let mut state = demo_state();
    click(&mut state, ClickTarget::action("primary"));
    click(&mut state, ClickTarget::action("secondary"));

    let texts = log_texts(&state);
    assert!(texts.contains(&"Primary action clicked".to_string()));
    assert!(texts.contains(&"Secondary action clicked".to_string()));
}

#[test]
fn test_action_runs_before_link_navigation() {
    let mut state = demo_state();
    run(&mut state, Message::Navigate { path: "/missing".into() });

    click(
        &mut state,
        ClickTarget {
            href: Some("/".into()),
            actions: vec!["home".into()],
        },
    );

    assert_eq!(state.current_path(), "/");
    assert_eq!(log_texts(&state).last().map(String::as_str), Some("Going home"));
}

#[test]
fn test_focus_and_activate_clicks_target() {
    let mut state = demo_state();
    run(&mut state, Message::FocusNext);
    assert_eq!(state.preview_view.focused, Some(0));

    run(&mut state, Message::ActivateFocused);
    assert!(log_texts(&state).contains(&"Primary action clicked".to_string()));
}

#[test]
fn test_focus_prev_wraps_to_last_target() {
    let mut state = demo_state();
    run(&mut state, Message::FocusPrev);
    let last = state.click_targets().len() - 1;
    assert_eq!(state.preview_view.focused, Some(last));
}

#[test]
fn test_navigation_resets_focus() {
    let mut state = demo_state();
    run(&mut state, Message::FocusNext);
    run(&mut state, Message::Navigate { path: "/about".into() });
    assert_eq!(state.preview_view.focused, None);
}

// ─────────────────────────────────────────────────────────
// Failure Boundary
// ─────────────────────────────────────────────────────────

#[test]
fn test_render_failure_shows_fallback_and_logs_error() {
    let mut state = demo_state();
    click(&mut state, ClickTarget::action("crash"));

    assert!(state.host.boundary().is_failed());
    assert!(state.host.document().is_none());
    let logs = state.logs().snapshot();
    let last = logs.last().unwrap();
    assert_eq!(last.level, ConsoleLevel::Error);
    assert!(last.text().starts_with("Preview component error:"));
}

#[test]
fn test_try_again_clears_failure() {
    let mut state = demo_state();
    click(&mut state, ClickTarget::action("crash"));
    assert_eq!(handle_key(&state, InputKey::Char('t')), Some(Message::TryAgain));

    run(&mut state, Message::TryAgain);
    assert!(!state.host.boundary().is_failed());
    assert!(state.host.document().is_some());
}

#[test]
fn test_refresh_resets_boundary_and_rerenders_current_path() {
    let mut state = demo_state();
    run(&mut state, Message::Navigate { path: "/about".into() });
    click(&mut state, ClickTarget::action("crash"));
    // The about page has no crash button, but the action still reaches the app
    assert!(state.host.boundary().is_failed());

    run(&mut state, Message::Refresh);

    assert!(!state.host.boundary().is_failed());
    assert_eq!(state.current_path(), "/about");
    assert_eq!(
        state.host.document().unwrap().nodes[0],
        Node::heading("About")
    );
}

#[test]
fn test_activate_when_failed_means_try_again() {
    let mut state = demo_state();
    click(&mut state, ClickTarget::action("crash"));
    let result = update(&mut state, Message::ActivateFocused);
    assert_eq!(result.message, Some(Message::TryAgain));
}

#[test]
fn test_clicks_ignored_while_failed() {
    let mut state = demo_state();
    click(&mut state, ClickTarget::action("crash"));
    let before = state.logs().len();
    click(&mut state, ClickTarget::action("primary"));
    assert_eq!(state.logs().len(), before);
}

// ─────────────────────────────────────────────────────────
// Chrome Controls
// ─────────────────────────────────────────────────────────

#[test]
fn test_toggle_view_mode() {
    let mut state = demo_state();
    run(&mut state, Message::ToggleViewMode);
    assert_eq!(state.view_mode, ViewMode::Code);
    run(&mut state, Message::ToggleViewMode);
    assert_eq!(state.view_mode, ViewMode::Preview);
    run(&mut state, Message::SetViewMode(ViewMode::Code));
    assert_eq!(state.view_mode, ViewMode::Code);
}

#[test]
fn test_view_toggle_keeps_boundary_and_app_state() {
    let mut state = demo_state();
    click(&mut state, ClickTarget::action("crash"));
    assert!(state.host.boundary().is_failed());
    let key = state.refresh_key;

    run(&mut state, Message::ToggleViewMode);
    run(&mut state, Message::ToggleViewMode);

    assert_eq!(state.view_mode, ViewMode::Preview);
    assert!(state.host.boundary().is_failed());
    assert_eq!(state.refresh_key, key);
}

#[test]
fn test_source_text_placeholder() {
    let state = demo_state();
    assert_eq!(state.source_text(), NO_SOURCE_TEXT);
}

#[test]
fn test_toggle_and_clear_console() {
    let mut state = demo_state();
    run(&mut state, Message::ToggleConsole);
    assert!(state.show_console);
    assert!(!state.logs().is_empty());

    assert_eq!(handle_key(&state, InputKey::Char('x')), Some(Message::ClearConsole));
    run(&mut state, Message::ClearConsole);
    assert!(state.logs().is_empty());

    // Capture is still active after clearing
    click(&mut state, ClickTarget::action("secondary"));
    assert_eq!(state.logs().len(), 1);
}

#[test]
fn test_fullscreen_only_changes_when_display_reports() {
    let mut state = demo_state();
    let action = run(&mut state, Message::ToggleFullscreen);
    assert_eq!(action, Some(UpdateAction::RequestFullscreen));
    assert!(!state.fullscreen);

    run(&mut state, Message::FullscreenChanged { active: true });
    assert!(state.fullscreen);

    let action = run(&mut state, Message::ToggleFullscreen);
    assert_eq!(action, Some(UpdateAction::ExitFullscreen));
    assert_eq!(handle_key(&state, InputKey::Esc), Some(Message::ToggleFullscreen));
}

#[test]
fn test_copy_source() {
    let mut state = AppState::with_settings(
        Default::default(),
        demo_host(),
        Some("fn main() {}".into()),
    );
    let action = run(&mut state, Message::CopySource);
    assert_eq!(
        action,
        Some(UpdateAction::CopyToClipboard {
            text: "fn main() {}".into()
        })
    );

    run(&mut state, Message::SourceCopied);
    assert_eq!(state.status.as_ref().map(|s| s.kind), Some(NoticeKind::Info));
}

#[test]
fn test_copy_without_source_copies_placeholder() {
    let mut state = demo_state();
    assert_eq!(
        run(&mut state, Message::CopySource),
        Some(UpdateAction::CopyToClipboard {
            text: NO_SOURCE_TEXT.into()
        })
    );
}

#[test]
fn test_copy_failure_notice_expires() {
    let mut state = demo_state();
    run(
        &mut state,
        Message::CopyFailed {
            reason: "no display".into(),
        },
    );
    let notice = state.status.clone().unwrap();
    assert_eq!(notice.kind, NoticeKind::Error);
    assert_eq!(notice.text, "Copy failed: no display");

    for _ in 0..notice.ticks_left {
        run(&mut state, Message::Tick);
    }
    assert!(state.status.is_none());
}

#[test]
fn test_copy_key_only_in_code_view() {
    let mut state = demo_state();
    assert_eq!(handle_key(&state, InputKey::Char('y')), None);
    state.view_mode = ViewMode::Code;
    assert_eq!(handle_key(&state, InputKey::Char('y')), Some(Message::CopySource));
}

#[test]
fn test_console_starts_open_from_settings() {
    let mut settings = crate::config::Settings::default();
    settings.console.show_on_start = true;
    settings.preview.initial_path = "/about".into();
    let state = AppState::with_settings(settings, demo_host(), None);
    assert!(state.show_console);
    assert_eq!(state.current_path(), "/about");
}

// ─────────────────────────────────────────────────────────
// Address Bar
// ─────────────────────────────────────────────────────────

#[test]
fn test_address_bar_edit_and_submit() {
    let mut state = demo_state();
    run(&mut state, Message::StartAddressInput);
    assert_eq!(state.ui_mode, UiMode::AddressInput);
    assert_eq!(state.address_input, "/");

    for c in "about".chars() {
        run(&mut state, Message::Key(InputKey::Char(c)));
    }
    run(&mut state, Message::Key(InputKey::Char('x')));
    run(&mut state, Message::Key(InputKey::Backspace));
    assert_eq!(state.address_input, "/about");

    run(&mut state, Message::Key(InputKey::Enter));
    assert_eq!(state.ui_mode, UiMode::Normal);
    assert_eq!(state.current_path(), "/about");
}

#[test]
fn test_address_bar_keys_do_not_trigger_shortcuts() {
    let mut state = demo_state();
    run(&mut state, Message::StartAddressInput);
    assert_eq!(
        handle_key(&state, InputKey::Char('q')),
        Some(Message::AddressInput { text: "/q".into() })
    );
}

#[test]
fn test_address_bar_cancel_and_empty_submit() {
    let mut state = demo_state();
    run(&mut state, Message::StartAddressInput);
    run(&mut state, Message::Key(InputKey::Esc));
    assert_eq!(state.ui_mode, UiMode::Normal);

    run(&mut state, Message::StartAddressInput);
    run(&mut state, Message::Key(InputKey::CharCtrl('u')));
    run(&mut state, Message::Key(InputKey::Enter));
    assert_eq!(state.history.len(), 1);

    run(&mut state, Message::AddressInput { text: "   ".into() });
    run(&mut state, Message::SubmitAddress);
    assert_eq!(state.history.len(), 1);
}

#[test]
fn test_address_bar_submits_path_verbatim() {
    let mut state = demo_state();
    run(&mut state, Message::StartAddressInput);
    run(&mut state, Message::AddressInput { text: "  /padded  ".into() });
    run(&mut state, Message::SubmitAddress);

    assert_eq!(state.current_path(), "  /padded  ");
    assert_eq!(state.history.len(), 2);
}

// ─────────────────────────────────────────────────────────
// Mouse
// ─────────────────────────────────────────────────────────

#[test]
fn test_click_on_content_region() {
    let mut state = demo_state();
    state.hit_map.push(Region::new(0, 0, 80, 20), HitTarget::ContentPane);
    state.hit_map.push(Region::new(2, 5, 10, 1), HitTarget::Content(2));

    let msg = handle_mouse(&state, MouseInput::Click { column: 4, row: 5 });
    assert_eq!(
        msg,
        Some(Message::ContentClicked {
            target: ClickTarget::link("/about")
        })
    );

    run(&mut state, Message::Mouse(MouseInput::Click { column: 4, row: 5 }));
    assert_eq!(state.current_path(), "/about");
}

#[test]
fn test_click_on_chrome_controls() {
    let mut state = demo_state();
    state.hit_map.push(Region::new(0, 0, 3, 1), HitTarget::Chrome(ChromeControl::Back));
    state.hit_map.push(Region::new(10, 0, 3, 1), HitTarget::Chrome(ChromeControl::ToggleConsole));

    assert_eq!(
        handle_mouse(&state, MouseInput::Click { column: 1, row: 0 }),
        Some(Message::Back)
    );
    run(&mut state, Message::Mouse(MouseInput::Click { column: 11, row: 0 }));
    assert!(state.show_console);
    assert_eq!(handle_mouse(&state, MouseInput::Click { column: 50, row: 9 }), None);
}

#[test]
fn test_wheel_scrolls_pane_under_cursor() {
    let mut state = demo_state();
    state.hit_map.push(Region::new(0, 0, 80, 10), HitTarget::ContentPane);
    state.hit_map.push(Region::new(0, 10, 80, 5), HitTarget::ConsolePane);

    assert_eq!(
        handle_mouse(&state, MouseInput::ScrollDown { column: 3, row: 12 }),
        Some(Message::ConsoleScrollDown)
    );
    assert_eq!(
        handle_mouse(&state, MouseInput::ScrollUp { column: 3, row: 2 }),
        Some(Message::ScrollUp)
    );
}

#[test]
fn test_click_outside_address_bar_cancels_editing() {
    let mut state = demo_state();
    state.hit_map.push(Region::new(10, 0, 30, 1), HitTarget::Chrome(ChromeControl::AddressBar));
    run(&mut state, Message::StartAddressInput);

    assert_eq!(handle_mouse(&state, MouseInput::Click { column: 12, row: 0 }), None);
    assert_eq!(
        handle_mouse(&state, MouseInput::Click { column: 5, row: 9 }),
        Some(Message::CancelAddressInput)
    );
}

// ─────────────────────────────────────────────────────────
// Scrolling
// ─────────────────────────────────────────────────────────

#[test]
fn test_scroll_applies_to_visible_content_pane() {
    let mut state = demo_state();
    state.preview_view.scroll.update_content_size(50, 10);
    state.code_view.update_content_size(200, 10);

    run(&mut state, Message::ScrollDown);
    assert_eq!(state.preview_view.scroll.offset, 1);
    assert_eq!(state.code_view.offset, 0);

    state.view_mode = ViewMode::Code;
    run(&mut state, Message::PageDown);
    run(&mut state, Message::ScrollToBottom);
    assert_eq!(state.code_view.offset, 190);
}

#[test]
fn test_console_scroll_requires_open_console() {
    let mut state = demo_state();
    state.console_view.update_content_size(40, 5);
    run(&mut state, Message::ConsoleScrollUp);
    assert_eq!(state.console_view.offset, 35);

    state.show_console = true;
    run(&mut state, Message::ConsoleScrollUp);
    assert_eq!(state.console_view.offset, 34);
    assert!(!state.console_view.auto_scroll);
}

// ─────────────────────────────────────────────────────────
// Process Loop
// ─────────────────────────────────────────────────────────

#[test]
fn test_process_message_delivers_display_answer() {
    tokio_test::block_on(async {
        let (tx, mut rx) = tokio::sync::mpsc::channel(8);
        let mut display = Display::new(true);
        let mut state = demo_state();

        crate::process::process_message(
            &mut state,
            Message::Key(InputKey::Char('f')),
            &tx,
            &mut display,
        );
        assert!(!state.fullscreen);

        let answer = rx.recv().await.unwrap();
        assert_eq!(answer, Message::FullscreenChanged { active: true });
        crate::process::process_message(&mut state, answer, &tx, &mut display);
        assert!(state.fullscreen);
    });
}
