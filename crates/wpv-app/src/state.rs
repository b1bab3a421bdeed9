//! Application state (Model in TEA pattern)

use wpv_core::{prelude::*, NavigationHistory};

use crate::config::Settings;
use crate::console::LogBuffer;
use crate::document::ClickTarget;
use crate::hit_map::HitMap;
use crate::host::PreviewHost;
use crate::view_state::{PreviewViewState, ScrollState};

/// Placeholder shown in the code view when there is no source
pub const NO_SOURCE_TEXT: &str = "No code provided";

/// Ticks a status notice stays visible (50ms per tick)
const NOTICE_TICKS: u16 = 40;

/// Upper bound on navigations an application may chain from one render
const MAX_CHAINED_NAVIGATIONS: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Which content the preview frame shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Preview,
    Code,
}

impl ViewMode {
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Preview => ViewMode::Code,
            ViewMode::Code => ViewMode::Preview,
        }
    }
}

/// Current input mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    #[default]
    Normal,
    /// Editing the address bar
    AddressInput,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// One-line transient feedback in the status bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusNotice {
    pub text: String,
    pub kind: NoticeKind,
    pub ticks_left: u16,
}

/// Complete application state
#[derive(Debug)]
pub struct AppState {
    pub phase: AppPhase,
    pub settings: Settings,

    /// Address bar history
    pub history: NavigationHistory,
    /// Bumped on every refresh to force a fresh application instance
    pub refresh_key: u64,
    pub host: PreviewHost,

    pub view_mode: ViewMode,
    pub show_console: bool,
    /// Mirror of the display's fullscreen state; only the display changes it
    pub fullscreen: bool,
    /// Text shown in the code view
    pub source: Option<String>,

    pub ui_mode: UiMode,
    /// Address bar text while editing
    pub address_input: String,

    pub preview_view: PreviewViewState,
    pub code_view: ScrollState,
    pub console_view: ScrollState,
    /// Click regions from the last frame
    pub hit_map: HitMap,

    pub status: Option<StatusNotice>,
}

impl AppState {
    /// State with default settings and no source text
    pub fn new(host: PreviewHost) -> Self {
        Self::with_settings(Settings::default(), host, None)
    }

    /// Mount `host` and render the initial path from `settings`
    pub fn with_settings(settings: Settings, mut host: PreviewHost, source: Option<String>) -> Self {
        host.mount();

        let mut state = Self {
            phase: AppPhase::Running,
            history: NavigationHistory::new(settings.preview.initial_path.clone()),
            refresh_key: 0,
            host,
            view_mode: ViewMode::Preview,
            show_console: settings.console.show_on_start,
            fullscreen: false,
            source,
            ui_mode: UiMode::Normal,
            address_input: String::new(),
            preview_view: PreviewViewState::default(),
            code_view: ScrollState::new(),
            console_view: ScrollState::following(),
            hit_map: HitMap::default(),
            status: None,
            settings,
        };
        state.render_current();
        state
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    pub fn current_path(&self) -> &str {
        self.history.current_path()
    }

    // ─────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────

    /// Push `path` onto history and render it
    pub fn navigate(&mut self, path: impl Into<String>) {
        let path = path.into();
        debug!("Navigate to {}", path);
        self.history.navigate(path);
        self.preview_view.reset();
        self.render_current();
    }

    /// Returns false at the start of history
    pub fn go_back(&mut self) -> bool {
        if !self.history.back() {
            return false;
        }
        self.preview_view.reset();
        self.render_current();
        true
    }

    /// Returns false at the end of history
    pub fn go_forward(&mut self) -> bool {
        if !self.history.forward() {
            return false;
        }
        self.preview_view.reset();
        self.render_current();
        true
    }

    /// Hard reload: fresh application instance, same history entry
    pub fn refresh(&mut self) {
        self.refresh_key += 1;
        info!("Refreshing preview (key {})", self.refresh_key);
        self.host.remount_application();
        self.preview_view.reset();
        self.render_current();
    }

    /// Clear a caught failure and render again
    pub fn try_again(&mut self) {
        let path = self.history.current_path().to_string();
        self.host.try_again(&path);
        self.follow_navigations();
    }

    /// Render the current path, then follow any navigation the
    /// application requested while rendering.
    pub fn render_current(&mut self) {
        let path = self.history.current_path().to_string();
        self.host.render(&path);
        self.follow_navigations();
    }

    fn follow_navigations(&mut self) {
        let mut remaining = MAX_CHAINED_NAVIGATIONS;
        loop {
            let requested = self.host.take_navigations();
            if requested.is_empty() {
                break;
            }
            if remaining == 0 {
                warn!(
                    "Hosted application kept navigating; stopped at {}",
                    self.history.current_path()
                );
                break;
            }
            remaining -= 1;

            self.apply_navigations(requested);
            let path = self.history.current_path().to_string();
            self.host.render(&path);
        }

        let count = self.host.document().map_or(0, |doc| doc.target_count());
        self.preview_view.clamp_focus(count);
    }

    /// Push requested paths onto history without rendering
    pub(crate) fn apply_navigations(&mut self, paths: Vec<String>) {
        if paths.is_empty() {
            return;
        }
        for path in paths {
            self.history.navigate(path);
        }
        self.preview_view.reset();
    }

    // ─────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────

    pub fn logs(&self) -> &LogBuffer {
        self.host.logs()
    }

    /// Click targets of the document on screen
    pub fn click_targets(&self) -> Vec<ClickTarget> {
        self.host
            .document()
            .map(|doc| doc.targets())
            .unwrap_or_default()
    }

    /// Title on the preview frame
    pub fn frame_title(&self) -> &str {
        if self.settings.ui.frame_title.is_empty() {
            self.host.title()
        } else {
            &self.settings.ui.frame_title
        }
    }

    /// Text for the code view
    pub fn source_text(&self) -> &str {
        self.source.as_deref().unwrap_or(NO_SOURCE_TEXT)
    }

    // ─────────────────────────────────────────────────────────
    // Status Notice
    // ─────────────────────────────────────────────────────────

    pub fn set_notice(&mut self, text: impl Into<String>, kind: NoticeKind) {
        self.status = Some(StatusNotice {
            text: text.into(),
            kind,
            ticks_left: NOTICE_TICKS,
        });
    }

    /// Count down and expire the status notice
    pub fn tick(&mut self) {
        if let Some(notice) = self.status.as_mut() {
            notice.ticks_left = notice.ticks_left.saturating_sub(1);
            if notice.ticks_left == 0 {
                self.status = None;
            }
        }
    }
}
