//! The preview host: mounts a hosted application, captures its console
//! output, and isolates render failures behind a boundary.

use wpv_core::{console_args, prelude::*, ConsoleArg};

use crate::boundary::BoundaryState;
use crate::console::{Console, ConsoleCapture, LogBuffer};
use crate::diagnostics::{Diagnostics, TracingDiagnostics};
use crate::document::Document;
use crate::hosted::{AppContext, AppFactory, ErrorInfo, HostedApplication, RenderError};

/// Phase name reported when `render` fails
const RENDER_PHASE: &str = "render";

pub struct PreviewHost {
    factory: AppFactory,
    console: Console,
    logs: LogBuffer,
    diagnostics: Box<dyn Diagnostics>,
    app: Option<Box<dyn HostedApplication>>,
    capture: Option<ConsoleCapture>,
    boundary: BoundaryState,
    document: Option<Document>,
    navigations: Vec<String>,
}

impl std::fmt::Debug for PreviewHost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreviewHost")
            .field("mounted", &self.is_mounted())
            .field("boundary", &self.boundary)
            .field("logs", &self.logs.len())
            .finish_non_exhaustive()
    }
}

impl PreviewHost {
    /// Create an unmounted host. Failures are reported through `tracing`.
    pub fn new(console: Console, factory: AppFactory) -> Self {
        Self {
            factory,
            console,
            logs: LogBuffer::new(),
            diagnostics: Box::new(TracingDiagnostics),
            app: None,
            capture: None,
            boundary: BoundaryState::Normal,
            document: None,
            navigations: Vec::new(),
        }
    }

    /// Replace the diagnostics collaborator
    pub fn with_diagnostics(mut self, diagnostics: Box<dyn Diagnostics>) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    // ─────────────────────────────────────────────────────────
    // Lifecycle
    // ─────────────────────────────────────────────────────────

    /// Start capturing console output and create the application.
    ///
    /// Mounting an already mounted host does nothing, so at most one
    /// capture is ever installed per mount.
    pub fn mount(&mut self) {
        if self.capture.is_some() {
            debug!("Preview host already mounted");
            return;
        }
        self.logs.clear();
        self.capture = Some(ConsoleCapture::install(&self.console, self.logs.clone()));
        self.app = Some((self.factory)());
        self.boundary.reset();
        info!("Preview host mounted");
    }

    /// Drop the application and restore the console's original sinks
    pub fn unmount(&mut self) {
        if self.capture.is_none() {
            return;
        }
        self.app = None;
        self.document = None;
        self.navigations.clear();
        self.capture = None;
        info!("Preview host unmounted");
    }

    pub fn is_mounted(&self) -> bool {
        self.capture.is_some()
    }

    /// Throw away the application instance and build a fresh one.
    ///
    /// The failure boundary is reset with it; console capture and the log
    /// buffer are untouched.
    pub fn remount_application(&mut self) {
        if !self.is_mounted() {
            return;
        }
        self.app = Some((self.factory)());
        self.boundary.reset();
        self.document = None;
        self.navigations.clear();
        debug!("Hosted application remounted");
    }

    // ─────────────────────────────────────────────────────────
    // Rendering
    // ─────────────────────────────────────────────────────────

    /// Render `path` unless the boundary has caught a failure
    pub fn render(&mut self, path: &str) {
        if self.boundary.is_failed() {
            return;
        }
        let Some(app) = self.app.as_mut() else {
            return;
        };

        let mut ctx = AppContext::new(&self.console, &mut self.navigations);
        match app.render(path, &mut ctx) {
            Ok(document) => {
                trace!("Rendered {} ({} nodes)", path, document.nodes.len());
                self.document = Some(document);
            }
            Err(error) => self.fail(error, path),
        }
    }

    /// Clear a caught failure and render again
    pub fn try_again(&mut self, path: &str) {
        if self.boundary.is_failed() {
            debug!("Retrying preview render for {}", path);
            self.boundary.reset();
        }
        self.render(path);
    }

    /// Run one click handler of the application.
    ///
    /// A handler error is logged to the console like an uncaught exception;
    /// it does not trip the boundary. Returns whether the handler succeeded.
    pub fn dispatch_action(&mut self, action: &str) -> bool {
        if self.boundary.is_failed() {
            return false;
        }
        let Some(app) = self.app.as_mut() else {
            return false;
        };

        let mut ctx = AppContext::new(&self.console, &mut self.navigations);
        match app.on_action(action, &mut ctx) {
            Ok(()) => true,
            Err(error) => {
                warn!("Action '{}' failed: {}", action, error);
                self.console.error(&console_args![
                    format!("Uncaught error in \"{}\" handler:", action),
                    error.message
                ]);
                false
            }
        }
    }

    /// Trip the boundary for a failed render
    fn fail(&mut self, error: RenderError, path: &str) {
        let info = ErrorInfo {
            application: self.title().to_string(),
            path: path.to_string(),
            phase: RENDER_PHASE.to_string(),
        };

        self.document = None;
        self.boundary.fail(error.clone());
        self.console.error(&[
            ConsoleArg::from("Preview component error:"),
            ConsoleArg::from(error.message.as_str()),
            ConsoleArg::serialize(&info),
        ]);
        self.diagnostics.report(&error, &info);
    }

    /// Paths the application asked to navigate to since the last call
    pub fn take_navigations(&mut self) -> Vec<String> {
        std::mem::take(&mut self.navigations)
    }

    // ─────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────

    pub fn title(&self) -> &str {
        self.app.as_ref().map(|app| app.title()).unwrap_or("Preview")
    }

    pub fn boundary(&self) -> &BoundaryState {
        &self.boundary
    }

    /// Last successful render, if it is still on screen
    pub fn document(&self) -> Option<&Document> {
        if self.boundary.is_failed() {
            return None;
        }
        self.document.as_ref()
    }

    pub fn logs(&self) -> &LogBuffer {
        &self.logs
    }

    pub fn console(&self) -> &Console {
        &self.console
    }
}

impl Drop for PreviewHost {
    fn drop(&mut self) {
        self.unmount();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::{ConsoleSink, TracingSink};
    use crate::diagnostics::MockDiagnostics;
    use crate::document::Node;
    use std::cell::Cell;
    use std::rc::Rc;
    use std::result::Result;
    use std::sync::Arc;
    use wpv_core::ConsoleLevel;

    /// Application that fails whenever `fail` is set
    struct Flaky {
        fail: Rc<Cell<bool>>,
        renders: u32,
    }

    impl HostedApplication for Flaky {
        fn title(&self) -> &str {
            "Flaky"
        }

        fn render(
            &mut self,
            path: &str,
            ctx: &mut AppContext<'_>,
        ) -> Result<Document, RenderError> {
            self.renders += 1;
            if self.fail.get() {
                return Err(RenderError::new("exploded"));
            }
            ctx.console().log(&console_args!["render", self.renders]);
            Ok(Document::new(vec![Node::text(path)]))
        }

        fn on_action(&mut self, action: &str, ctx: &mut AppContext<'_>) -> Result<(), RenderError> {
            match action {
                "go" => {
                    ctx.navigate("/next");
                    Ok(())
                }
                "bad" => Err(RenderError::new("handler broke")),
                _ => Ok(()),
            }
        }
    }

    fn flaky_host(fail: Rc<Cell<bool>>) -> PreviewHost {
        PreviewHost::new(
            Console::new(),
            Box::new(move || {
                Box::new(Flaky {
                    fail: fail.clone(),
                    renders: 0,
                }) as Box<dyn HostedApplication>
            }),
        )
    }

    fn rendered_text(host: &PreviewHost) -> Option<String> {
        match host.document()?.nodes.first()? {
            Node::Text(text) => Some(text.clone()),
            _ => None,
        }
    }

    #[test]
    fn test_mount_render_captures_logs() {
        let mut host = flaky_host(Rc::new(Cell::new(false)));
        host.mount();
        host.render("/");

        assert_eq!(rendered_text(&host).as_deref(), Some("/"));
        assert_eq!(host.logs().len(), 1);
        assert_eq!(host.logs().snapshot()[0].text(), "render 1");
    }

    #[test]
    fn test_mount_twice_installs_one_capture() {
        let mut host = flaky_host(Rc::new(Cell::new(false)));
        host.mount();
        host.mount();
        host.console().log(&console_args!["once"]);
        assert_eq!(host.logs().len(), 1);
    }

    #[test]
    fn test_unmount_restores_console() {
        let sink: Arc<dyn ConsoleSink> = Arc::new(TracingSink);
        let console = Console::with_sink(sink.clone());
        let mut host = PreviewHost::new(
            console.clone(),
            Box::new(|| {
                Box::new(Flaky {
                    fail: Rc::new(Cell::new(false)),
                    renders: 0,
                }) as Box<dyn HostedApplication>
            }),
        );

        host.mount();
        host.unmount();

        for level in ConsoleLevel::ALL {
            assert!(std::ptr::addr_eq(
                Arc::as_ptr(&console.sink(level)),
                Arc::as_ptr(&sink)
            ));
        }
        console.log(&console_args!["after unmount"]);
        assert!(host.logs().is_empty());
    }

    #[test]
    fn test_render_failure_trips_boundary_and_reports() {
        let fail = Rc::new(Cell::new(true));
        let mut diagnostics = MockDiagnostics::new();
        diagnostics
            .expect_report()
            .withf(|error, info| {
                error.message == "exploded"
                    && info.path == "/x"
                    && info.phase == "render"
                    && info.application == "Flaky"
            })
            .times(1)
            .return_const(());

        let mut host = flaky_host(fail).with_diagnostics(Box::new(diagnostics));
        host.mount();
        host.render("/x");

        assert!(host.boundary().is_failed());
        assert!(host.document().is_none());

        let logs = host.logs().snapshot();
        assert_eq!(logs.len(), 1);
        assert_eq!(logs[0].level, ConsoleLevel::Error);
        assert!(logs[0].text().starts_with("Preview component error: exploded"));
    }

    #[test]
    fn test_failed_boundary_suppresses_render() {
        let fail = Rc::new(Cell::new(true));
        let mut host = flaky_host(fail.clone());
        host.mount();
        host.render("/");

        fail.set(false);
        host.render("/");
        assert!(host.boundary().is_failed());

        host.try_again("/");
        assert!(!host.boundary().is_failed());
        assert_eq!(rendered_text(&host).as_deref(), Some("/"));
    }

    #[test]
    fn test_remount_resets_boundary() {
        let fail = Rc::new(Cell::new(true));
        let mut host = flaky_host(fail.clone());
        host.mount();
        host.render("/");
        assert!(host.boundary().is_failed());

        fail.set(false);
        host.remount_application();
        host.render("/");

        assert!(!host.boundary().is_failed());
        // Fresh instance: its render counter restarted
        assert_eq!(host.logs().snapshot().last().map(|l| l.text()), Some("render 1".into()));
    }

    #[test]
    fn test_action_navigation_is_collected() {
        let mut host = flaky_host(Rc::new(Cell::new(false)));
        host.mount();
        assert!(host.dispatch_action("go"));
        assert_eq!(host.take_navigations(), vec!["/next"]);
        assert!(host.take_navigations().is_empty());
    }

    #[test]
    fn test_action_error_logs_without_tripping_boundary() {
        let mut host = flaky_host(Rc::new(Cell::new(false)));
        host.mount();
        assert!(!host.dispatch_action("bad"));
        assert!(!host.boundary().is_failed());
        assert_eq!(host.logs().snapshot()[0].level, ConsoleLevel::Error);
    }

    #[test]
    fn test_unmounted_host_ignores_render() {
        let mut host = flaky_host(Rc::new(Cell::new(false)));
        host.render("/");
        assert!(host.document().is_none());
        assert!(!host.dispatch_action("go"));
    }
}
