//! Main TUI runner - entry point and event loop
//!
//! Contains the application lifecycle:
//! - `run`: mounts the preview host, owns the terminal, restores it on exit
//! - `run_loop`: processes channel messages, renders, polls terminal events

use tokio::sync::mpsc;
use wpv_app::config::Settings;
use wpv_app::message::Message;
use wpv_app::process::process_message;
use wpv_app::signals;
use wpv_app::{AppState, Display, PreviewHost};
use wpv_core::prelude::*;

use super::{event, render, terminal};

/// Run the preview TUI until the user quits
pub async fn run(settings: Settings, host: PreviewHost, source: Option<String>) -> Result<()> {
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    // Initialize terminal
    let mut term = ratatui::try_init().map_err(|e| Error::TerminalInit(e.to_string()))?;
    if let Err(e) = terminal::enable_mouse_capture() {
        // Keyboard navigation still works without the mouse
        warn!("{}", e);
    }

    let mut state = AppState::with_settings(settings, host, source);
    info!(
        "Preview mounted at {} ({} console entries)",
        state.current_path(),
        state.logs().len()
    );

    // Unified message channel (signal handler, clipboard and fullscreen results)
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);

    // Spawn signal handler (sends Message::Quit on SIGINT/SIGTERM)
    signals::spawn_signal_handler(msg_tx.clone());

    let mut display = Display::new(state.settings.ui.allow_fullscreen);

    let result = run_loop(&mut term, &mut state, msg_rx, msg_tx, &mut display);

    state.host.unmount();

    // Restore terminal
    terminal::disable_mouse_capture();
    if let Err(e) = ratatui::try_restore() {
        error!("{}", Error::TerminalRestore(e.to_string()));
    }

    result
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: mpsc::Sender<Message>,
    display: &mut Display,
) -> Result<()> {
    while !state.should_quit() {
        // Process external messages (from signal handler, action tasks)
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, &msg_tx, display);
        }

        // Render
        terminal
            .draw(|frame| render::view(frame, state))
            .context("Failed to draw frame")?;

        // Handle terminal events
        if let Some(message) = event::poll()? {
            process_message(state, message, &msg_tx, display);
        }
    }

    Ok(())
}
