//! Action handlers: UpdateAction dispatch and background work

use std::process::Command;

use tokio::sync::mpsc;
use tracing::{debug, error};
use wpv_core::{Error, Result};

use crate::display::Display;
use crate::handler::UpdateAction;
use crate::message::Message;

/// Execute an action returned by `update`.
///
/// Results that arrive later (display changes, clipboard completion) are
/// sent back through `msg_tx`.
pub fn handle_action(action: UpdateAction, msg_tx: mpsc::Sender<Message>, display: &mut Display) {
    match action {
        UpdateAction::RequestFullscreen => {
            if let Some(active) = display.request_fullscreen() {
                notify_fullscreen(msg_tx, active);
            }
        }

        UpdateAction::ExitFullscreen => {
            if let Some(active) = display.exit_fullscreen() {
                notify_fullscreen(msg_tx, active);
            }
        }

        UpdateAction::CopyToClipboard { text } => {
            tokio::spawn(async move {
                let result = tokio::task::spawn_blocking(move || copy_to_clipboard(&text)).await;
                let message = match result {
                    Ok(Ok(())) => Message::SourceCopied,
                    Ok(Err(e)) => Message::CopyFailed {
                        reason: e.to_string(),
                    },
                    Err(e) => Message::CopyFailed {
                        reason: format!("clipboard task failed: {}", e),
                    },
                };
                send_result(&msg_tx, message).await;
            });
        }

        UpdateAction::OpenExternal { url, browser } => {
            tokio::spawn(async move {
                if let Err(e) = open_url_in_browser(&url, &browser) {
                    error!("{}", Error::external_link(format!("{}: {}", url, e)));
                }
            });
        }
    }
}

/// Deliver a display change out of band, like a `fullscreenchange` event
fn notify_fullscreen(msg_tx: mpsc::Sender<Message>, active: bool) {
    debug!("Display fullscreen -> {}", active);
    tokio::spawn(async move {
        send_result(&msg_tx, Message::FullscreenChanged { active }).await;
    });
}

/// Report an out-of-band result; the loop may already have shut down
async fn send_result(msg_tx: &mpsc::Sender<Message>, message: Message) {
    if msg_tx.send(message).await.is_err() {
        debug!("{}", Error::ChannelClosed);
    }
}

/// Put `text` on the system clipboard
fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = arboard::Clipboard::new().map_err(|e| Error::clipboard(e.to_string()))?;
    clipboard
        .set_text(text.to_owned())
        .map_err(|e| Error::clipboard(e.to_string()))
}

/// Launch the browser for an external link without waiting on it
fn open_url_in_browser(url: &str, browser: &str) -> std::io::Result<()> {
    let mut command = browser_command(url, browser).ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::Unsupported,
            "no browser opener available for this platform",
        )
    })?;
    command.spawn().map(drop)
}

/// The configured browser, else the platform opener
fn browser_command(url: &str, browser: &str) -> Option<Command> {
    let (program, leading) = if !browser.is_empty() {
        (browser, vec![])
    } else if cfg!(target_os = "macos") {
        ("open", vec![])
    } else if cfg!(target_os = "windows") {
        ("cmd", vec!["/C", "start", ""])
    } else if cfg!(unix) {
        ("xdg-open", vec![])
    } else {
        return None;
    };

    let mut command = Command::new(program);
    command.args(leading).arg(url);
    Some(command)
}
