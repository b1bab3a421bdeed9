//! Mouse handling: clicks resolve against the last frame's hit map

use crate::hit_map::{ChromeControl, HitTarget};
use crate::input_key::MouseInput;
use crate::message::Message;
use crate::state::{AppState, UiMode};

/// Convert a mouse event to a message
pub fn handle_mouse(state: &AppState, mouse: MouseInput) -> Option<Message> {
    match mouse {
        MouseInput::Click { column, row } => {
            let target = state.hit_map.target_at(column, row);
            if state.ui_mode == UiMode::AddressInput {
                // Clicking the bar again keeps editing; anywhere else cancels
                return match target {
                    Some(HitTarget::Chrome(ChromeControl::AddressBar)) => None,
                    _ => Some(Message::CancelAddressInput),
                };
            }
            match target? {
                HitTarget::Chrome(control) => Some(chrome_message(control)),
                HitTarget::Content(index) => state
                    .click_targets()
                    .into_iter()
                    .nth(index)
                    .map(|target| Message::ContentClicked { target }),
                HitTarget::ConsolePane | HitTarget::ContentPane => None,
            }
        }
        MouseInput::ScrollUp { column, row } => match state.hit_map.target_at(column, row)? {
            HitTarget::ConsolePane => Some(Message::ConsoleScrollUp),
            _ => Some(Message::ScrollUp),
        },
        MouseInput::ScrollDown { column, row } => match state.hit_map.target_at(column, row)? {
            HitTarget::ConsolePane => Some(Message::ConsoleScrollDown),
            _ => Some(Message::ScrollDown),
        },
    }
}

fn chrome_message(control: ChromeControl) -> Message {
    match control {
        ChromeControl::Back => Message::Back,
        ChromeControl::Forward => Message::Forward,
        ChromeControl::Refresh => Message::Refresh,
        ChromeControl::AddressBar => Message::StartAddressInput,
        ChromeControl::ToggleView => Message::ToggleViewMode,
        ChromeControl::ToggleConsole => Message::ToggleConsole,
        ChromeControl::ToggleFullscreen => Message::ToggleFullscreen,
        ChromeControl::CopySource => Message::CopySource,
        ChromeControl::ClearConsole => Message::ClearConsole,
        ChromeControl::TryAgain => Message::TryAgain,
    }
}
