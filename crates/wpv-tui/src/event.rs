//! Terminal event polling

use crossterm::event::{self, Event, KeyCode, KeyModifiers, MouseButton, MouseEventKind};
use std::time::Duration;
use wpv_app::input_key::{InputKey, MouseInput};
use wpv_app::message::Message;
use wpv_core::prelude::*;

/// Convert crossterm KeyEvent to InputKey
pub fn key_event_to_input(key: crossterm::event::KeyEvent) -> Option<InputKey> {
    match key.code {
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputKey::CharCtrl(c))
        }
        KeyCode::Char(c) => Some(InputKey::Char(c)),
        KeyCode::Enter => Some(InputKey::Enter),
        KeyCode::Esc => Some(InputKey::Esc),
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => Some(InputKey::BackTab),
        KeyCode::Tab => Some(InputKey::Tab),
        KeyCode::BackTab => Some(InputKey::BackTab),
        KeyCode::Backspace => Some(InputKey::Backspace),
        KeyCode::Delete => Some(InputKey::Delete),
        KeyCode::Up => Some(InputKey::Up),
        KeyCode::Down => Some(InputKey::Down),
        KeyCode::Left => Some(InputKey::Left),
        KeyCode::Right => Some(InputKey::Right),
        KeyCode::Home => Some(InputKey::Home),
        KeyCode::End => Some(InputKey::End),
        KeyCode::PageUp => Some(InputKey::PageUp),
        KeyCode::PageDown => Some(InputKey::PageDown),
        KeyCode::F(n) => Some(InputKey::F(n)),
        _ => None, // Unsupported keys ignored
    }
}

/// Convert crossterm MouseEvent to MouseInput
///
/// Only left-button presses and wheel movement are reported; drags,
/// releases and other buttons are ignored.
pub fn mouse_event_to_input(mouse: crossterm::event::MouseEvent) -> Option<MouseInput> {
    let (column, row) = (mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(MouseInput::Click { column, row }),
        MouseEventKind::ScrollUp => Some(MouseInput::ScrollUp { column, row }),
        MouseEventKind::ScrollDown => Some(MouseInput::ScrollDown { column, row }),
        _ => None,
    }
}

/// Poll for terminal events with timeout
pub fn poll() -> Result<Option<Message>> {
    // Poll with 50ms timeout (20 FPS)
    if event::poll(Duration::from_millis(50))? {
        let event = event::read()?;

        match event {
            Event::Key(key) => {
                if key.kind == event::KeyEventKind::Press {
                    Ok(key_event_to_input(key).map(Message::Key))
                } else {
                    Ok(None)
                }
            }
            Event::Mouse(mouse) => Ok(mouse_event_to_input(mouse).map(Message::Mouse)),
            _ => Ok(None),
        }
    } else {
        // Tick on timeout drives status notice expiry
        Ok(Some(Message::Tick))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, MouseEvent};

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_char_conversion() {
        let key = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        assert_eq!(key_event_to_input(key), Some(InputKey::Char('a')));
    }

    #[test]
    fn test_char_with_ctrl_conversion() {
        let key = KeyEvent::new(KeyCode::Char('l'), KeyModifiers::CONTROL);
        assert_eq!(key_event_to_input(key), Some(InputKey::CharCtrl('l')));
    }

    #[test]
    fn test_navigation_keys() {
        assert_eq!(
            key_event_to_input(KeyEvent::new(KeyCode::Left, KeyModifiers::NONE)),
            Some(InputKey::Left)
        );
        assert_eq!(
            key_event_to_input(KeyEvent::new(KeyCode::Right, KeyModifiers::NONE)),
            Some(InputKey::Right)
        );
        assert_eq!(
            key_event_to_input(KeyEvent::new(KeyCode::PageDown, KeyModifiers::NONE)),
            Some(InputKey::PageDown)
        );
    }

    #[test]
    fn test_backtab_with_shift() {
        let key = KeyEvent::new(KeyCode::Tab, KeyModifiers::SHIFT);
        assert_eq!(key_event_to_input(key), Some(InputKey::BackTab));
    }

    #[test]
    fn test_function_keys() {
        assert_eq!(
            key_event_to_input(KeyEvent::new(KeyCode::F(5), KeyModifiers::NONE)),
            Some(InputKey::F(5))
        );
        assert_eq!(
            key_event_to_input(KeyEvent::new(KeyCode::F(11), KeyModifiers::NONE)),
            Some(InputKey::F(11))
        );
    }

    #[test]
    fn test_unsupported_key_returns_none() {
        let key = KeyEvent::new(KeyCode::Insert, KeyModifiers::NONE);
        assert_eq!(key_event_to_input(key), None);
    }

    #[test]
    fn test_left_click_conversion() {
        let event = mouse(MouseEventKind::Down(MouseButton::Left), 7, 3);
        assert_eq!(
            mouse_event_to_input(event),
            Some(MouseInput::Click { column: 7, row: 3 })
        );
    }

    #[test]
    fn test_wheel_conversion() {
        assert_eq!(
            mouse_event_to_input(mouse(MouseEventKind::ScrollUp, 1, 2)),
            Some(MouseInput::ScrollUp { column: 1, row: 2 })
        );
        assert_eq!(
            mouse_event_to_input(mouse(MouseEventKind::ScrollDown, 1, 2)),
            Some(MouseInput::ScrollDown { column: 1, row: 2 })
        );
    }

    #[test]
    fn test_other_mouse_events_ignored() {
        assert_eq!(
            mouse_event_to_input(mouse(MouseEventKind::Down(MouseButton::Right), 0, 0)),
            None
        );
        assert_eq!(
            mouse_event_to_input(mouse(MouseEventKind::Up(MouseButton::Left), 0, 0)),
            None
        );
        assert_eq!(mouse_event_to_input(mouse(MouseEventKind::Moved, 0, 0)), None);
    }
}
