//! Raw host input types and the crossterm adapter.
//!
//! Defines [`InputEvent`] together with [`Key`], [`SpecialKey`], [`MouseButton`]
//! and [`ButtonState`]. These mirror what a windowing host hands to its
//! callbacks: ASCII-style keyboard characters, a separate family of special keys,
//! and pixel coordinates for pointer events. Terminal events from crossterm are
//! converted with [`from_crossterm`] so a terminal can act as the host.

// ---------------------------------------------------------------------------
// Keys
// ---------------------------------------------------------------------------

/// Keys reported through the host's special-key callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecialKey {
    F(u8),
    Left,
    Up,
    Right,
    Down,
    PageUp,
    PageDown,
    Home,
    End,
    Insert,
}

/// A key delivered to a focused controller.
///
/// Keyboard characters and special keys share one type once they reach the
/// tree, so widgets handle both through a single `key_event` method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Special(SpecialKey),
}

impl Key {
    pub const BACKSPACE: char = '\u{8}';
    pub const TAB: char = '\t';
    pub const ENTER: char = '\r';
    pub const ESCAPE: char = '\u{1b}';
    pub const DELETE: char = '\u{7f}';

    /// Whether this key is a printable character (not a control code).
    pub fn is_printable(self) -> bool {
        matches!(self, Key::Char(c) if !c.is_control())
    }
}

impl From<char> for Key {
    fn from(c: char) -> Self {
        Key::Char(c)
    }
}

impl From<SpecialKey> for Key {
    fn from(k: SpecialKey) -> Self {
        Key::Special(k)
    }
}

// ---------------------------------------------------------------------------
// Mouse
// ---------------------------------------------------------------------------

/// Mouse button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
}

/// Whether a mouse button went down or came back up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonState {
    Down,
    Up,
}

// ---------------------------------------------------------------------------
// InputEvent
// ---------------------------------------------------------------------------

/// One raw event from the windowing host.
///
/// Each variant corresponds to one host callback slot. Keyboard variants carry
/// no position; the orchestrator supplies the last known pointer position when
/// it forwards them to the host handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Idle,
    Reshape { width: i32, height: i32 },
    Keyboard(char),
    Special(SpecialKey),
    Mouse { button: MouseButton, state: ButtonState, x: i32, y: i32 },
    Hover { x: i32, y: i32 },
    Drag { x: i32, y: i32 },
}

// ---------------------------------------------------------------------------
// crossterm conversions
// ---------------------------------------------------------------------------

impl From<crossterm::event::MouseButton> for MouseButton {
    fn from(b: crossterm::event::MouseButton) -> Self {
        match b {
            crossterm::event::MouseButton::Left => MouseButton::Left,
            crossterm::event::MouseButton::Right => MouseButton::Right,
            crossterm::event::MouseButton::Middle => MouseButton::Middle,
        }
    }
}

/// Convert a crossterm key event into the host key it would have produced.
///
/// Control chords on letters become ASCII control codes (Ctrl+A is `0x01`).
/// Key releases and codes with no host equivalent yield `None`.
fn convert_key(ke: crossterm::event::KeyEvent) -> Option<InputEvent> {
    use crossterm::event::{KeyCode, KeyEventKind, KeyModifiers};

    if ke.kind == KeyEventKind::Release {
        return None;
    }
    let event = match ke.code {
        KeyCode::Char(c) if ke.modifiers.contains(KeyModifiers::CONTROL) && c.is_ascii_alphabetic() => {
            let code = c.to_ascii_lowercase() as u8 - b'a' + 1;
            InputEvent::Keyboard(code as char)
        }
        KeyCode::Char(c) => InputEvent::Keyboard(c),
        KeyCode::Enter => InputEvent::Keyboard(Key::ENTER),
        KeyCode::Esc => InputEvent::Keyboard(Key::ESCAPE),
        KeyCode::Tab => InputEvent::Keyboard(Key::TAB),
        KeyCode::Backspace => InputEvent::Keyboard(Key::BACKSPACE),
        KeyCode::Delete => InputEvent::Keyboard(Key::DELETE),
        KeyCode::Left => InputEvent::Special(SpecialKey::Left),
        KeyCode::Right => InputEvent::Special(SpecialKey::Right),
        KeyCode::Up => InputEvent::Special(SpecialKey::Up),
        KeyCode::Down => InputEvent::Special(SpecialKey::Down),
        KeyCode::Home => InputEvent::Special(SpecialKey::Home),
        KeyCode::End => InputEvent::Special(SpecialKey::End),
        KeyCode::PageUp => InputEvent::Special(SpecialKey::PageUp),
        KeyCode::PageDown => InputEvent::Special(SpecialKey::PageDown),
        KeyCode::Insert => InputEvent::Special(SpecialKey::Insert),
        KeyCode::F(n) => InputEvent::Special(SpecialKey::F(n)),
        _ => return None,
    };
    Some(event)
}

/// Convert a crossterm `Event` into an [`InputEvent`].
///
/// Terminal cells stand in for pixels. Scroll wheel, focus and paste events
/// have no host callback slot and yield `None`.
pub fn from_crossterm(event: crossterm::event::Event) -> Option<InputEvent> {
    use crossterm::event::{Event, MouseEventKind};

    match event {
        Event::Key(ke) => convert_key(ke),
        Event::Mouse(me) => {
            let x = i32::from(me.column);
            let y = i32::from(me.row);
            match me.kind {
                MouseEventKind::Down(b) => Some(InputEvent::Mouse {
                    button: b.into(),
                    state: ButtonState::Down,
                    x,
                    y,
                }),
                MouseEventKind::Up(b) => Some(InputEvent::Mouse {
                    button: b.into(),
                    state: ButtonState::Up,
                    x,
                    y,
                }),
                MouseEventKind::Drag(_) => Some(InputEvent::Drag { x, y }),
                MouseEventKind::Moved => Some(InputEvent::Hover { x, y }),
                _ => None,
            }
        }
        Event::Resize(w, h) => Some(InputEvent::Reshape {
            width: i32::from(w),
            height: i32::from(h),
        }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{
        Event, KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers, MouseEvent,
        MouseEventKind,
    };

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent { kind, column, row, modifiers: KeyModifiers::NONE })
    }

    #[test]
    fn printable_keys() {
        assert!(Key::Char('a').is_printable());
        assert!(Key::Char(' ').is_printable());
        assert!(!Key::Char(Key::BACKSPACE).is_printable());
        assert!(!Key::Special(SpecialKey::Left).is_printable());
    }

    #[test]
    fn key_from_char_and_special() {
        assert_eq!(Key::from('x'), Key::Char('x'));
        assert_eq!(Key::from(SpecialKey::Home), Key::Special(SpecialKey::Home));
    }

    #[test]
    fn crossterm_char() {
        let event = from_crossterm(key(KeyCode::Char('x'), KeyModifiers::NONE));
        assert_eq!(event, Some(InputEvent::Keyboard('x')));
    }

    #[test]
    fn crossterm_control_chord_becomes_control_code() {
        let event = from_crossterm(key(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(event, Some(InputEvent::Keyboard('\u{3}')));
    }

    #[test]
    fn crossterm_editing_keys_become_ascii() {
        assert_eq!(
            from_crossterm(key(KeyCode::Backspace, KeyModifiers::NONE)),
            Some(InputEvent::Keyboard(Key::BACKSPACE))
        );
        assert_eq!(
            from_crossterm(key(KeyCode::Enter, KeyModifiers::NONE)),
            Some(InputEvent::Keyboard(Key::ENTER))
        );
        assert_eq!(
            from_crossterm(key(KeyCode::Esc, KeyModifiers::NONE)),
            Some(InputEvent::Keyboard(Key::ESCAPE))
        );
    }

    #[test]
    fn crossterm_navigation_keys_become_special() {
        assert_eq!(
            from_crossterm(key(KeyCode::Left, KeyModifiers::NONE)),
            Some(InputEvent::Special(SpecialKey::Left))
        );
        assert_eq!(
            from_crossterm(key(KeyCode::F(5), KeyModifiers::NONE)),
            Some(InputEvent::Special(SpecialKey::F(5)))
        );
    }

    #[test]
    fn crossterm_key_release_is_ignored() {
        let ke = KeyEvent::new_with_kind_and_state(
            KeyCode::Char('a'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
            KeyEventState::NONE,
        );
        assert_eq!(from_crossterm(Event::Key(ke)), None);
    }

    #[test]
    fn crossterm_mouse_down_and_up() {
        let down = from_crossterm(mouse(
            MouseEventKind::Down(crossterm::event::MouseButton::Left),
            3,
            4,
        ));
        assert_eq!(
            down,
            Some(InputEvent::Mouse {
                button: MouseButton::Left,
                state: ButtonState::Down,
                x: 3,
                y: 4
            })
        );

        let up = from_crossterm(mouse(
            MouseEventKind::Up(crossterm::event::MouseButton::Right),
            1,
            2,
        ));
        assert_eq!(
            up,
            Some(InputEvent::Mouse {
                button: MouseButton::Right,
                state: ButtonState::Up,
                x: 1,
                y: 2
            })
        );
    }

    #[test]
    fn crossterm_motion() {
        assert_eq!(
            from_crossterm(mouse(MouseEventKind::Moved, 7, 8)),
            Some(InputEvent::Hover { x: 7, y: 8 })
        );
        assert_eq!(
            from_crossterm(mouse(
                MouseEventKind::Drag(crossterm::event::MouseButton::Left),
                9,
                10
            )),
            Some(InputEvent::Drag { x: 9, y: 10 })
        );
    }

    #[test]
    fn crossterm_scroll_has_no_slot() {
        assert_eq!(from_crossterm(mouse(MouseEventKind::ScrollUp, 0, 0)), None);
    }

    #[test]
    fn crossterm_resize() {
        assert_eq!(
            from_crossterm(Event::Resize(120, 40)),
            Some(InputEvent::Reshape { width: 120, height: 40 })
        );
    }

    #[test]
    fn crossterm_focus_has_no_slot() {
        assert_eq!(from_crossterm(Event::FocusGained), None);
    }
}
