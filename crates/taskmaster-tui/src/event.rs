#![forbid(unsafe_code)]

//! Canonical input event types.
//!
//! A small event vocabulary mapped from crossterm. Only key presses and
//! resizes reach the model; repeats and releases are dropped at the boundary
//! so handlers never fire twice for one keystroke.

use crossterm::event as cte;

/// Canonical input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A keyboard event.
    Key(KeyEvent),
    /// Terminal was resized.
    Resize {
        /// New terminal width in columns.
        width: u16,
        /// New terminal height in rows.
        height: u16,
    },
}

impl Event {
    /// Convert a crossterm event into a canonical [`Event`].
    ///
    /// Returns `None` for events the application does not consume (mouse,
    /// focus, paste, key repeats and releases).
    #[must_use]
    pub fn from_crossterm(event: cte::Event) -> Option<Self> {
        match event {
            cte::Event::Key(key) if key.kind == cte::KeyEventKind::Press => {
                KeyEvent::from_crossterm(key).map(Event::Key)
            }
            cte::Event::Resize(width, height) => Some(Event::Resize { width, height }),
            _ => None,
        }
    }
}

/// A keyboard press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// The key that was pressed.
    pub code: KeyCode,
    /// Whether Ctrl was held.
    pub ctrl: bool,
    /// Whether Alt was held.
    pub alt: bool,
}

impl KeyEvent {
    /// Create a bare key event with no modifiers.
    #[must_use]
    pub const fn new(code: KeyCode) -> Self {
        Self {
            code,
            ctrl: false,
            alt: false,
        }
    }

    /// Create a key event with Ctrl held.
    #[must_use]
    pub const fn ctrl(code: KeyCode) -> Self {
        Self {
            code,
            ctrl: true,
            alt: false,
        }
    }

    /// Check if this is a specific character key (any modifiers).
    #[must_use]
    pub fn is_char(&self, c: char) -> bool {
        matches!(self.code, KeyCode::Char(ch) if ch == c)
    }

    fn from_crossterm(key: cte::KeyEvent) -> Option<Self> {
        let code = match key.code {
            cte::KeyCode::Char(c) => KeyCode::Char(c),
            cte::KeyCode::Enter => KeyCode::Enter,
            cte::KeyCode::Backspace => KeyCode::Backspace,
            cte::KeyCode::Delete => KeyCode::Delete,
            cte::KeyCode::Tab => KeyCode::Tab,
            cte::KeyCode::Esc => KeyCode::Esc,
            cte::KeyCode::Up => KeyCode::Up,
            cte::KeyCode::Down => KeyCode::Down,
            cte::KeyCode::Left => KeyCode::Left,
            cte::KeyCode::Right => KeyCode::Right,
            cte::KeyCode::Home => KeyCode::Home,
            cte::KeyCode::End => KeyCode::End,
            _ => return None,
        };
        Some(Self {
            code,
            ctrl: key.modifiers.contains(cte::KeyModifiers::CONTROL),
            alt: key.modifiers.contains(cte::KeyModifiers::ALT),
        })
    }
}

/// Key codes the application understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A regular character key.
    Char(char),
    Enter,
    Backspace,
    Delete,
    Tab,
    Esc,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
}
