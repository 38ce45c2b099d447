#![forbid(unsafe_code)]

//! Application model and message mapping.
//!
//! The model owns all mutable state: the task list, the input field, and the
//! selection. Every mutation of the task list returns [`Cmd::Save`] so the
//! runtime persists the full sequence before the next frame.
//!
//! # Keybindings
//!
//! The input field is always focused, so printable characters (including
//! space) insert text. List operations live on keys that never occur in
//! task text: Enter submits, Up/Down move the selection, Tab toggles the
//! selected task, Ctrl+D or Delete removes it, Esc or Ctrl+C quits.

use std::io::{self, Write};

use taskmaster_core::{Task, TaskList};

use crate::event::{Event, KeyCode, KeyEvent};
use crate::input::TextInput;
use crate::program::{Cmd, Model};
use crate::view;

/// Messages that drive the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Insert a character into the input field.
    Insert(char),
    /// Delete the grapheme before the input cursor.
    Backspace,
    /// Move the input cursor left.
    CursorLeft,
    /// Move the input cursor right.
    CursorRight,
    /// Move the input cursor to the start.
    CursorHome,
    /// Move the input cursor to the end.
    CursorEnd,
    /// Submit the input field as a new task.
    Submit,
    /// Flip the completion flag of the selected task.
    ToggleSelected,
    /// Remove the selected task.
    DeleteSelected,
    /// Move the selection up.
    SelectPrev,
    /// Move the selection down.
    SelectNext,
    /// The terminal was resized.
    Resize(u16, u16),
    /// Quit the application.
    Quit,
    /// An event the application does not consume.
    Noop,
}

impl From<Event> for Msg {
    fn from(event: Event) -> Self {
        match event {
            Event::Key(key) => Msg::from_key(key),
            Event::Resize { width, height } => Msg::Resize(width, height),
        }
    }
}

impl Msg {
    fn from_key(key: KeyEvent) -> Self {
        if key.ctrl {
            return match key.code {
                KeyCode::Char('c') => Msg::Quit,
                KeyCode::Char('d') => Msg::DeleteSelected,
                _ => Msg::Noop,
            };
        }
        match key.code {
            KeyCode::Char(c) => Msg::Insert(c),
            KeyCode::Enter => Msg::Submit,
            KeyCode::Backspace => Msg::Backspace,
            KeyCode::Delete => Msg::DeleteSelected,
            KeyCode::Tab => Msg::ToggleSelected,
            KeyCode::Esc => Msg::Quit,
            KeyCode::Up => Msg::SelectPrev,
            KeyCode::Down => Msg::SelectNext,
            KeyCode::Left => Msg::CursorLeft,
            KeyCode::Right => Msg::CursorRight,
            KeyCode::Home => Msg::CursorHome,
            KeyCode::End => Msg::CursorEnd,
        }
    }
}

/// The application model: task list, input field, selection, terminal size.
#[derive(Debug)]
pub struct AppModel {
    /// The task sequence. Hydrated once at startup, authoritative afterward.
    pub tasks: TaskList,
    /// The new-task input field.
    pub input: TextInput,
    /// Selected task index. Clamped into range after removals.
    pub selected: usize,
    /// Terminal width in columns.
    pub width: u16,
    /// Terminal height in rows.
    pub height: u16,
}

impl AppModel {
    /// Create a model over a hydrated task sequence.
    #[must_use]
    pub fn new(tasks: Vec<Task>) -> Self {
        Self {
            tasks: TaskList::from(tasks),
            input: TextInput::new(),
            selected: 0,
            width: 80,
            height: 24,
        }
    }

    /// Clamp the selection into the current list range.
    fn clamp_selection(&mut self) {
        if self.selected >= self.tasks.len() {
            self.selected = self.tasks.len().saturating_sub(1);
        }
    }
}

impl Model for AppModel {
    type Message = Msg;

    fn update(&mut self, msg: Msg) -> Cmd<Msg> {
        match msg {
            Msg::Insert(c) => {
                self.input.insert(c);
                Cmd::None
            }
            Msg::Backspace => {
                self.input.backspace();
                Cmd::None
            }
            Msg::CursorLeft => {
                self.input.move_left();
                Cmd::None
            }
            Msg::CursorRight => {
                self.input.move_right();
                Cmd::None
            }
            Msg::CursorHome => {
                self.input.move_home();
                Cmd::None
            }
            Msg::CursorEnd => {
                self.input.move_end();
                Cmd::None
            }
            Msg::Submit => {
                let text = self.input.trimmed().to_string();
                if text.is_empty() {
                    // Whitespace-only input is silently rejected and the
                    // field is left as-is.
                    return Cmd::None;
                }
                self.tasks.add(&text);
                self.input.clear();
                Cmd::Save
            }
            Msg::ToggleSelected => {
                if self.tasks.toggle(self.selected) {
                    Cmd::Save
                } else {
                    Cmd::None
                }
            }
            Msg::DeleteSelected => {
                if self.tasks.remove(self.selected) {
                    self.clamp_selection();
                    Cmd::Save
                } else {
                    Cmd::None
                }
            }
            Msg::SelectPrev => {
                self.selected = self.selected.saturating_sub(1);
                Cmd::None
            }
            Msg::SelectNext => {
                if self.selected + 1 < self.tasks.len() {
                    self.selected += 1;
                }
                Cmd::None
            }
            Msg::Resize(width, height) => {
                self.width = width;
                self.height = height;
                Cmd::None
            }
            Msg::Quit => Cmd::quit(),
            Msg::Noop => Cmd::none(),
        }
    }

    fn view(&self, mut out: &mut dyn Write) -> io::Result<()> {
        view::draw(
            &mut out,
            &self.tasks,
            &self.input,
            self.selected,
            self.width,
            self.height,
        )
    }

    fn snapshot(&self) -> &TaskList {
        &self.tasks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model_with(texts: &[&str]) -> AppModel {
        let mut model = AppModel::new(Vec::new());
        for text in texts {
            model.tasks.add(text);
        }
        model
    }

    fn type_text(model: &mut AppModel, text: &str) {
        for c in text.chars() {
            model.update(Msg::Insert(c));
        }
    }

    #[test]
    fn key_mapping_covers_list_operations() {
        assert_eq!(
            Msg::from(Event::Key(KeyEvent::new(KeyCode::Char(' ')))),
            Msg::Insert(' ')
        );
        assert_eq!(Msg::from(Event::Key(KeyEvent::new(KeyCode::Enter))), Msg::Submit);
        assert_eq!(
            Msg::from(Event::Key(KeyEvent::new(KeyCode::Tab))),
            Msg::ToggleSelected
        );
        assert_eq!(
            Msg::from(Event::Key(KeyEvent::ctrl(KeyCode::Char('d')))),
            Msg::DeleteSelected
        );
        assert_eq!(
            Msg::from(Event::Key(KeyEvent::ctrl(KeyCode::Char('c')))),
            Msg::Quit
        );
        assert_eq!(Msg::from(Event::Key(KeyEvent::new(KeyCode::Esc))), Msg::Quit);
        assert_eq!(
            Msg::from(Event::Resize {
                width: 100,
                height: 30
            }),
            Msg::Resize(100, 30)
        );
    }

    #[test]
    fn submit_adds_trimmed_task_and_saves() {
        let mut model = AppModel::new(Vec::new());
        type_text(&mut model, "  Buy milk  ");

        let cmd = model.update(Msg::Submit);
        assert!(matches!(cmd, Cmd::Save));
        assert_eq!(model.tasks.len(), 1);
        assert_eq!(model.tasks.get(0).unwrap().text, "Buy milk");
        assert!(!model.tasks.get(0).unwrap().completed);
        assert!(model.input.is_empty());
    }

    #[test]
    fn submit_whitespace_only_is_silent_noop() {
        let mut model = AppModel::new(Vec::new());
        type_text(&mut model, "   ");

        let cmd = model.update(Msg::Submit);
        assert!(matches!(cmd, Cmd::None));
        assert!(model.tasks.is_empty());
        // The field is not cleared.
        assert_eq!(model.input.value(), "   ");
    }

    #[test]
    fn toggle_selected_flips_and_saves() {
        let mut model = model_with(&["a", "b"]);
        model.selected = 1;

        let cmd = model.update(Msg::ToggleSelected);
        assert!(matches!(cmd, Cmd::Save));
        assert!(model.tasks.get(1).unwrap().completed);

        let cmd = model.update(Msg::ToggleSelected);
        assert!(matches!(cmd, Cmd::Save));
        assert!(!model.tasks.get(1).unwrap().completed);
    }

    #[test]
    fn toggle_on_empty_list_does_not_save() {
        let mut model = AppModel::new(Vec::new());
        let cmd = model.update(Msg::ToggleSelected);
        assert!(matches!(cmd, Cmd::None));
    }

    #[test]
    fn delete_selected_clamps_selection() {
        let mut model = model_with(&["a", "b", "c"]);
        model.selected = 2;

        let cmd = model.update(Msg::DeleteSelected);
        assert!(matches!(cmd, Cmd::Save));
        assert_eq!(model.tasks.len(), 2);
        assert_eq!(model.selected, 1);
    }

    #[test]
    fn delete_middle_preserves_order() {
        let mut model = model_with(&["a", "b", "c"]);
        model.selected = 1;

        model.update(Msg::DeleteSelected);
        assert_eq!(model.tasks.get(0).unwrap().text, "a");
        assert_eq!(model.tasks.get(1).unwrap().text, "c");
        assert_eq!(model.selected, 1);
    }

    #[test]
    fn selection_saturates_at_both_ends() {
        let mut model = model_with(&["a", "b"]);

        model.update(Msg::SelectPrev);
        assert_eq!(model.selected, 0);

        model.update(Msg::SelectNext);
        model.update(Msg::SelectNext);
        model.update(Msg::SelectNext);
        assert_eq!(model.selected, 1);
    }

    #[test]
    fn resize_updates_dimensions() {
        let mut model = AppModel::new(Vec::new());
        model.update(Msg::Resize(132, 50));
        assert_eq!((model.width, model.height), (132, 50));
    }

    #[test]
    fn editing_messages_do_not_save() {
        let mut model = AppModel::new(Vec::new());
        for msg in [
            Msg::Insert('x'),
            Msg::CursorLeft,
            Msg::CursorRight,
            Msg::CursorHome,
            Msg::CursorEnd,
            Msg::Backspace,
        ] {
            assert!(matches!(model.update(msg), Cmd::None));
        }
    }
}
