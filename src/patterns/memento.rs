//! Memento: the editor captures its own state in an opaque snapshot, and a
//! caretaker decides when to take and restore snapshots.

use std::fmt;

use crate::config::Settings;
use crate::console::Console;
use crate::error::PatternError;

/// Originator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEditor {
    pub text: String,
    pub selection_width: u64,
    cursor_x: u64,
    cursor_y: u64,
}

impl TextEditor {
    pub fn new(
        text: impl Into<String>,
        selection_width: u64,
        cursor_x: u64,
        cursor_y: u64,
    ) -> Self {
        Self {
            text: text.into(),
            selection_width,
            cursor_x,
            cursor_y,
        }
    }

    pub fn set_cursor(&mut self, x: u64, y: u64) {
        self.cursor_x = x;
        self.cursor_y = y;
    }

    pub fn cursor(&self) -> (u64, u64) {
        (self.cursor_x, self.cursor_y)
    }

    pub fn create_snapshot(&self) -> Snapshot {
        Snapshot {
            text: self.text.clone(),
            selection_width: self.selection_width,
            cursor_x: self.cursor_x,
            cursor_y: self.cursor_y,
        }
    }
}

impl fmt::Display for TextEditor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.text, self.selection_width, self.cursor_x, self.cursor_y
        )
    }
}

/// Immutable once taken; fields are private to this module.
#[derive(Debug, Clone)]
pub struct Snapshot {
    text: String,
    selection_width: u64,
    cursor_x: u64,
    cursor_y: u64,
}

impl Snapshot {
    pub fn restore(&self, editor: &mut TextEditor) {
        editor.text = self.text.clone();
        editor.set_cursor(self.cursor_x, self.cursor_y);
        editor.selection_width = self.selection_width;
    }
}

/// Caretaker keeping a stack of snapshots.
#[derive(Debug, Default)]
pub struct History {
    snapshots: Vec<Snapshot>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_snapshot(&mut self, editor: &TextEditor) {
        self.snapshots.push(editor.create_snapshot());
    }

    /// Restores the most recent snapshot. False when there is none.
    pub fn undo(&mut self, editor: &mut TextEditor) -> bool {
        match self.snapshots.pop() {
            Some(snapshot) => {
                snapshot.restore(editor);
                true
            }
            None => false,
        }
    }

    pub fn depth(&self) -> usize {
        self.snapshots.len()
    }
}

pub fn demo(console: &Console, _settings: &Settings) -> Result<(), PatternError> {
    let mut editor = TextEditor::new("Welcome", 3, 0, 5);
    let mut history = History::new();

    history.create_snapshot(&editor);
    console.say(format!("Initial state: {editor}"));

    editor.text = "Good night".to_string();
    editor.set_cursor(1, 6);
    editor.selection_width = 4;
    console.say(format!("Altered state: {editor}"));

    history.undo(&mut editor);
    console.say(format!("Restored state: {editor}"));

    Ok(())
}
