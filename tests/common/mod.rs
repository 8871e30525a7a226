//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use std::path::PathBuf;
use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tempfile::TempDir;
use todoflow::todos::{Todo, TodoAction, TodoId, VisibilityFilter};

pub fn todo(id: u64, text: &str, completed: bool) -> Arc<Todo> {
    Arc::new(Todo {
        id: TodoId(id),
        text: text.to_string(),
        completed,
    })
}

/// The two-item list used by the toggle scenarios.
pub fn learn_and_shop() -> Vec<Arc<Todo>> {
    vec![
        todo(0, "Learn Redux", false),
        todo(1, "Go Shopping", false),
    ]
}

pub fn add(id: u64, text: &str) -> TodoAction {
    TodoAction::AddTodo {
        id: TodoId(id),
        text: text.to_string(),
    }
}

pub fn toggle(id: u64) -> TodoAction {
    TodoAction::ToggleTodo { id: TodoId(id) }
}

pub fn filter(filter: VisibilityFilter) -> TodoAction {
    TodoAction::SetVisibilityFilter { filter }
}

/// Write `content` to a file inside a fresh temp dir.
pub fn temp_file(name: &str, content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join(name);
    std::fs::write(&path, content).expect("Failed to write temp file");
    (temp_dir, path)
}

// -- Key helpers --------------------------------------------------------------

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn ctrl(ch: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
}
