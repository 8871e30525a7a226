//! Replay a JSON Lines action log through a store.

use std::io::BufRead;
use std::sync::Arc;

use serde::Serialize;

use crate::error::{AppError, Result};
use crate::flow::Store;
use crate::todos::{visible_todos, Todo, TodoAction, TodoAppReducer, TodoAppState};

/// Final state after a replay, as printed by `todoflow replay`.
#[derive(Debug, Serialize)]
pub struct ReplayReport {
    pub state: TodoAppState,
    pub visible: Vec<Arc<Todo>>,
    pub dispatched: usize,
}

/// Parse one action per non-blank line.
pub fn parse_actions<R: BufRead>(reader: R) -> Result<Vec<TodoAction>> {
    let mut actions = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let action = serde_json::from_str(&line).map_err(|source| AppError::ActionParse {
            line: index + 1,
            source,
        })?;
        actions.push(action);
    }
    Ok(actions)
}

/// Dispatch `actions` in order to a store preloaded with `initial`.
pub fn replay(initial: TodoAppState, actions: Vec<TodoAction>) -> ReplayReport {
    let store = Store::<TodoAppReducer>::with_state(initial);
    let mut dispatched = 0;
    for action in actions {
        if matches!(action, TodoAction::Unknown) {
            tracing::warn!(index = dispatched, "Replaying unknown action kind");
        }
        store.dispatch(action);
        dispatched += 1;
    }

    let state = store.state();
    let visible = visible_todos(&state.todos, &state.visibility_filter);
    ReplayReport {
        state: TodoAppState::clone(&state),
        visible,
        dispatched,
    }
}

pub fn render_report(report: &ReplayReport) -> Result<String> {
    serde_json::to_string_pretty(report).map_err(AppError::Serialize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_lines_are_skipped() {
        let input = "\n{\"type\":\"TOGGLE_TODO\",\"id\":3}\n   \n";
        let actions = parse_actions(input.as_bytes()).unwrap();
        assert_eq!(actions.len(), 1);
    }

    #[test]
    fn parse_error_reports_line_number() {
        let input = "{\"type\":\"TOGGLE_TODO\",\"id\":3}\n\n{\"type\":\"ADD_TODO\"}\n";
        let err = parse_actions(input.as_bytes()).unwrap_err();
        assert!(matches!(err, AppError::ActionParse { line: 3, .. }));
    }
}
