//! Pure reducers for the todo application.
//!
//! `root_reducer` composes `todos` and `visibility_filter` field by field;
//! `todos` delegates per-item work to `todo`. None of them mutate shared
//! data: a toggle allocates a new `Arc<Todo>` for the matching item only,
//! every other item keeps its existing `Arc`.

use std::sync::Arc;

use super::action::TodoAction;
use super::model::{Todo, TodoAppState, TodoList, VisibilityFilter};
use crate::flow::Reducer;

/// Reduce a single item.
///
/// `ADD_TODO` ignores `state` and creates the item. `TOGGLE_TODO` flips
/// `completed` when the ids match and returns `state` untouched otherwise.
pub fn todo(state: Option<Arc<Todo>>, action: &TodoAction) -> Option<Arc<Todo>> {
    match action {
        TodoAction::AddTodo { id, text } => Some(Arc::new(Todo::new(*id, text.clone()))),
        TodoAction::ToggleTodo { id } => match state {
            Some(item) if item.id == *id => Some(Arc::new(Todo {
                completed: !item.completed,
                ..Todo::clone(&item)
            })),
            other => other,
        },
        _ => state,
    }
}

/// Reduce the todo list. New items are appended.
pub fn todos(state: TodoList, action: &TodoAction) -> TodoList {
    match action {
        TodoAction::AddTodo { .. } => {
            let mut next = state;
            next.extend(todo(None, action));
            next
        }
        TodoAction::ToggleTodo { .. } => state
            .into_iter()
            .filter_map(|item| todo(Some(item), action))
            .collect(),
        _ => state,
    }
}

/// Reduce the visibility filter. Any filter value is accepted as-is.
pub fn visibility_filter(state: VisibilityFilter, action: &TodoAction) -> VisibilityFilter {
    match action {
        TodoAction::SetVisibilityFilter { filter } => filter.clone(),
        _ => state,
    }
}

/// Compose the field reducers. Neither field's transition depends on the
/// other field.
pub fn root_reducer(state: TodoAppState, action: &TodoAction) -> TodoAppState {
    TodoAppState {
        todos: todos(state.todos, action),
        visibility_filter: visibility_filter(state.visibility_filter, action),
    }
}

pub struct TodoAppReducer;

impl Reducer for TodoAppReducer {
    type State = TodoAppState;
    type Action = TodoAction;

    fn reduce(state: Self::State, action: Self::Action) -> Self::State {
        tracing::debug!(
            action = action.kind(),
            todos = state.todos.len(),
            "Reducing action"
        );
        root_reducer(state, &action)
    }
}
