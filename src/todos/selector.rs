use std::sync::Arc;

use super::model::{Todo, VisibilityFilter};

/// Todos the list view should show for `filter`, in their original order.
///
/// Unrecognised filters show everything.
pub fn visible_todos(todos: &[Arc<Todo>], filter: &VisibilityFilter) -> Vec<Arc<Todo>> {
    match filter {
        VisibilityFilter::ShowActive => todos.iter().filter(|t| !t.completed).cloned().collect(),
        VisibilityFilter::ShowCompleted => todos.iter().filter(|t| t.completed).cloned().collect(),
        VisibilityFilter::ShowAll | VisibilityFilter::Other(_) => todos.to_vec(),
    }
}
