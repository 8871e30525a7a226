//! Action creators and id generation.
//!
//! Ids come from an [`IdGenerator`] owned by whoever creates actions, so the
//! reducers never hold hidden counters.

use super::action::TodoAction;
use super::model::{TodoId, VisibilityFilter};

pub trait IdGenerator {
    fn next_id(&mut self) -> TodoId;
}

/// Hands out consecutive ids starting from `first`.
#[derive(Debug, Clone, Default)]
pub struct SequentialIds {
    next: u64,
}

impl SequentialIds {
    pub fn starting_at(first: u64) -> Self {
        Self { next: first }
    }

    /// The id the next call to [`IdGenerator::next_id`] will return.
    pub fn peek(&self) -> TodoId {
        TodoId(self.next)
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> TodoId {
        let id = TodoId(self.next);
        self.next += 1;
        id
    }
}

pub fn add_todo(ids: &mut impl IdGenerator, text: impl Into<String>) -> TodoAction {
    TodoAction::AddTodo {
        id: ids.next_id(),
        text: text.into(),
    }
}

pub fn toggle_todo(id: TodoId) -> TodoAction {
    TodoAction::ToggleTodo { id }
}

pub fn set_visibility_filter(filter: VisibilityFilter) -> TodoAction {
    TodoAction::SetVisibilityFilter { filter }
}
