use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::model::{TodoId, VisibilityFilter};
use crate::flow::Action;

/// Actions understood by the todo reducers.
///
/// The serialized form is tagged by `type`, e.g.
/// `{"type":"ADD_TODO","id":0,"text":"Learn Redux"}`. An unrecognised,
/// missing or non-string `type` deserializes to [`TodoAction::Unknown`],
/// which every reducer ignores. A recognised `type` with bad fields is
/// still an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TodoAction {
    AddTodo { id: TodoId, text: String },
    ToggleTodo { id: TodoId },
    SetVisibilityFilter { filter: VisibilityFilter },
    Unknown,
}

/// Decoding form of [`TodoAction`] once `type` is known to be a string.
#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
enum TaggedAction {
    AddTodo { id: TodoId, text: String },
    ToggleTodo { id: TodoId },
    SetVisibilityFilter { filter: VisibilityFilter },
    #[serde(other)]
    Unknown,
}

impl From<TaggedAction> for TodoAction {
    fn from(action: TaggedAction) -> Self {
        match action {
            TaggedAction::AddTodo { id, text } => TodoAction::AddTodo { id, text },
            TaggedAction::ToggleTodo { id } => TodoAction::ToggleTodo { id },
            TaggedAction::SetVisibilityFilter { filter } => {
                TodoAction::SetVisibilityFilter { filter }
            }
            TaggedAction::Unknown => TodoAction::Unknown,
        }
    }
}

impl<'de> Deserialize<'de> for TodoAction {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        if !value.get("type").is_some_and(Value::is_string) {
            return Ok(TodoAction::Unknown);
        }
        serde_json::from_value::<TaggedAction>(value)
            .map(TodoAction::from)
            .map_err(de::Error::custom)
    }
}

impl Action for TodoAction {}

impl TodoAction {
    /// Wire name of the action kind.
    pub fn kind(&self) -> &'static str {
        match self {
            TodoAction::AddTodo { .. } => "ADD_TODO",
            TodoAction::ToggleTodo { .. } => "TOGGLE_TODO",
            TodoAction::SetVisibilityFilter { .. } => "SET_VISIBILITY_FILTER",
            TodoAction::Unknown => "UNKNOWN",
        }
    }
}
