use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::flow::State;

/// Identifier of a todo item, assigned by an [`IdGenerator`](super::IdGenerator).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(pub u64);

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single todo item. Only `completed` ever changes, and only by producing
/// a new value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    pub text: String,
    pub completed: bool,
}

impl Todo {
    pub fn new(id: TodoId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
        }
    }
}

/// Todos in insertion order. Unchanged items are shared between states.
pub type TodoList = Vec<Arc<Todo>>;

/// Which todos the list view shows.
///
/// Unrecognised filter names are kept verbatim in `Other` and behave like
/// `ShowAll` when selecting. A non-string value is kept as its JSON text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "serde_json::Value", into = "String")]
pub enum VisibilityFilter {
    #[default]
    ShowAll,
    ShowActive,
    ShowCompleted,
    Other(String),
}

impl VisibilityFilter {
    /// The filters offered by the footer, in display order.
    pub const KNOWN: [VisibilityFilter; 3] = [
        VisibilityFilter::ShowAll,
        VisibilityFilter::ShowActive,
        VisibilityFilter::ShowCompleted,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            VisibilityFilter::ShowAll => "SHOW_ALL",
            VisibilityFilter::ShowActive => "SHOW_ACTIVE",
            VisibilityFilter::ShowCompleted => "SHOW_COMPLETED",
            VisibilityFilter::Other(name) => name,
        }
    }

    /// Short label used by filter links.
    pub fn label(&self) -> &str {
        match self {
            VisibilityFilter::ShowAll => "All",
            VisibilityFilter::ShowActive => "Active",
            VisibilityFilter::ShowCompleted => "Completed",
            VisibilityFilter::Other(name) => name,
        }
    }
}

impl From<String> for VisibilityFilter {
    fn from(value: String) -> Self {
        match value.as_str() {
            "SHOW_ALL" => VisibilityFilter::ShowAll,
            "SHOW_ACTIVE" => VisibilityFilter::ShowActive,
            "SHOW_COMPLETED" => VisibilityFilter::ShowCompleted,
            _ => VisibilityFilter::Other(value),
        }
    }
}

impl From<serde_json::Value> for VisibilityFilter {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::String(name) => VisibilityFilter::from(name),
            other => VisibilityFilter::Other(other.to_string()),
        }
    }
}

impl From<VisibilityFilter> for String {
    fn from(value: VisibilityFilter) -> Self {
        match value {
            VisibilityFilter::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl FromStr for VisibilityFilter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(VisibilityFilter::from(s.to_string()))
    }
}

impl fmt::Display for VisibilityFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Root state of the todo application.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoAppState {
    pub todos: TodoList,
    pub visibility_filter: VisibilityFilter,
}

impl State for TodoAppState {}

impl TodoAppState {
    pub fn completed_count(&self) -> usize {
        self.todos.iter().filter(|todo| todo.completed).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_names_round_trip() {
        for filter in VisibilityFilter::KNOWN {
            let name = String::from(filter.clone());
            assert_eq!(VisibilityFilter::from(name), filter);
        }
    }

    #[test]
    fn unknown_filter_is_kept_verbatim() {
        let filter: VisibilityFilter = "SHOW_STARRED".parse().unwrap();
        assert_eq!(filter, VisibilityFilter::Other("SHOW_STARRED".to_string()));
        assert_eq!(filter.to_string(), "SHOW_STARRED");
    }

    #[test]
    fn non_string_filter_keeps_json_text() {
        let filter: VisibilityFilter = serde_json::from_str("3").unwrap();
        assert_eq!(filter, VisibilityFilter::Other("3".to_string()));
        let filter: VisibilityFilter = serde_json::from_str(r#""SHOW_ACTIVE""#).unwrap();
        assert_eq!(filter, VisibilityFilter::ShowActive);
    }

    #[test]
    fn initial_state_is_empty_and_shows_all() {
        let state = TodoAppState::default();
        assert!(state.todos.is_empty());
        assert_eq!(state.visibility_filter, VisibilityFilter::ShowAll);
    }

    #[test]
    fn state_serializes_with_camel_case_filter_field() {
        let state = TodoAppState {
            todos: vec![Arc::new(Todo::new(TodoId(0), "Learn Redux"))],
            visibility_filter: VisibilityFilter::ShowActive,
        };
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "todos": [{"id": 0, "text": "Learn Redux", "completed": false}],
                "visibilityFilter": "SHOW_ACTIVE"
            })
        );
    }
}
