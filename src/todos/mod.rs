//! Todo domain: state model, actions, reducers and the visible-todo selector.

mod action;
mod creators;
mod model;
mod reducer;
mod selector;

pub use action::TodoAction;
pub use creators::{add_todo, set_visibility_filter, toggle_todo, IdGenerator, SequentialIds};
pub use model::{Todo, TodoAppState, TodoId, TodoList, VisibilityFilter};
pub use reducer::{root_reducer, todo, todos, visibility_filter, TodoAppReducer};
pub use selector::visible_todos;
