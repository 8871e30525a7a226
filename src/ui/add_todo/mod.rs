mod intent;
mod reducer;
mod state;
mod view;

pub use intent::AddTodoIntent;
pub use reducer::AddTodoReducer;
pub use state::AddTodoState;
pub use view::AddTodoInput;
