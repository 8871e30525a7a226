use crate::flow::State;

/// Text currently typed into the add-todo input.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AddTodoState {
    pub text: String,
}

impl State for AddTodoState {}

impl AddTodoState {
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
