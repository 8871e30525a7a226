use crate::flow::Action;

#[derive(Debug, Clone)]
pub enum AddTodoIntent {
    Insert(char),
    /// Bracketed paste. Line breaks are dropped.
    Paste(String),
    Backspace,
    /// Input was submitted or abandoned.
    Clear,
}

impl Action for AddTodoIntent {}
