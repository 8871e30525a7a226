use crate::flow::Reducer;
use crate::ui::add_todo::intent::AddTodoIntent;
use crate::ui::add_todo::state::AddTodoState;

pub struct AddTodoReducer;

impl Reducer for AddTodoReducer {
    type State = AddTodoState;
    type Action = AddTodoIntent;

    fn reduce(state: Self::State, intent: Self::Action) -> Self::State {
        match intent {
            AddTodoIntent::Insert(ch) if !ch.is_control() => {
                let mut text = state.text;
                text.push(ch);
                AddTodoState { text }
            }
            AddTodoIntent::Insert(_) => state,
            AddTodoIntent::Paste(pasted) => {
                let mut text = state.text;
                text.extend(pasted.chars().filter(|ch| !ch.is_control()));
                AddTodoState { text }
            }
            AddTodoIntent::Backspace => {
                let mut text = state.text;
                text.pop();
                AddTodoState { text }
            }
            AddTodoIntent::Clear => AddTodoState::default(),
        }
    }
}
