use crate::config::Config;
use crate::flow::{Reducer, Store};
use crate::todos::{
    add_todo, set_visibility_filter, toggle_todo, visible_todos, SequentialIds, Todo, TodoAction,
    TodoAppReducer, TodoAppState, TodoId, VisibilityFilter,
};
use crate::ui::add_todo::{AddTodoIntent, AddTodoReducer, AddTodoState};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Local MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_local {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Container for the todo screen.
///
/// Owns the store and the id generator, turns user input into actions and
/// exposes the derived view state to the renderer. Store subscribers mark
/// the screen dirty; the runtime redraws when [`App::take_redraw`] is set.
pub struct App {
    should_quit: bool,
    store: Store<TodoAppReducer>,
    ids: SequentialIds,
    /// Add-todo input (MVI pattern).
    input: AddTodoState,
    /// Index into the visible todos.
    selected: usize,
    title: String,
    redraw: Arc<AtomicBool>,
}

impl App {
    pub fn new(config: &Config) -> Self {
        let initial = TodoAppState {
            visibility_filter: config.defaults.visibility_filter.clone(),
            ..TodoAppState::default()
        };
        let store = Store::<TodoAppReducer>::with_state(initial);
        let redraw = Arc::new(AtomicBool::new(true));
        let flag = Arc::clone(&redraw);
        store.subscribe(move |_: &TodoAppState| {
            flag.store(true, Ordering::Release);
        });

        Self {
            should_quit: false,
            store,
            ids: SequentialIds::starting_at(config.defaults.first_id),
            input: AddTodoState::default(),
            selected: 0,
            title: config.ui.title.clone(),
            redraw,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn state(&self) -> Arc<TodoAppState> {
        self.store.state()
    }

    pub fn store(&self) -> &Store<TodoAppReducer> {
        &self.store
    }

    pub fn visible(&self) -> Vec<Arc<Todo>> {
        let state = self.store.state();
        visible_todos(&state.todos, &state.visibility_filter)
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_todo(&self) -> Option<TodoId> {
        self.visible().get(self.selected).map(|todo| todo.id)
    }

    pub fn input(&self) -> &AddTodoState {
        &self.input
    }

    /// Returns true once per batch of state changes.
    pub fn take_redraw(&self) -> bool {
        self.redraw.swap(false, Ordering::AcqRel)
    }

    pub fn mark_dirty(&self) {
        self.redraw.store(true, Ordering::Release);
    }

    pub fn edit_input(&mut self, intent: AddTodoIntent) {
        dispatch_local!(self, input, AddTodoReducer, intent);
        self.mark_dirty();
    }

    /// Dispatch `ADD_TODO` with the current input text and clear the input.
    pub fn submit_input(&mut self) {
        let text = std::mem::take(&mut self.input).text;
        tracing::info!(next_id = %self.ids.peek(), "Adding todo");
        let action = add_todo(&mut self.ids, text);
        self.dispatch(action);
        self.edit_input(AddTodoIntent::Clear);
    }

    pub fn toggle_selected(&mut self) {
        match self.selected_todo() {
            Some(id) => self.dispatch(toggle_todo(id)),
            None => tracing::warn!("Toggle requested with no visible todo selected"),
        }
    }

    pub fn set_filter(&mut self, filter: VisibilityFilter) {
        self.dispatch(set_visibility_filter(filter));
    }

    pub fn move_selection(&mut self, delta: isize) {
        let len = self.visible().len();
        if len == 0 {
            self.selected = 0;
            return;
        }
        let current = self.selected as isize;
        self.selected = (current + delta).clamp(0, len as isize - 1) as usize;
        self.mark_dirty();
    }

    fn dispatch(&mut self, action: TodoAction) {
        let state = self.store.dispatch(action);
        let len = visible_todos(&state.todos, &state.visibility_filter).len();
        self.selected = self.selected.min(len.saturating_sub(1));
    }
}
