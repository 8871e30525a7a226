use crate::todos::visible_todos;
use crate::ui::add_todo::AddTodoInput;
use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::todo_list::TodoListView;
use ratatui::layout::Position;
use ratatui::widgets::{Clear, ListState};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let regions = layout_regions(area);
    let state = app.state();

    frame.render_widget(Header::new(app.title()).widget(&state), regions.header);

    let input = AddTodoInput::new(app.input());
    frame.render_widget(input.widget(), regions.input);
    if regions.input.width > 2 && regions.input.height > 2 {
        let max_x = regions.input.width.saturating_sub(2);
        let x = regions.input.x + input.cursor_offset().min(max_x);
        frame.set_cursor_position(Position::new(x, regions.input.y + 1));
    }

    let visible = visible_todos(&state.todos, &state.visibility_filter);
    frame.render_widget(Clear, regions.list);
    let mut list_state = ListState::default();
    if !visible.is_empty() {
        list_state.select(Some(app.selected()));
    }
    frame.render_stateful_widget(TodoListView::new(&visible).widget(), regions.list, &mut list_state);

    let footer = Footer::new(&state.visibility_filter);
    frame.render_widget(footer.widget(regions.footer), regions.footer);
}
