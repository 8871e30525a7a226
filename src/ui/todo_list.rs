use crate::todos::Todo;
use crate::ui::theme::{ACTIVE_HIGHLIGHT, COMPLETED_TEXT, GLOBAL_BORDER, HEADER_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, List, ListItem};
use std::sync::Arc;

/// Presentational list of todos. Completed items are struck through.
pub struct TodoListView<'a> {
    todos: &'a [Arc<Todo>],
}

impl<'a> TodoListView<'a> {
    pub fn new(todos: &'a [Arc<Todo>]) -> Self {
        Self { todos }
    }

    pub fn widget(&self) -> List<'static> {
        let items: Vec<ListItem<'static>> = self.todos.iter().map(|todo| todo_item(todo)).collect();
        List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
            .highlight_style(Style::default().bg(ACTIVE_HIGHLIGHT))
            .highlight_symbol("› ")
    }
}

fn todo_item(todo: &Todo) -> ListItem<'static> {
    let (marker, style) = if todo.completed {
        (
            "[x]",
            Style::default()
                .fg(COMPLETED_TEXT)
                .add_modifier(Modifier::CROSSED_OUT),
        )
    } else {
        ("[ ]", Style::default().fg(HEADER_TEXT))
    };
    ListItem::new(Line::styled(format!("{} {}", marker, todo.text), style))
}
