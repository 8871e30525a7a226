use crate::ui::add_todo::state::AddTodoState;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const PLACEHOLDER: &str = "What needs to be done?";

pub struct AddTodoInput<'a> {
    state: &'a AddTodoState,
}

impl<'a> AddTodoInput<'a> {
    pub fn new(state: &'a AddTodoState) -> Self {
        Self { state }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let line = if self.state.is_empty() {
            Line::from(Span::styled(
                PLACEHOLDER,
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM),
            ))
        } else {
            Line::from(Span::styled(
                self.state.text.clone(),
                Style::default().fg(HEADER_TEXT),
            ))
        };

        Paragraph::new(line).block(
            Block::default()
                .title(Span::styled(" Add Todo ", Style::default().fg(ACCENT)))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }

    /// Cursor column relative to the input area's left edge.
    pub fn cursor_offset(&self) -> u16 {
        u16::try_from(self.state.text.chars().count())
            .unwrap_or(u16::MAX)
            .saturating_add(1)
    }
}
