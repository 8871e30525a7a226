use crate::todos::TodoAppState;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_OK};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header<'a> {
    title: &'a str,
}

impl<'a> Header<'a> {
    pub fn new(title: &'a str) -> Self {
        Self { title }
    }

    pub fn widget(&self, state: &TodoAppState) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let done_style = Style::default().fg(STATUS_OK);
        let total = state.todos.len();
        let completed = state.completed_count();
        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled(self.title.to_string(), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("{} items", total), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("{} completed", completed), done_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
