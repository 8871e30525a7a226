use crate::todos::VisibilityFilter;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const HINTS: &str = "Enter: Add │ ↑↓: Select │ Ctrl+T: Toggle │ Ctrl+Q: Quit ";

/// One entry of the "Show:" row.
///
/// The active filter is plain text; the others are links labelled with
/// their function key.
pub struct FilterLink<'a> {
    filter: &'a VisibilityFilter,
    key: u8,
    current: &'a VisibilityFilter,
}

impl<'a> FilterLink<'a> {
    pub fn new(filter: &'a VisibilityFilter, key: u8, current: &'a VisibilityFilter) -> Self {
        Self {
            filter,
            key,
            current,
        }
    }

    pub fn is_active(&self) -> bool {
        self.filter == self.current
    }

    pub fn span(&self) -> Span<'static> {
        if self.is_active() {
            return Span::styled(
                self.filter.label().to_string(),
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
            );
        }
        Span::styled(
            format!("F{} {}", self.key, self.filter.label()),
            Style::default().fg(ACCENT).add_modifier(Modifier::UNDERLINED),
        )
    }
}

pub struct Footer<'a> {
    current: &'a VisibilityFilter,
}

impl<'a> Footer<'a> {
    pub fn new(current: &'a VisibilityFilter) -> Self {
        Self { current }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let mut spans = vec![Span::styled(" Show: ", text_style)];
        for (index, filter) in VisibilityFilter::KNOWN.iter().enumerate() {
            if index > 0 {
                spans.push(Span::styled(" ", text_style));
            }
            spans.push(FilterLink::new(filter, index as u8 + 1, self.current).span());
        }

        // Pad by char count so the hints stay right-aligned with Unicode separators
        let used: usize = spans.iter().map(|span| span.content.chars().count()).sum();
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(used)
            .saturating_sub(HINTS.chars().count());
        spans.push(Span::styled(" ".repeat(padding), text_style));
        spans.push(Span::styled(HINTS, text_style));

        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
