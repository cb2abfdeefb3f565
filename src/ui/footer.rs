use crate::ui::directory::Page;
use crate::ui::theme::{ACCENT, CARD_BORDER, PRIMARY_TEXT};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const HINTS: &str = " Type: Search │ ←/→: Region │ ↑/↓: Select │ Enter: Details │ Ctrl+N: Load More │ Esc: Quit";

/// Key hints, match counter and the Load More control.
pub struct Footer {
    shown: usize,
    total: usize,
    has_more: bool,
}

impl Footer {
    pub fn new(page: Option<&Page<'_>>) -> Self {
        match page {
            Some(page) => Self {
                shown: page.items.len(),
                total: page.total_matches,
                has_more: page.has_more(),
            },
            None => Self {
                shown: 0,
                total: 0,
                has_more: false,
            },
        }
    }

    pub fn status_text(&self) -> String {
        format!("Showing {} of {}", self.shown, self.total)
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let text_style = Style::default().fg(PRIMARY_TEXT).add_modifier(Modifier::DIM);
        let button_style = if self.has_more {
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
        } else {
            text_style
        };

        let status = format!("{}  ", self.status_text());
        let button = "[ Load More ] ";

        // Char count, not byte count (box-drawing glyphs)
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(HINTS.chars().count())
            .saturating_sub(status.chars().count())
            .saturating_sub(button.chars().count());

        let line = Line::from(vec![
            Span::styled(HINTS, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(status, Style::default().fg(PRIMARY_TEXT)),
            Span::styled(button, button_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(CARD_BORDER)),
        )
    }
}
