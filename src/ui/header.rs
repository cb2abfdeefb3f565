use crate::ui::directory::FilterState;
use crate::ui::theme::{ACCENT, CARD_BORDER, DIVIDER, MUTED_TEXT, PRIMARY_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Title, search box and region selector.
pub struct Header<'a> {
    filter: &'a FilterState,
}

impl<'a> Header<'a> {
    pub fn new(filter: &'a FilterState) -> Self {
        Self { filter }
    }

    pub fn widget(&self) -> Paragraph<'a> {
        let text_style = Style::default().fg(PRIMARY_TEXT);
        let separator_style = Style::default().fg(DIVIDER);
        let label_style = Style::default().fg(MUTED_TEXT);

        let query = if self.filter.query.is_empty() {
            Span::styled("Search for...", label_style.add_modifier(Modifier::DIM))
        } else {
            Span::styled(self.filter.query.as_str(), text_style)
        };

        let line = Line::from(vec![
            Span::styled(" Countries", Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)),
            Span::styled("  │  ", separator_style),
            Span::styled("🔍 ", label_style),
            query,
            Span::styled("▏", Style::default().fg(ACCENT)),
            Span::styled("  │  ", separator_style),
            Span::styled("◀ ", label_style),
            Span::styled(region_label(&self.filter.region), text_style),
            Span::styled(" ▶", label_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(CARD_BORDER)),
        )
    }
}

/// Label of the region selector for the active filter.
pub fn region_label(region: &str) -> String {
    if region.is_empty() {
        "Filter By Region".to_string()
    } else {
        format!("Filter By {}", region)
    }
}
