use crate::country::CountryRecord;
use crate::ui::layout::Grid;
use crate::ui::theme::{ACCENT, CARD_BORDER, MUTED_TEXT, PRIMARY_TEXT, SELECTED_BACKGROUND};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

/// Draw the current page as a grid of cards.
pub fn render_cards(
    frame: &mut Frame<'_>,
    body: Rect,
    items: &[&CountryRecord],
    selected: Option<usize>,
) {
    if items.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            " No countries match the current search.",
            Style::default().fg(MUTED_TEXT),
        )));
        frame.render_widget(empty, body);
        return;
    }

    let grid = Grid::new(body, selected);
    for index in grid.visible_range(items.len()) {
        let area = grid.card_rect(body, index);
        if area.width < 3 || area.height < 3 {
            continue;
        }
        frame.render_widget(card(items[index], selected == Some(index)), area);
    }
}

fn card(record: &CountryRecord, highlight: bool) -> Paragraph<'_> {
    let label = Style::default().fg(MUTED_TEXT);
    let value = Style::default().fg(PRIMARY_TEXT);

    let title = if record.flag.emoji.is_empty() {
        format!(" {} ", record.name)
    } else {
        format!(" {} {} ", record.flag.emoji, record.name)
    };

    let lines = vec![
        Line::from(vec![
            Span::styled("Capital: ", label),
            Span::styled(record.capital.as_str(), value),
        ]),
        Line::from(vec![
            Span::styled("Population: ", label),
            Span::styled(record.population_text(), value),
        ]),
        Line::from(vec![
            Span::styled("Area: ", label),
            Span::styled(record.area_text(), value),
        ]),
    ];

    let (border, background) = if highlight {
        (Style::default().fg(ACCENT), Style::default().bg(SELECTED_BACKGROUND))
    } else {
        (Style::default().fg(CARD_BORDER), Style::default())
    };

    Paragraph::new(lines).style(background).block(
        Block::default()
            .title(Span::styled(
                title,
                Style::default().fg(PRIMARY_TEXT).add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_style(border),
    )
}
