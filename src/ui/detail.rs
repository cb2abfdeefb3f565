use crate::country::CountryRecord;
use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::{ACCENT, MUTED_TEXT, POPUP_BORDER, PRIMARY_TEXT};
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

const DIALOG_WIDTH: u16 = 64;

/// Lines shown in the detail popup for `record`.
pub fn detail_lines(record: &CountryRecord) -> Vec<(&'static str, String)> {
    let mut rows = vec![("Name", record.name.clone())];
    if let Some(official) = &record.official_name {
        rows.push(("Official name", official.clone()));
    }
    rows.push(("Capital", record.capital.clone()));
    rows.push(("Region", record.region.clone()));
    if let Some(subregion) = &record.subregion {
        rows.push(("Subregion", subregion.clone()));
    }
    rows.push(("Population", record.population_text()));
    rows.push(("Area", record.area_text()));
    let codes = match &record.alpha2_code {
        Some(alpha2) => format!("{} / {}", alpha2, record.alpha3_code),
        None => record.alpha3_code.clone(),
    };
    rows.push(("Codes", codes));
    let borders = if record.borders.is_empty() {
        "none".to_string()
    } else {
        record.borders.join(", ")
    };
    rows.push(("Borders", borders));
    if !record.flag.svg_file.is_empty() {
        rows.push(("Flag (svg)", record.flag.svg_file.clone()));
    }
    if !record.flag.large.is_empty() {
        rows.push(("Flag (png)", record.flag.large.clone()));
    }
    rows
}

pub fn render_detail(frame: &mut Frame<'_>, body: Rect, record: &CountryRecord) {
    let lines: Vec<Line> = detail_lines(record)
        .into_iter()
        .map(|(label, value)| {
            Line::from(vec![
                Span::styled(format!(" {:<14}", label), Style::default().fg(MUTED_TEXT)),
                Span::styled(value, Style::default().fg(PRIMARY_TEXT)),
            ])
        })
        .collect();

    let height = lines.len().saturating_add(2) as u16;
    let area = centered_rect_by_size(body, DIALOG_WIDTH, height);
    let title = format!(" {} {} ", record.flag.emoji, record.name);

    frame.render_widget(Clear, area);
    let popup = Block::default()
        .title(Span::styled(title, Style::default().fg(ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(popup),
        area,
    );
}
