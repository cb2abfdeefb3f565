use crate::ui::app::App;
use crate::ui::cards::render_cards;
use crate::ui::detail::render_detail;
use crate::ui::directory::LoadState;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::theme::{ERROR_TEXT, MUTED_TEXT};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Paragraph};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let state = app.directory();

    frame.render_widget(Header::new(&state.filter).widget(), header);
    frame.render_widget(Clear, body);

    match &state.load {
        LoadState::Pending => {
            let loading = Paragraph::new(Line::from(Span::styled(
                " Loading...",
                Style::default().fg(MUTED_TEXT),
            )));
            frame.render_widget(loading, body);
            frame.render_widget(Footer::new(None).widget(footer), footer);
        }
        LoadState::Failed { message } => {
            let error = Paragraph::new(Line::from(Span::styled(
                format!(" Error: {}", message),
                Style::default().fg(ERROR_TEXT),
            )));
            frame.render_widget(error, body);
            frame.render_widget(Footer::new(None).widget(footer), footer);
        }
        LoadState::Loaded(_) => {
            let page = state.page();
            let selected = state.selected_index(page.items.len());
            render_cards(frame, body, &page.items, selected);
            frame.render_widget(Footer::new(Some(&page)).widget(footer), footer);

            if state.detail_open {
                if let Some(record) = selected.and_then(|index| page.items.get(index)) {
                    render_detail(frame, body, record);
                }
            }
        }
    }
}
