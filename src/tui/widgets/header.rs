use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::tui::theme;

pub fn render(frame: &mut Frame, area: Rect, city: Option<&str>, date_label: &str) {
    let title_line = Line::from(vec![
        Span::styled("  🕌  ", theme::gold().add_modifier(Modifier::BOLD)),
        Span::styled("salat", theme::gold()),
    ]);

    let city_span = match city {
        Some(c) => Span::styled(c.to_string(), theme::amber().add_modifier(Modifier::BOLD)),
        None => Span::styled("No city selected", theme::dim()),
    };

    let date_line = Line::from(vec![
        city_span,
        Span::styled("  ·  ", theme::dim()),
        Span::styled(date_label.to_string(), theme::dim()),
    ]);

    let text = vec![title_line, Line::from(""), date_line];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::gold().add_modifier(Modifier::BOLD))
        .style(theme::base());

    let paragraph = Paragraph::new(text)
        .block(block)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}
