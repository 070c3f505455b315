use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

use crate::tui::theme;

pub fn render_bar(frame: &mut Frame, area: Rect, query: &str, active: bool) {
    let block = Block::default()
        .title(Span::styled(" City ", theme::gold()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if active {
            theme::gold()
        } else {
            ratatui::style::Style::default().fg(theme::BORDER)
        })
        .style(theme::surface());

    let line = if active {
        Line::from(vec![
            Span::styled(" ", theme::dim()),
            Span::styled(query.to_string(), theme::gold().add_modifier(Modifier::BOLD)),
            Span::styled("█", theme::amber()), // block cursor
        ])
    } else {
        Line::from(Span::styled(" Press / to search a city", theme::dim()))
    };

    frame.render_widget(Paragraph::new(line).block(block), area);
}

pub fn render_suggestions(frame: &mut Frame, area: Rect, suggestions: &[String], selected: usize) {
    frame.render_widget(Clear, area);

    let items: Vec<ListItem> = suggestions
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let style = if i == selected {
                theme::gold().add_modifier(Modifier::BOLD)
            } else {
                theme::bold()
            };
            let marker = if i == selected { " ▸ " } else { "   " };
            ListItem::new(Line::from(vec![
                Span::styled(marker, theme::amber()),
                Span::styled(name.clone(), style),
            ]))
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::amber())
        .style(theme::surface());

    frame.render_widget(List::new(items).block(block), area);
}
