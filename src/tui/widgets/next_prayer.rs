use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::models::PrayerName;
use crate::tui::theme;
use crate::utils::format::format_countdown;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    next_prayer: Option<(PrayerName, i64)>,
    has_times: bool,
) {
    let block = Block::default()
        .title(Span::styled(" Next Prayer ", theme::gold()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(ratatui::style::Style::default().fg(crate::tui::theme::BORDER))
        .style(theme::surface());

    let content: Vec<Line> = match next_prayer {
        None if !has_times => vec![
            Line::from(""),
            Line::from(Span::styled("  No data", theme::dim())),
        ],
        None => vec![
            Line::from(""),
            Line::from(Span::styled("  All prayers have passed", theme::dim())),
        ],
        Some((prayer, minutes)) => {
            let name = prayer.as_str().to_uppercase();
            vec![
                Line::from(""),
                Line::from(Span::styled(
                    format!("  {} {}", prayer.icon(), name),
                    theme::gold().add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from(vec![
                    Span::styled("  in  ", theme::dim()),
                    Span::styled(
                        format_countdown(minutes),
                        theme::amber().add_modifier(Modifier::BOLD),
                    ),
                ]),
            ]
        }
    };

    let paragraph = Paragraph::new(content)
        .block(block)
        .alignment(Alignment::Left);

    frame.render_widget(paragraph, area);
}
