use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem},
    Frame,
};

use crate::models::{DailyCompletion, PrayerName, PrayerTimes};
use crate::tui::theme;
use crate::utils::format::{format_time, pad_display};

pub fn render(
    frame: &mut Frame,
    area: Rect,
    times: Option<&PrayerTimes>,
    completion: &DailyCompletion,
    next: Option<PrayerName>,
    focused_idx: usize,
    focused: bool,
) {
    let block = Block::default()
        .title(Span::styled(" Prayers ", theme::gold()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            theme::gold()
        } else {
            ratatui::style::Style::default().fg(crate::tui::theme::BORDER)
        })
        .style(theme::surface());

    let items: Vec<ListItem> = PrayerName::ALL
        .iter()
        .enumerate()
        .map(|(i, &prayer)| {
            let is_focused = focused && i == focused_idx;
            let is_next = next == Some(prayer);
            let done = completion.is_done(prayer);

            let time_str = times
                .map(|t| format_time(t.at(prayer)))
                .unwrap_or_else(|| "--:--".to_string());

            let (checkbox, check_style) = if done {
                ("[x]", theme::green())
            } else {
                ("[ ]", theme::dim())
            };

            let name_style = if is_focused {
                theme::gold().add_modifier(Modifier::BOLD)
            } else if is_next {
                theme::amber().add_modifier(Modifier::BOLD)
            } else {
                theme::bold()
            };

            let mut spans = vec![
                Span::raw(format!("  {} ", pad_display(prayer.icon(), 2))),
                Span::styled(format!("{:<9}", prayer.as_str()), name_style),
                Span::styled(format!("{:<7}", time_str), theme::dim()),
                Span::styled(checkbox, check_style),
            ];
            if is_next {
                spans.push(Span::styled("  ◀ next", theme::amber()));
            }

            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items).block(block);
    frame.render_widget(list, area);
}
