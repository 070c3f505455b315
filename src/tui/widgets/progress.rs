use ratatui::{
    layout::Rect,
    widgets::{Block, BorderType, Borders, Gauge},
    Frame,
};

use crate::schedule::Progress;
use crate::tui::theme;

pub fn render(frame: &mut Frame, area: Rect, progress: Progress) {
    let block = Block::default()
        .title(ratatui::text::Span::styled(" Today ", theme::gold()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(ratatui::style::Style::default().fg(theme::BORDER))
        .style(theme::surface());

    let gauge = Gauge::default()
        .block(block)
        .gauge_style(theme::green().bg(theme::EMPTY))
        .ratio(progress.ratio().clamp(0.0, 1.0))
        .label(format!(
            "{}/{} prayers completed",
            progress.completed, progress.total
        ));

    frame.render_widget(gauge, area);
}
