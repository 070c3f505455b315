use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use crate::tui::notify::Toast;
use crate::tui::theme;

/// Pinned to the top-right corner of `area`.
pub fn render(frame: &mut Frame, area: Rect, toast: &Toast) {
    let width = (toast.body.chars().count() as u16 + 6).max(24).min(area.width);
    let popup_area = Rect {
        x: area.x + area.width.saturating_sub(width + 1),
        y: area.y + 1,
        width,
        height: 4.min(area.height),
    };

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(Span::styled(format!(" 🕌 {} ", toast.title), theme::gold()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::amber())
        .style(theme::surface());

    let text = vec![
        Line::from(Span::styled(
            format!("  {}", toast.body),
            theme::amber().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled("  [any key] dismiss", theme::dim())),
    ];

    frame.render_widget(Paragraph::new(text).block(block), popup_area);
}
