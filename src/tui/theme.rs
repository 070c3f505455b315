use ratatui::style::{Color, Modifier, Style};

// Night palette: deep indigo ground, lamp gold accents
pub const BG: Color = Color::Rgb(14, 16, 26);
pub const SURFACE: Color = Color::Rgb(22, 25, 40);
pub const BORDER: Color = Color::Rgb(48, 54, 82);
pub const TEXT: Color = Color::Rgb(226, 222, 208);
pub const TEXT_DIM: Color = Color::Rgb(120, 124, 150);
pub const GOLD: Color = Color::Rgb(212, 175, 90);
pub const GREEN: Color = Color::Rgb(96, 168, 120);
pub const AMBER: Color = Color::Rgb(224, 146, 72);
pub const EMPTY: Color = Color::Rgb(34, 38, 58);

pub fn base() -> Style {
    Style::default().fg(TEXT).bg(BG)
}

pub fn dim() -> Style {
    Style::default().fg(TEXT_DIM)
}

pub fn gold() -> Style {
    Style::default().fg(GOLD)
}

pub fn green() -> Style {
    Style::default().fg(GREEN)
}

pub fn amber() -> Style {
    Style::default().fg(AMBER)
}

pub fn bold() -> Style {
    Style::default().fg(TEXT).add_modifier(Modifier::BOLD)
}

pub fn surface() -> Style {
    Style::default().fg(TEXT).bg(SURFACE)
}
