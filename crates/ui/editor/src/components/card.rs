//! Titled, rounded container. Layout only.

use ratatui::{
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Block, Borders},
};

/// Border block for a form section or field.
///
/// A focused card gets a highlighted border and bold title; a card with a
/// validation error gets a red border.
pub fn card<'a>(title: impl Into<String>, focused: bool, invalid: bool) -> Block<'a> {
    let border = match (focused, invalid) {
        (_, true) => Style::default().fg(Color::Red),
        (true, false) => Style::default().fg(Color::Cyan),
        (false, false) => Style::default().fg(Color::DarkGray),
    };
    let title_style = if focused {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    Block::default()
        .title(Line::from(Span::styled(format!(" {} ", title.into()), title_style)))
        .borders(Borders::ALL)
        .border_set(symbols::border::ROUNDED)
        .border_style(border)
}

/// Height of a card holding `content` lines.
pub fn outer_height(content: u16) -> u16 {
    content.saturating_add(2)
}
