use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols,
    widgets::{Block, Borders, Clear},
};

use crate::{components::Component, tui::Frame};

/// Popup components and helpers.
///
/// Usage inside `EditorApp::render`:
/// 1) draw the page
/// 2) if a popup is active and modal, `render_backdrop(frame, area)`
/// 3) let the popup draw itself; it centers its dialog with
///    `centered_rect_fixed` and frames it with `draw_popup_frame`
pub trait PopupComponent: Component {
    /// Whether the popup blocks page interactions. Defaults to true.
    fn is_modal(&self) -> bool {
        true
    }
}

/// Simulated dim overlay; terminals have no transparency.
pub fn render_backdrop(frame: &mut Frame<'_>, area: Rect) {
    let backdrop = Block::default().style(Style::default().bg(Color::Black));
    frame.render_widget(backdrop, area);
}

/// Centered rectangle of the given size, clamped to `area`.
pub fn centered_rect_fixed(area: Rect, width: u16, height: u16) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);

    let x = area.x.saturating_add((area.width.saturating_sub(w)) / 2);
    let y = area.y.saturating_add((area.height.saturating_sub(h)) / 2);

    Rect {
        x,
        y,
        width: w,
        height: h,
    }
}

/// Clear `area` and draw a rounded, titled dialog shell. Returns the inner
/// content rect.
pub fn draw_popup_frame(frame: &mut Frame<'_>, area: Rect, title: impl Into<String>) -> Rect {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", title.into()))
        .borders(Borders::ALL)
        .border_set(symbols::border::ROUNDED)
        .style(Style::default().fg(Color::White).bg(Color::Black));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}
