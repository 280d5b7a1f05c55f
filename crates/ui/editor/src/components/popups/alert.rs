use color_eyre::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span, Text},
    widgets::Paragraph,
};

use crate::{
    action::{Action, PopupResult},
    components::Component,
    core::state::FormState,
    tui::{EventResponse, Frame},
};

use super::{PopupComponent, centered_rect_fixed, draw_popup_frame};

/// Modal message box with a title and a (possibly long) message.
///
/// - Enter / Esc: acknowledge (`PopupResult::Acknowledged`)
/// - Up / Down: scroll messages taller than the dialog
pub struct AlertPopup {
    title: String,
    message: String,
    scroll: u16,
    min_width: u16,
    min_height: u16,
}

impl AlertPopup {
    pub fn new<T: Into<String>, M: Into<String>>(title: T, message: M) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            scroll: 0,
            min_width: 60,
            min_height: 7,
        }
    }

    pub fn min_width(mut self, w: u16) -> Self {
        self.min_width = w.max(20);
        self
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    fn line_count(&self) -> u16 {
        self.message.lines().count() as u16
    }

    fn dialog_size(&self, area: Rect) -> (u16, u16) {
        let longest = self
            .message
            .lines()
            .map(|l| l.chars().count())
            .max()
            .unwrap_or(0) as u16;
        let w = (longest + 4).max(self.min_width).min(area.width);
        // message + spacer + hint + borders
        let h = (self.line_count() + 4).max(self.min_height).min(area.height);
        (w, h)
    }
}

impl Component for AlertPopup {
    fn handle_key_events(
        &mut self,
        key: KeyEvent,
        _state: &FormState,
    ) -> Result<Option<EventResponse<Action>>> {
        let action = match key.code {
            KeyCode::Enter | KeyCode::Esc => Action::PopupResult(PopupResult::Acknowledged),
            KeyCode::Up | KeyCode::Char('k') => {
                self.scroll = self.scroll.saturating_sub(1);
                Action::Update
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.scroll = (self.scroll + 1).min(self.line_count().saturating_sub(1));
                Action::Update
            }
            _ => Action::Update,
        };
        Ok(Some(EventResponse::Stop(action)))
    }

    fn draw(&mut self, f: &mut Frame<'_>, area: Rect, _state: &FormState) -> Result<()> {
        if area.width < 5 || area.height < 5 {
            return Ok(());
        }
        let (w, h) = self.dialog_size(area);
        let dialog = centered_rect_fixed(area, w, h);
        let inner = draw_popup_frame(f, dialog, &self.title);
        let [body, hint] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(inner);

        let lines: Vec<Line> = self.message.lines().map(Line::raw).collect();
        f.render_widget(Paragraph::new(Text::from(lines)).scroll((self.scroll, 0)), body);

        let hint_line = Line::from(vec![
            Span::styled("Enter", Style::default().fg(Color::White)),
            Span::raw(": OK   "),
            Span::styled("Esc", Style::default().fg(Color::White)),
            Span::raw(": Close   "),
            Span::styled("Up/Down", Style::default().fg(Color::White)),
            Span::raw(": Scroll"),
        ])
        .fg(Color::DarkGray);
        f.render_widget(Paragraph::new(hint_line), hint);
        Ok(())
    }
}

impl PopupComponent for AlertPopup {}
