use color_eyre::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Style, Stylize},
    text::{Line, Span, Text},
    widgets::Paragraph,
};

use crate::{
    action::{Action, ChoicePurpose, ChoiceRequest, PopupResult},
    components::Component,
    core::state::{Choice, FormState},
    tui::{EventResponse, Frame},
};

use super::{PopupComponent, centered_rect_fixed, draw_popup_frame};

/// Pick exactly one entry of a list of `Choice`s.
///
/// Emits:
/// - `Action::PopupResult(PopupResult::Chosen { purpose, id })` on Enter
/// - `Action::PopupResult(PopupResult::Cancelled)` on Esc, or Enter on an
///   empty list
///
/// Up/Down (and k/j) move the selection and wrap around.
pub struct ChoicePopup {
    purpose: ChoicePurpose,
    title: String,
    options: Vec<Choice>,
    selected: usize,
    scroll: usize,
    min_width: u16,
    max_height: u16,
}

impl ChoicePopup {
    pub fn new(request: ChoiceRequest) -> Self {
        let selected = request
            .current
            .and_then(|id| request.options.iter().position(|c| c.id == id))
            .unwrap_or(0);
        Self {
            purpose: request.purpose,
            title: request.title,
            options: request.options,
            selected,
            scroll: 0,
            min_width: 48,
            max_height: 16,
        }
    }

    pub fn selected(&self) -> Option<&Choice> {
        self.options.get(self.selected)
    }

    fn visible_rows(inner: Rect) -> usize {
        // two rows of hints at the bottom
        inner.height.saturating_sub(2).max(1) as usize
    }

    fn ensure_visible(&mut self, inner: Rect) {
        let max_visible = Self::visible_rows(inner);
        if self.selected < self.scroll {
            self.scroll = self.selected;
        } else if self.selected >= self.scroll + max_visible {
            self.scroll = self.selected + 1 - max_visible;
        }
    }

    fn submit_action(&self) -> Action {
        match self.selected() {
            Some(choice) => Action::PopupResult(PopupResult::Chosen {
                purpose: self.purpose,
                id: choice.id,
            }),
            None => Action::PopupResult(PopupResult::Cancelled),
        }
    }

    fn dialog_size(&self, area: Rect) -> (u16, u16) {
        let longest = self
            .options
            .iter()
            .map(|c| c.label.chars().count())
            .max()
            .unwrap_or(0) as u16;
        let width = (longest + 6).max(self.min_width).min(area.width);
        let rows = self.options.len().max(1) as u16;
        let height = (rows + 4).min(self.max_height).min(area.height);
        (width, height)
    }
}

impl Component for ChoicePopup {
    fn handle_key_events(
        &mut self,
        key: KeyEvent,
        _state: &FormState,
    ) -> Result<Option<EventResponse<Action>>> {
        let len = self.options.len();
        let action = match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                if len > 0 {
                    self.selected = (self.selected + len - 1) % len;
                }
                Action::Update
            }
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => {
                if len > 0 {
                    self.selected = (self.selected + 1) % len;
                }
                Action::Update
            }
            KeyCode::Enter => self.submit_action(),
            KeyCode::Esc => Action::PopupResult(PopupResult::Cancelled),
            // modal: swallow everything else
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
        self.ensure_visible(inner);

        let mut lines: Vec<Line> = Vec::new();
        if self.options.is_empty() {
            lines.push(Line::from(Span::styled(
                "Nothing to choose from",
                Style::default().fg(Color::DarkGray),
            )));
        } else {
            let end = (self.scroll + Self::visible_rows(inner)).min(self.options.len());
            for (idx, choice) in self.options[self.scroll..end].iter().enumerate() {
                if self.scroll + idx == self.selected {
                    lines.push(Line::from(vec![
                        Span::raw("> "),
                        Span::styled(
                            choice.label.clone(),
                            Style::default().fg(Color::Black).bg(Color::White).bold(),
                        ),
                    ]));
                } else {
                    lines.push(Line::from(vec![
                        Span::raw("  "),
                        Span::styled(choice.label.clone(), Style::default().fg(Color::White)),
                    ]));
                }
            }
        }

        lines.push(Line::raw(""));
        lines.push(
            Line::from(vec![
                Span::styled("Up/Down", Style::default().fg(Color::White)),
                Span::raw(": Select   "),
                Span::styled("Enter", Style::default().fg(Color::White)),
                Span::raw(": Choose   "),
                Span::styled("Esc", Style::default().fg(Color::White)),
                Span::raw(": Cancel"),
            ])
            .fg(Color::DarkGray),
        );

        f.render_widget(Paragraph::new(Text::from(lines)), inner);
        Ok(())
    }
}

impl PopupComponent for ChoicePopup {}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use pretty_assertions::assert_eq;
    use ratatui::{Terminal, backend::TestBackend};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn popup(current: Option<i64>) -> ChoicePopup {
        ChoicePopup::new(ChoiceRequest {
            purpose: ChoicePurpose::Standard,
            title: "Standard".into(),
            options: vec![
                Choice {
                    id: 5,
                    label: "ISO 9001".into(),
                },
                Choice {
                    id: 6,
                    label: "ISO 14001".into(),
                },
            ],
            current,
        })
    }

    fn press(p: &mut ChoicePopup, code: KeyCode) -> Action {
        match p.handle_key_events(key(code), &FormState::default()).unwrap() {
            Some(EventResponse::Stop(action)) => action,
            other => panic!("popup must consume keys, got {other:?}"),
        }
    }

    #[test]
    fn preselects_current_value_and_wraps() {
        let mut p = popup(Some(6));
        assert_eq!(p.selected().map(|c| c.id), Some(6));
        press(&mut p, KeyCode::Down);
        assert_eq!(p.selected().map(|c| c.id), Some(5));
        press(&mut p, KeyCode::Up);
        assert_eq!(p.selected().map(|c| c.id), Some(6));
    }

    #[test]
    fn enter_reports_purpose_and_id() {
        let mut p = popup(None);
        match press(&mut p, KeyCode::Enter) {
            Action::PopupResult(result) => assert_eq!(
                result,
                PopupResult::Chosen {
                    purpose: ChoicePurpose::Standard,
                    id: 5
                }
            ),
            other => panic!("unexpected {other}"),
        }
    }

    #[test]
    fn empty_list_cancels() {
        let mut p = ChoicePopup::new(ChoiceRequest {
            purpose: ChoicePurpose::Category,
            title: "Category".into(),
            options: vec![],
            current: None,
        });
        assert!(matches!(
            press(&mut p, KeyCode::Enter),
            Action::PopupResult(PopupResult::Cancelled)
        ));
        assert!(matches!(
            press(&mut p, KeyCode::Esc),
            Action::PopupResult(PopupResult::Cancelled)
        ));
    }

    #[test]
    fn draws_selected_marker() {
        let mut p = popup(Some(6));
        let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                p.draw(f, area, &FormState::default()).unwrap()
            })
            .unwrap();
        let screen: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(screen.contains("> ISO 14001"));
        assert!(screen.contains("  ISO 9001"));
    }
}
