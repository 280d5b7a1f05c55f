//! Rendering of a multi-select-with-create widget.
//!
//! The widget state lives in `FormState::widgets`; this module only draws it.
//! Which option is highlighted is decided by the page.

use catalog::Id;
use ratatui::{
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{components::card, domain::multi_select::MultiSelect, tui::Frame};

const SPINNER: [&str; 8] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧"];
const ADD_PROMPT: &str = "+ Add an item: ";
const GAP: u16 = 2;

pub struct MultiSelectView<'a> {
    pub title: &'a str,
    pub widget: &'a MultiSelect,
    pub selected: &'a [Id],
    /// Highlighted option, `Some` while the row has focus.
    pub highlight: Option<usize>,
    /// Keys go to the create input.
    pub editing: bool,
    pub tick: usize,
    /// Validation message for the bound field.
    pub invalid: Option<&'a str>,
}

impl MultiSelectView<'_> {
    /// Outer height (including borders) when drawn `width` columns wide.
    pub fn height(&self, width: u16) -> u16 {
        let inner = width.saturating_sub(2);
        let options = pack(&self.option_widths(), inner).len().max(1) as u16;
        let errors = u16::from(self.widget.error().is_some()) + u16::from(self.invalid.is_some());
        card::outer_height(1 + options + 1 + errors)
    }

    fn option_widths(&self) -> Vec<u16> {
        self.widget
            .options()
            .iter()
            .map(|o| option_text(&o.label, false).chars().count() as u16)
            .collect()
    }

    pub fn render(&self, f: &mut Frame<'_>, area: Rect) {
        let focused = self.highlight.is_some();
        let block = card::card(self.title, focused, self.invalid.is_some());
        let inner = block.inner(area);
        f.render_widget(block, area);

        let mut lines = vec![self.chips_line()];
        let rows = pack(&self.option_widths(), inner.width);
        if rows.is_empty() {
            lines.push(Line::from(Span::styled(
                "No options yet",
                Style::default().fg(Color::DarkGray),
            )));
        }
        let errors = u16::from(self.widget.error().is_some()) + u16::from(self.invalid.is_some());
        let room = inner.height.saturating_sub(2 + errors) as usize;
        let (first, count) = self.option_window(&rows, room);
        for row in rows.into_iter().skip(first).take(count) {
            let mut spans = Vec::new();
            for idx in row {
                let option = &self.widget.options()[idx];
                let checked = self.selected.contains(&option.value);
                let mut style = if checked {
                    Style::default().fg(Color::Green)
                } else {
                    Style::default().fg(Color::White)
                };
                if self.highlight == Some(idx) && !self.editing {
                    style = style.add_modifier(Modifier::REVERSED);
                }
                if !spans.is_empty() {
                    spans.push(Span::raw(" ".repeat(GAP as usize)));
                }
                spans.push(Span::styled(option_text(&option.label, checked), style));
            }
            lines.push(Line::from(spans));
        }

        let input_row = lines.len() as u16;
        lines.push(self.create_line());
        if let Some(error) = self.widget.error() {
            lines.push(Line::from(Span::styled(
                format!("Could not create the item: {error}"),
                Style::default().fg(Color::Red),
            )));
        }
        if let Some(message) = self.invalid {
            lines.push(Line::from(Span::styled(
                message.to_string(),
                Style::default().fg(Color::Red),
            )));
        }
        f.render_widget(Paragraph::new(lines), inner);

        if self.editing && !self.widget.is_pending() && input_row < inner.height {
            let prompt = ADD_PROMPT.chars().count() as u16;
            let col = (self.widget.input().visual_cursor() as u16)
                .min(inner.width.saturating_sub(prompt + 1));
            f.set_cursor_position(Position::new(inner.x + prompt + col, inner.y + input_row));
        }
    }

    /// First option row and number of rows to draw when only `room` lines
    /// are left; the highlighted option stays in view.
    fn option_window(&self, rows: &[Vec<usize>], room: usize) -> (usize, usize) {
        if rows.len() <= room {
            return (0, rows.len());
        }
        let current = self
            .highlight
            .and_then(|h| rows.iter().position(|row| row.contains(&h)))
            .unwrap_or(0);
        let first = (current + 1).saturating_sub(room);
        (first, room)
    }

    fn chips_line(&self) -> Line<'static> {
        let labels: Vec<String> = self
            .selected
            .iter()
            .map(|v| {
                self.widget
                    .label_of(*v)
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("#{v}"))
            })
            .collect();
        if labels.is_empty() {
            Line::from(Span::styled(
                "Nothing selected",
                Style::default().fg(Color::DarkGray),
            ))
        } else {
            Line::from(vec![
                Span::styled("Selected: ", Style::default().fg(Color::Gray)),
                Span::styled(labels.join(", "), Style::default().fg(Color::Green)),
            ])
        }
    }

    fn create_line(&self) -> Line<'static> {
        if self.widget.is_pending() {
            let frame = SPINNER[self.tick % SPINNER.len()];
            return Line::from(vec![
                Span::styled(format!("{frame} "), Style::default().fg(Color::Yellow)),
                Span::styled(
                    format!("Creating \"{}\"...", self.widget.text()),
                    Style::default().fg(Color::DarkGray),
                ),
            ]);
        }
        let prompt_style = if self.editing {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        Line::from(vec![
            Span::styled(ADD_PROMPT, prompt_style),
            Span::raw(self.widget.text().to_string()),
        ])
    }
}

fn option_text(label: &str, checked: bool) -> String {
    let mark = if checked { 'x' } else { ' ' };
    format!("[{mark}] {label}")
}

/// Greedy line packing of items with the given widths, `GAP` apart.
/// Items wider than `width` get a line of their own.
fn pack(widths: &[u16], width: u16) -> Vec<Vec<usize>> {
    let mut rows: Vec<Vec<usize>> = Vec::new();
    let mut used = 0u16;
    for (idx, w) in widths.iter().copied().enumerate() {
        match rows.last_mut() {
            Some(row) if used + GAP + w <= width => {
                row.push(idx);
                used += GAP + w;
            }
            _ => {
                rows.push(vec![idx]);
                used = w;
            }
        }
    }
    rows
}
