//! The product form screen.
//!
//! The form is a single scrolling column of rows derived from `FormState`
//! on every event and every frame: product fields and the category cascade
//! first, then the subcategory-scoped sections once a subcategory is chosen.
//! Focus moves over the rows that accept input; status rows ("Loading...",
//! "Error fetching the ...") are skipped.
//!
//! Text fields are controlled: every keystroke goes out as an intent, so the
//! draft always holds what is on screen.

use std::collections::HashMap;

use catalog::Id;
use color_eyre::Result;
use crossterm::event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Layout, Position, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};
use tui_input::{Input, backend::crossterm::EventHandler};

use crate::{
    action::{Action, ChoicePurpose, ChoiceRequest, PopupResult},
    components::{Component, card, multi_select::MultiSelectView},
    core::{intent_model::FormIntent, state::FormState},
    domain::{
        multi_select::WidgetKey,
        resource::{Resource, ResourceKind, ResourceView},
        validation::Field,
    },
    tui::{EventResponse, Frame},
};

/// One entry of the form column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Row {
    Sku,
    Link,
    Category,
    /// Loading / unavailable notice of a scoped resource.
    Status(ResourceKind),
    FeatureNumber(Id),
    Widget(WidgetKey),
    Standard,
    Version,
    Submit,
}

impl Row {
    fn focusable(self) -> bool {
        !matches!(self, Row::Status(_))
    }

    fn is_text(self) -> bool {
        matches!(self, Row::Sku | Row::Link | Row::FeatureNumber(_))
    }
}

/// Rows currently visible for `state`, top to bottom.
pub fn rows(state: &FormState) -> Vec<Row> {
    let mut rows = vec![Row::Sku, Row::Link, Row::Category];
    if state.draft.subcategory.is_none() {
        rows.push(Row::Submit);
        return rows;
    }

    match state.feature_types.view() {
        ResourceView::Hidden => {}
        ResourceView::Loading | ResourceView::Unavailable => {
            rows.push(Row::Status(ResourceKind::FeatureTypes))
        }
        ResourceView::Ready(features) => {
            for ft in features {
                if !ft.is_selectable() {
                    rows.push(Row::FeatureNumber(ft.id));
                } else if state.widget(WidgetKey::Feature(ft.id)).is_some() {
                    rows.push(Row::Widget(WidgetKey::Feature(ft.id)));
                }
            }
        }
    }

    match state.standards.view() {
        ResourceView::Hidden => {}
        ResourceView::Loading | ResourceView::Unavailable => {
            rows.push(Row::Status(ResourceKind::Standards))
        }
        ResourceView::Ready(_) => {
            rows.push(Row::Standard);
            if state.draft.standard.is_some() {
                rows.push(Row::Version);
            }
            if state.draft.standard_version.is_some()
                && state.widget(WidgetKey::TechnicalResults).is_some()
            {
                rows.push(Row::Widget(WidgetKey::TechnicalResults));
            }
        }
    }

    for (resource, kind, key) in [
        (&state.labels, ResourceKind::Labels, WidgetKey::Labels),
        (&state.use_cases, ResourceKind::UseCases, WidgetKey::UseCases),
    ] {
        match resource.view() {
            ResourceView::Hidden => {}
            ResourceView::Loading | ResourceView::Unavailable => rows.push(Row::Status(kind)),
            ResourceView::Ready(_) => {
                if state.widget(key).is_some() {
                    rows.push(Row::Widget(key));
                }
            }
        }
    }

    rows.push(Row::Submit);
    rows
}

enum Editing {
    /// Editing a text row; the buffer is mirrored into the draft per key.
    Text { row: Row, input: Input },
    /// Keys go to the create input of a widget.
    Create(WidgetKey),
}

pub struct ProductForm {
    focused: Row,
    /// Index of `focused` among focusable rows, used when that row vanishes.
    focus_index: usize,
    editing: Option<Editing>,
    highlights: HashMap<WidgetKey, usize>,
    tick: usize,
    scroll: u16,
}

impl Default for ProductForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductForm {
    pub fn new() -> Self {
        Self {
            focused: Row::Sku,
            focus_index: 0,
            editing: None,
            highlights: HashMap::new(),
            tick: 0,
            scroll: 0,
        }
    }

    pub fn focused(&self) -> Row {
        self.focused
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    /// Put focus back into a widget's create input after an option was
    /// created.
    pub fn focus_create_input(&mut self, key: WidgetKey, state: &FormState) {
        let focusables = self.sync_focus(state);
        if let Some(idx) = focusables.iter().position(|r| *r == Row::Widget(key)) {
            self.focused = Row::Widget(key);
            self.focus_index = idx;
            self.editing = Some(Editing::Create(key));
        }
    }

    /// Re-derive focusable rows and keep `focused` pointing at one of them.
    fn sync_focus(&mut self, state: &FormState) -> Vec<Row> {
        let focusables: Vec<Row> = rows(state).into_iter().filter(|r| r.focusable()).collect();
        match focusables.iter().position(|r| *r == self.focused) {
            Some(idx) => self.focus_index = idx,
            None => {
                self.focus_index = self.focus_index.min(focusables.len().saturating_sub(1));
                self.focused = focusables.get(self.focus_index).copied().unwrap_or(Row::Sku);
                self.editing = None;
            }
        }
        focusables
    }

    fn move_focus(&mut self, state: &FormState, forward: bool) {
        self.editing = None;
        let focusables = self.sync_focus(state);
        let len = focusables.len();
        if len == 0 {
            return;
        }
        self.focus_index = if forward {
            (self.focus_index + 1) % len
        } else {
            (self.focus_index + len - 1) % len
        };
        self.focused = focusables[self.focus_index];
    }

    fn highlight(&self, key: WidgetKey, state: &FormState) -> usize {
        let len = state.widget(key).map(|w| w.options().len()).unwrap_or(0);
        self.highlights
            .get(&key)
            .copied()
            .unwrap_or(0)
            .min(len.saturating_sub(1))
    }

    fn move_highlight(&mut self, key: WidgetKey, state: &FormState, forward: bool) {
        let len = state.widget(key).map(|w| w.options().len()).unwrap_or(0);
        if len == 0 {
            return;
        }
        let current = self.highlight(key, state);
        let next = if forward {
            (current + 1) % len
        } else {
            (current + len - 1) % len
        };
        self.highlights.insert(key, next);
    }

    fn text_value(row: Row, state: &FormState) -> String {
        match row {
            Row::Sku => state.draft.sku.clone().unwrap_or_default(),
            Row::Link => state.draft.link.clone().unwrap_or_default(),
            Row::FeatureNumber(id) => state
                .draft
                .feature_number(id)
                .map(|n| n.to_string())
                .unwrap_or_default(),
            _ => String::new(),
        }
    }

    fn text_intent(row: Row, value: String) -> Option<FormIntent> {
        match row {
            Row::Sku => Some(FormIntent::SetSku(value)),
            Row::Link => Some(FormIntent::SetLink(value)),
            Row::FeatureNumber(feature) => {
                Some(FormIntent::SetFeatureNumber { feature, raw: value })
            }
            _ => None,
        }
    }

    fn choice(
        purpose: ChoicePurpose,
        title: &str,
        state: &FormState,
        current: Option<Id>,
    ) -> Action {
        let options = match purpose {
            ChoicePurpose::Category => state.category_choices(),
            ChoicePurpose::Subcategory { category } => state.subcategory_choices(category),
            ChoicePurpose::Standard => state.standard_choices(),
            ChoicePurpose::StandardVersion => state.version_choices(),
        };
        Action::OpenChoice(ChoiceRequest {
            purpose,
            title: title.to_string(),
            options,
            current,
        })
    }

    /// Enter on a row that is not being edited.
    fn activate(&mut self, state: &FormState) -> Action {
        match self.focused {
            row @ (Row::Sku | Row::Link | Row::FeatureNumber(_)) => {
                self.editing = Some(Editing::Text {
                    row,
                    input: Input::new(Self::text_value(row, state)),
                });
                Action::Update
            }
            Row::Category if state.categories.ready().is_some() => {
                Self::choice(ChoicePurpose::Category, "Category", state, state.draft.category)
            }
            Row::Standard => {
                Self::choice(ChoicePurpose::Standard, "Standard", state, state.draft.standard)
            }
            Row::Version => Self::choice(
                ChoicePurpose::StandardVersion,
                "Standard version",
                state,
                state.draft.standard_version,
            ),
            Row::Widget(key) => {
                self.editing = Some(Editing::Create(key));
                Action::Update
            }
            Row::Submit => Action::Form(FormIntent::Submit),
            Row::Category | Row::Status(_) => Action::Update,
        }
    }

    fn handle_editing_key(&mut self, key: KeyEvent, state: &FormState) -> Option<Action> {
        let text_row = match &self.editing {
            None => return None,
            Some(Editing::Text { row, .. }) => Some(*row),
            Some(Editing::Create(_)) => None,
        };
        match key.code {
            KeyCode::Esc => {
                self.editing = None;
                return Some(Action::Update);
            }
            KeyCode::Enter if text_row.is_some() => {
                self.editing = None;
                return Some(Action::Update);
            }
            KeyCode::Tab | KeyCode::Down => {
                self.move_focus(state, true);
                return Some(Action::Update);
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.move_focus(state, false);
                return Some(Action::Update);
            }
            _ => {}
        }

        if let Some(Editing::Text { row, input }) = self.editing.as_mut() {
            let action = match input.handle_event(&CrosstermEvent::Key(key)) {
                Some(change) if change.value => {
                    Self::text_intent(*row, input.value().to_string()).map(Action::Form)
                }
                _ => None,
            };
            return Some(action.unwrap_or(Action::Update));
        }

        let Some(Editing::Create(widget)) = self.editing else {
            return None;
        };
        if key.code == KeyCode::Enter {
            return Some(Action::Form(FormIntent::CreateOption { widget }));
        }
        let Some(current) = state.widget(widget) else {
            self.editing = None;
            return Some(Action::Update);
        };
        if current.is_pending() {
            return Some(Action::Update);
        }
        let mut input = current.input().clone();
        // cursor-only moves are mirrored too so the cursor renders in place
        Some(match input.handle_event(&CrosstermEvent::Key(key)) {
            Some(_) => Action::Form(FormIntent::EditCreateText { widget, input }),
            None => Action::Update,
        })
    }

    fn handle_widget_key(
        &mut self,
        key: KeyEvent,
        widget: WidgetKey,
        state: &FormState,
    ) -> Option<Action> {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => {
                self.move_highlight(widget, state, false);
                Some(Action::Update)
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.move_highlight(widget, state, true);
                Some(Action::Update)
            }
            KeyCode::Char(' ') => {
                let w = state.widget(widget)?;
                let option = w.options().get(self.highlight(widget, state))?;
                Some(Action::Form(FormIntent::ToggleOption {
                    widget,
                    value: option.value,
                }))
            }
            KeyCode::Char('c') => Some(Action::Form(FormIntent::ClearOptions { widget })),
            KeyCode::Char('a') => {
                self.editing = Some(Editing::Create(widget));
                Some(Action::Update)
            }
            _ => None,
        }
    }

    fn footer_hints(&self) -> Line<'static> {
        let hints: &[(&str, &str)] = match (&self.editing, self.focused) {
            (Some(Editing::Text { .. }), _) => &[("Enter/Esc", "done"), ("Tab", "next")],
            (Some(Editing::Create(_)), _) => &[("Enter", "create"), ("Esc", "done")],
            (None, Row::Widget(_)) => &[
                ("Left/Right", "highlight"),
                ("Space", "toggle"),
                ("c", "clear"),
                ("Enter", "add an item"),
            ],
            (None, Row::FeatureNumber(_)) => &[("Enter", "edit"), ("Backspace", "clear")],
            (None, _) => &[("Up/Down", "move"), ("Enter", "edit / choose")],
        };
        let mut spans = Vec::new();
        for (key, what) in hints
            .iter()
            .chain(&[("Ctrl+S", "submit"), ("Ctrl+C", "quit")])
        {
            spans.push(Span::styled(format!(" {key}"), Style::default().fg(Color::White)));
            spans.push(Span::raw(format!(": {what} ")));
        }
        Line::from(spans).fg(Color::DarkGray)
    }

    fn row_height(&self, row: Row, state: &FormState, width: u16) -> u16 {
        match row {
            Row::Status(_) | Row::Submit => 1,
            Row::Widget(key) => match state.widget(key) {
                Some(widget) => self.widget_view(key, widget, state).height(width),
                None => 0,
            },
            _ => card::outer_height(1 + u16::from(field_error(row, state).is_some())),
        }
    }

    fn widget_view<'a>(
        &self,
        key: WidgetKey,
        widget: &'a crate::domain::multi_select::MultiSelect,
        state: &'a FormState,
    ) -> MultiSelectView<'a> {
        let focused = self.focused == Row::Widget(key);
        let title = match key {
            WidgetKey::Feature(id) => state
                .feature_type(id)
                .map(|ft| ft.title.as_str())
                .unwrap_or("Feature"),
            WidgetKey::Labels => "Labels",
            WidgetKey::UseCases => "Use cases",
            WidgetKey::TechnicalResults => "Technical results",
        };
        let field = match key {
            WidgetKey::Feature(_) => Field::Features,
            WidgetKey::Labels => Field::Labels,
            WidgetKey::UseCases => Field::UseCases,
            WidgetKey::TechnicalResults => Field::TechnicalResult,
        };
        MultiSelectView {
            title,
            widget,
            selected: state.selected_for(key),
            highlight: focused.then(|| self.highlight(key, state)),
            editing: focused && matches!(self.editing, Some(Editing::Create(k)) if k == key),
            tick: self.tick,
            invalid: state.errors.get(field),
        }
    }

    fn draw_row(&self, f: &mut Frame<'_>, area: Rect, row: Row, state: &FormState) {
        let focused = self.focused == row;
        match row {
            Row::Status(kind) => {
                let line = if resource_loading(kind, state) {
                    Span::styled(format!("Loading {kind}..."), Style::default().fg(Color::Yellow))
                } else {
                    Span::styled(kind.unavailable_message(), Style::default().fg(Color::Red))
                };
                f.render_widget(Paragraph::new(line), area);
            }
            Row::Submit => {
                let style = if focused {
                    Style::default().fg(Color::Black).bg(Color::Cyan).bold()
                } else {
                    Style::default().fg(Color::Cyan)
                };
                f.render_widget(
                    Paragraph::new(Span::styled("[ Submit ]", style)).centered(),
                    area,
                );
            }
            Row::Widget(key) => {
                if let Some(widget) = state.widget(key) {
                    self.widget_view(key, widget, state).render(f, area);
                }
            }
            _ => self.draw_field(f, area, row, state),
        }
    }

    fn draw_field(&self, f: &mut Frame<'_>, area: Rect, row: Row, state: &FormState) {
        let focused = self.focused == row;
        let error = field_error(row, state);
        let title = match row {
            Row::Sku => "Product SKU".to_string(),
            Row::Link => "Product link".to_string(),
            Row::Category => "Category".to_string(),
            Row::Standard => "Standard".to_string(),
            Row::Version => "Standard version".to_string(),
            Row::FeatureNumber(id) => state
                .feature_type(id)
                .map(|ft| ft.title.clone())
                .unwrap_or_else(|| "Feature".to_string()),
            _ => String::new(),
        };
        let block = card::card(title, focused, error.is_some());
        let inner = block.inner(area);
        f.render_widget(block, area);

        let dim = Style::default().fg(Color::DarkGray);
        let mut lines = Vec::new();
        let mut cursor = None;
        match (&self.editing, row) {
            (Some(Editing::Text { row: r, input }), _) if *r == row => {
                let mut spans = vec![Span::raw(input.value().to_string())];
                if let Row::FeatureNumber(id) = row {
                    spans.push(Span::styled(format!(" {}", unit(id, state)), dim));
                }
                lines.push(Line::from(spans));
                cursor = Some(input.visual_cursor() as u16);
            }
            (_, Row::Sku | Row::Link) => {
                let value = Self::text_value(row, state);
                lines.push(if value.is_empty() {
                    Line::from(Span::styled("Press Enter to type", dim))
                } else {
                    Line::raw(value)
                });
            }
            (_, Row::FeatureNumber(id)) => {
                let value = Self::text_value(row, state);
                lines.push(Line::from(vec![
                    if value.is_empty() {
                        Span::styled("Enter a number", dim)
                    } else {
                        Span::raw(value)
                    },
                    Span::styled(format!(" {}", unit(id, state)), dim),
                ]));
            }
            (_, Row::Category) => lines.push(category_line(state)),
            (_, Row::Standard) => lines.push(
                state
                    .selected_standard()
                    .map(|s| Line::raw(s.title.clone()))
                    .unwrap_or_else(|| Line::from(Span::styled("Select a standard", dim))),
            ),
            (_, Row::Version) => lines.push(
                state
                    .selected_version()
                    .map(|v| Line::raw(v.title.clone()))
                    .unwrap_or_else(|| Line::from(Span::styled("Select a version", dim))),
            ),
            _ => {}
        }
        if let Some(message) = error {
            lines.push(Line::from(Span::styled(
                message.to_string(),
                Style::default().fg(Color::Red),
            )));
        }
        f.render_widget(Paragraph::new(lines), inner);

        if let Some(col) = cursor {
            let col = col.min(inner.width.saturating_sub(1));
            f.set_cursor_position(Position::new(inner.x + col, inner.y));
        }
    }
}

fn unit(feature: Id, state: &FormState) -> String {
    state
        .feature_type(feature)
        .and_then(|ft| ft.extra.clone())
        .unwrap_or_default()
}

fn resource_loading(kind: ResourceKind, state: &FormState) -> bool {
    match kind {
        ResourceKind::FeatureTypes => state.feature_types.is_loading(),
        ResourceKind::Labels => state.labels.is_loading(),
        ResourceKind::UseCases => state.use_cases.is_loading(),
        ResourceKind::Standards => state.standards.is_loading(),
    }
}

fn category_line(state: &FormState) -> Line<'static> {
    match &state.categories {
        Resource::NotRequested | Resource::Loading { .. } => {
            Line::from(Span::styled("Loading...", Style::default().fg(Color::Yellow)))
        }
        Resource::Errored(_) => Line::from(Span::styled(
            "Error fetching the categories",
            Style::default().fg(Color::Red),
        )),
        Resource::Loaded(categories) if categories.is_empty() => {
            Line::from(Span::styled("No categories!", Style::default().fg(Color::Red)))
        }
        Resource::Loaded(_) => match state.category_path() {
            Some(path) => Line::raw(path),
            None => Line::from(Span::styled(
                "Select a category",
                Style::default().fg(Color::DarkGray),
            )),
        },
    }
}

fn field_error(row: Row, state: &FormState) -> Option<&str> {
    let errors = &state.errors;
    match row {
        Row::Sku => errors.get(Field::Sku),
        Row::Link => errors.get(Field::Link),
        Row::Category => errors
            .get(Field::Category)
            .or_else(|| errors.get(Field::Subcategory)),
        Row::Standard => errors.get(Field::Standard),
        Row::Version => errors.get(Field::StandardVersion),
        Row::FeatureNumber(_) => errors.get(Field::Features),
        _ => None,
    }
}

impl Component for ProductForm {
    fn handle_key_events(
        &mut self,
        key: KeyEvent,
        state: &FormState,
    ) -> Result<Option<EventResponse<Action>>> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') => {
                    return Ok(Some(EventResponse::Stop(Action::Form(FormIntent::Quit))));
                }
                KeyCode::Char('s') => {
                    return Ok(Some(EventResponse::Stop(Action::Form(FormIntent::Submit))));
                }
                _ => {}
            }
        }
        self.sync_focus(state);

        if let Some(action) = self.handle_editing_key(key, state) {
            return Ok(Some(EventResponse::Stop(action)));
        }

        if let Row::Widget(widget) = self.focused {
            if let Some(action) = self.handle_widget_key(key, widget, state) {
                return Ok(Some(EventResponse::Stop(action)));
            }
        }

        let action = match key.code {
            KeyCode::Down | KeyCode::Tab | KeyCode::Char('j') => {
                self.move_focus(state, true);
                Action::Update
            }
            KeyCode::Up | KeyCode::BackTab | KeyCode::Char('k') => {
                self.move_focus(state, false);
                Action::Update
            }
            KeyCode::Enter => self.activate(state),
            KeyCode::Backspace | KeyCode::Delete if self.focused.is_text() => {
                match Self::text_intent(self.focused, String::new()) {
                    Some(intent) => Action::Form(intent),
                    None => Action::Update,
                }
            }
            KeyCode::Char('q') => Action::Form(FormIntent::Quit),
            _ => return Ok(None),
        };
        Ok(Some(EventResponse::Stop(action)))
    }

    fn handle_paste(
        &mut self,
        text: String,
        state: &FormState,
    ) -> Result<Option<EventResponse<Action>>> {
        let action = match self.editing.as_mut() {
            Some(Editing::Text { row, input }) => {
                let value = format!("{}{}", input.value(), text.trim_end_matches(['\r', '\n']));
                *input = Input::new(value.clone());
                Self::text_intent(*row, value).map(Action::Form)
            }
            Some(Editing::Create(widget)) => state.widget(*widget).map(|w| {
                let value = format!("{}{}", w.text(), text.trim_end_matches(['\r', '\n']));
                Action::Form(FormIntent::EditCreateText {
                    widget: *widget,
                    input: Input::new(value),
                })
            }),
            None => None,
        };
        Ok(action.map(EventResponse::Stop))
    }

    fn update(&mut self, action: Action, state: &FormState) -> Result<Option<Action>> {
        match action {
            Action::Tick => {
                self.tick = self.tick.wrapping_add(1);
                Ok(None)
            }
            Action::PopupResult(PopupResult::Chosen { purpose, id }) => {
                let next = match purpose {
                    ChoicePurpose::Category => {
                        let current = state
                            .draft
                            .subcategory
                            .filter(|_| state.draft.category == Some(id));
                        let title = state
                            .category(id)
                            .map(|c| format!("Subcategory of {}", c.title))
                            .unwrap_or_else(|| "Subcategory".to_string());
                        Self::choice(
                            ChoicePurpose::Subcategory { category: id },
                            &title,
                            state,
                            current,
                        )
                    }
                    ChoicePurpose::Subcategory { category } => {
                        Action::Form(FormIntent::SelectCategory {
                            category,
                            subcategory: id,
                        })
                    }
                    ChoicePurpose::Standard => Action::Form(FormIntent::SelectStandard(id)),
                    ChoicePurpose::StandardVersion => {
                        Action::Form(FormIntent::SelectStandardVersion(id))
                    }
                };
                Ok(Some(next))
            }
            _ => Ok(None),
        }
    }

    fn draw(&mut self, f: &mut Frame<'_>, area: Rect, state: &FormState) -> Result<()> {
        self.sync_focus(state);
        let [body, footer] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(area);

        let outer = card::card("New product", false, false);
        let inner = outer.inner(body);
        f.render_widget(outer, body);

        let rows = rows(state);
        let heights: Vec<u16> = rows
            .iter()
            .map(|r| self.row_height(*r, state, inner.width).min(inner.height))
            .collect();

        // keep the focused row in view
        let mut top = 0u16;
        for (row, h) in rows.iter().zip(&heights) {
            if *row == self.focused {
                if top < self.scroll {
                    self.scroll = top;
                } else if top + h > self.scroll + inner.height {
                    self.scroll = (top + h).saturating_sub(inner.height);
                }
                break;
            }
            top += h;
        }

        let mut y = 0u16;
        for (row, h) in rows.iter().zip(&heights) {
            let start = y;
            y += h;
            if start < self.scroll || y > self.scroll + inner.height {
                continue;
            }
            let rect = Rect::new(inner.x, inner.y + start - self.scroll, inner.width, *h);
            self.draw_row(f, rect, *row, state);
        }

        let mut footer_line = self.footer_hints();
        if state.scoped_loading() {
            let style = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
            footer_line.spans.insert(0, Span::styled(" loading ", style));
        }
        f.render_widget(Paragraph::new(footer_line), footer);
        Ok(())
    }
}
