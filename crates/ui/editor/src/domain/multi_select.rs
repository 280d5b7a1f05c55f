//! State of a multi-select widget with inline option creation.
//!
//! The widget owns its option list and the text of the "add an item" input.
//! It never owns the selection: every operation that changes the selection
//! takes the current values and returns the new ones, and the caller writes
//! them into the draft.

use std::fmt;

use catalog::{CreateTarget, Id, SelectOption};
use tui_input::Input;

use super::resource::Generation;

/// Identifies a mounted widget on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WidgetKey {
    Feature(Id),
    Labels,
    UseCases,
    TechnicalResults,
}

impl fmt::Display for WidgetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WidgetKey::Feature(id) => write!(f, "feature {id}"),
            WidgetKey::Labels => f.write_str("labels"),
            WidgetKey::UseCases => f.write_str("use cases"),
            WidgetKey::TechnicalResults => f.write_str("technical results"),
        }
    }
}

/// A create call to run for a widget.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateRequest {
    pub widget: WidgetKey,
    pub target: CreateTarget,
    pub generation: Generation,
    pub text: String,
}

#[derive(Debug, Clone)]
pub struct MultiSelect {
    key: WidgetKey,
    target: CreateTarget,
    generation: Generation,
    options: Vec<SelectOption>,
    input: Input,
    pending: bool,
    error: Option<String>,
}

impl MultiSelect {
    pub fn new(
        key: WidgetKey,
        target: CreateTarget,
        generation: Generation,
        options: Vec<SelectOption>,
    ) -> Self {
        Self {
            key,
            target,
            generation,
            options,
            input: Input::default(),
            pending: false,
            error: None,
        }
    }

    pub fn key(&self) -> WidgetKey {
        self.key
    }

    pub fn target(&self) -> CreateTarget {
        self.target
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    pub fn input(&self) -> &Input {
        &self.input
    }

    pub fn text(&self) -> &str {
        self.input.value()
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Message of the last failed create, cleared by the next attempt.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn contains(&self, value: Id) -> bool {
        self.options.iter().any(|o| o.value == value)
    }

    pub fn label_of(&self, value: Id) -> Option<&str> {
        self.options
            .iter()
            .find(|o| o.value == value)
            .map(|o| o.label.as_str())
    }

    /// Replace the input buffer. Ignored while a create is in flight.
    pub fn set_input(&mut self, input: Input) -> bool {
        if self.pending {
            return false;
        }
        self.input = input;
        true
    }

    /// Start a create for the typed text.
    ///
    /// Returns `None` for blank text or while another create is in flight.
    /// The pending flag is set before the request is handed out, so a second
    /// call never produces a second request.
    pub fn submit_create(&mut self) -> Option<CreateRequest> {
        if self.pending || self.input.value().trim().is_empty() {
            return None;
        }
        self.pending = true;
        self.error = None;
        Some(CreateRequest {
            widget: self.key,
            target: self.target,
            generation: self.generation,
            text: self.input.value().to_string(),
        })
    }

    /// Whether a create result for `request` still applies to this widget.
    pub fn awaits(&self, request: &CreateRequest) -> bool {
        self.pending && self.generation == request.generation && self.target == request.target
    }

    /// Append the created option and return the new selection.
    ///
    /// A value the catalog already knew is selected, not duplicated.
    pub fn on_created(&mut self, option: SelectOption, selected: &[Id]) -> Vec<Id> {
        let mut next = selected.to_vec();
        if !next.contains(&option.value) {
            next.push(option.value);
        }
        if !self.contains(option.value) {
            self.options.push(option);
        }
        self.input.reset();
        self.pending = false;
        next
    }

    /// Keep the typed text so the operator can retry; nothing else changes.
    pub fn on_create_failed(&mut self, error: impl Into<String>) {
        self.pending = false;
        self.error = Some(error.into());
    }

    /// Add or remove `value`; `None` if it is not one of the options.
    pub fn toggle(&self, value: Id, selected: &[Id]) -> Option<Vec<Id>> {
        if !self.contains(value) {
            return None;
        }
        let next = if selected.contains(&value) {
            selected.iter().copied().filter(|v| *v != value).collect()
        } else {
            let mut next = selected.to_vec();
            next.push(value);
            next
        };
        Some(next)
    }
}
