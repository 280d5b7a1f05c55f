use catalog::Id;
use strum::Display;

use crate::core::{intent_model::FormIntent, state::Choice};

#[derive(Debug, Clone, Display)]
pub enum Action {
    Tick,
    Render,
    Resize(u16, u16),
    Error(String),
    /// Redraw after a component-local change.
    Update,
    /// Hand an intent to the form reducer.
    Form(FormIntent),
    OpenChoice(ChoiceRequest),
    PopupResult(PopupResult),
}

/// Which form field a choice popup answers for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoicePurpose {
    Category,
    /// Second level of the category cascade.
    Subcategory { category: Id },
    Standard,
    StandardVersion,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChoiceRequest {
    pub purpose: ChoicePurpose,
    pub title: String,
    pub options: Vec<Choice>,
    /// Id to preselect, usually the current value.
    pub current: Option<Id>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PopupResult {
    Chosen { purpose: ChoicePurpose, id: Id },
    Acknowledged,
    Cancelled,
}
