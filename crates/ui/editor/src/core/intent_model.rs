//! User intentions understood by the form reducer.
//!
//! Components translate keys and popup results into `FormIntent`s; the loop
//! hands them to `reducer::reduce`. Results of background work come back as
//! `effects::InternalEvent` instead and are reduced separately.

use catalog::Id;
use tui_input::Input;

use crate::domain::multi_select::WidgetKey;

#[derive(Debug, Clone)]
pub enum FormIntent {
    /// Start loading the category tree.
    Init,
    /// Pick a leaf of the category cascade; both ids are written together.
    SelectCategory { category: Id, subcategory: Id },
    SetSku(String),
    SetLink(String),
    /// Raw text of a free-form feature input.
    SetFeatureNumber { feature: Id, raw: String },
    ToggleOption { widget: WidgetKey, value: Id },
    ClearOptions { widget: WidgetKey },
    /// New contents of a widget's "add an item" input.
    EditCreateText { widget: WidgetKey, input: Input },
    /// Enter in a widget's "add an item" input.
    CreateOption { widget: WidgetKey },
    SelectStandard(Id),
    SelectStandardVersion(Id),
    Submit,
    Quit,
}
