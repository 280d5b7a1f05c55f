//! Root state of the product form.
//!
//! `FormState` is owned by the event loop and mutated only by the reducer.
//! Components read it to render and translate keys into intents.

use std::collections::BTreeMap;

use catalog::{
    Category, CreateTarget, FeatureType, Id, SelectOption, Standard, StandardVersion, TitledItem,
    find_standard,
};
use serde::{Deserialize, Serialize};
use strum::Display;

use crate::domain::{
    draft::Draft,
    multi_select::{MultiSelect, WidgetKey},
    resource::{Generation, Resource},
    validation::{ProductSubmission, ValidationErrors},
};

/// What happens to the version and technical results when the standard
/// changes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum StandardChangePolicy {
    /// Drop version and technical results.
    #[default]
    ResetDependents,
    /// Keep the version (and its technical results) when the new standard
    /// has a version with the same id; otherwise reset.
    KeepSelections,
}

/// Entry of the two-level category cascade.
#[derive(Debug, Clone, PartialEq)]
pub struct Choice {
    pub id: Id,
    pub label: String,
}

#[derive(Debug, Default)]
pub struct FormState {
    pub draft: Draft,
    pub categories: Resource<Vec<Category>>,
    /// Current subcategory selection token.
    pub generation: Generation,
    pub feature_types: Resource<Vec<FeatureType>>,
    pub labels: Resource<Vec<TitledItem>>,
    pub use_cases: Resource<Vec<TitledItem>>,
    pub standards: Resource<Vec<Standard>>,
    pub widgets: BTreeMap<WidgetKey, MultiSelect>,
    pub errors: ValidationErrors,
    pub policy: StandardChangePolicy,
    pub last_submission: Option<ProductSubmission>,
    /// Widget whose create input should regain focus after the next render.
    pub pending_focus: Option<WidgetKey>,
    pub quit_requested: bool,
}

impl FormState {
    pub fn new(policy: StandardChangePolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub fn category_choices(&self) -> Vec<Choice> {
        self.categories
            .ready()
            .unwrap_or_default()
            .iter()
            .map(|c| Choice {
                id: c.id,
                label: c.title.clone(),
            })
            .collect()
    }

    pub fn subcategory_choices(&self, category: Id) -> Vec<Choice> {
        self.category(category)
            .map(|c| {
                c.subcategories
                    .iter()
                    .map(|s| Choice {
                        id: s.id,
                        label: s.title.clone(),
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn category(&self, id: Id) -> Option<&Category> {
        self.categories
            .loaded()
            .and_then(|cats| cats.iter().find(|c| c.id == id))
    }

    /// "Category / Subcategory" of the current selection.
    pub fn category_path(&self) -> Option<String> {
        let category = self.category(self.draft.category?)?;
        let sub = category.subcategory(self.draft.subcategory?)?;
        Some(format!("{} / {}", category.title, sub.title))
    }

    pub fn feature_type(&self, id: Id) -> Option<&FeatureType> {
        self.feature_types
            .loaded()
            .and_then(|fts| fts.iter().find(|f| f.id == id))
    }

    pub fn standard_choices(&self) -> Vec<Choice> {
        self.standards
            .ready()
            .unwrap_or_default()
            .iter()
            .map(|s| Choice {
                id: s.id,
                label: s.title.clone(),
            })
            .collect()
    }

    pub fn selected_standard(&self) -> Option<&Standard> {
        let id = self.draft.standard?;
        find_standard(self.standards.loaded()?, id)
    }

    pub fn selected_version(&self) -> Option<&StandardVersion> {
        let id = self.draft.standard_version?;
        self.selected_standard()?.version(id)
    }

    pub fn version_choices(&self) -> Vec<Choice> {
        self.selected_standard()
            .map(|s| {
                s.versions
                    .iter()
                    .map(|v| Choice {
                        id: v.id,
                        label: v.title.clone(),
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn selected_for(&self, key: WidgetKey) -> &[Id] {
        match key {
            WidgetKey::Feature(id) => self.draft.feature_list(id),
            WidgetKey::Labels => &self.draft.labels,
            WidgetKey::UseCases => &self.draft.use_cases,
            WidgetKey::TechnicalResults => &self.draft.technical_results,
        }
    }

    pub fn set_selection(&mut self, key: WidgetKey, values: Vec<Id>) {
        match key {
            WidgetKey::Feature(id) => self.draft.set_feature_list(id, values),
            WidgetKey::Labels => self.draft.labels = values,
            WidgetKey::UseCases => self.draft.use_cases = values,
            WidgetKey::TechnicalResults => self.draft.technical_results = values,
        }
    }

    pub fn widget(&self, key: WidgetKey) -> Option<&MultiSelect> {
        self.widgets.get(&key)
    }

    pub fn mount(&mut self, key: WidgetKey, target: CreateTarget, options: Vec<SelectOption>) {
        let widget = MultiSelect::new(key, target, self.generation, options);
        self.widgets.insert(key, widget);
    }

    /// Mount the technical-result widget for the selected version.
    pub fn mount_technical_results(&mut self) {
        self.widgets.remove(&WidgetKey::TechnicalResults);
        let Some(version) = self.selected_version() else {
            return;
        };
        let target = CreateTarget::TechnicalResult {
            version_id: version.id,
        };
        let options = version
            .technical_results
            .iter()
            .map(SelectOption::from)
            .collect();
        self.mount(WidgetKey::TechnicalResults, target, options);
    }

    /// True while any subcategory-scoped fetch is outstanding.
    pub fn scoped_loading(&self) -> bool {
        self.feature_types.is_loading()
            || self.labels.is_loading()
            || self.use_cases.is_loading()
            || self.standards.is_loading()
    }
}
