//! Submit-time validation of the draft.
//!
//! Messages follow the wording the backend's own schema uses so operators
//! see the same text in both places.

use std::collections::BTreeMap;

use catalog::{Id, Url};
use serde::Serialize;
use strum::{Display, EnumIter};
use thiserror::Error;

use super::draft::{Draft, FeatureValue};

pub const MSG_TOO_SHORT: &str = "String must contain at least 1 character(s)";
pub const MSG_INVALID_URL: &str = "Invalid url";
pub const MSG_REQUIRED: &str = "Required";
pub const MSG_EXPECTED_NUMBER: &str = "Expected number";

/// A validated draft field, displayed as its JSON key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumIter)]
pub enum Field {
    #[strum(serialize = "productSKU")]
    Sku,
    #[strum(serialize = "productLink")]
    Link,
    #[strum(serialize = "category")]
    Category,
    #[strum(serialize = "subcategory")]
    Subcategory,
    #[strum(serialize = "features")]
    Features,
    #[strum(serialize = "labels")]
    Labels,
    #[strum(serialize = "useCases")]
    UseCases,
    #[strum(serialize = "standard")]
    Standard,
    #[strum(serialize = "standardVersion")]
    StandardVersion,
    #[strum(serialize = "technicalResult")]
    TechnicalResult,
}

/// One message per failing field, in field order.
#[derive(Debug, Clone, Default, PartialEq, Error)]
#[error("{} field(s) failed validation", .0.len())]
pub struct ValidationErrors(BTreeMap<Field, String>);

impl ValidationErrors {
    /// Record a message; the first message for a field wins.
    pub fn add(&mut self, field: Field, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn remove(&mut self, field: Field) {
        self.0.remove(&field);
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(f, m)| (*f, m.as_str()))
    }
}

/// The validated product, serialized with the catalog's field names.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSubmission {
    #[serde(rename = "productSKU")]
    pub product_sku: String,
    pub product_link: String,
    pub category: Id,
    pub subcategory: Id,
    pub features: BTreeMap<Id, FeatureValue>,
    pub labels: Vec<Id>,
    pub use_cases: Vec<Id>,
    pub standard: Id,
    pub standard_version: Id,
    pub technical_result: Vec<Id>,
}

pub fn validate(draft: &Draft) -> Result<ProductSubmission, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    match draft.sku.as_deref() {
        None => errors.add(Field::Sku, MSG_REQUIRED),
        Some("") => errors.add(Field::Sku, MSG_TOO_SHORT),
        Some(_) => {}
    }
    match draft.link.as_deref() {
        None => errors.add(Field::Link, MSG_REQUIRED),
        Some(link) if Url::parse(link).is_err() => errors.add(Field::Link, MSG_INVALID_URL),
        Some(_) => {}
    }

    let category = required(draft.category, Field::Category, &mut errors);
    let subcategory = required(draft.subcategory, Field::Subcategory, &mut errors);
    let standard = required(draft.standard, Field::Standard, &mut errors);
    let standard_version = required(draft.standard_version, Field::StandardVersion, &mut errors);

    let bad_number = draft
        .features
        .values()
        .any(|v| matches!(v, FeatureValue::Number(n) if !n.is_finite()));
    if bad_number {
        errors.add(Field::Features, MSG_EXPECTED_NUMBER);
    }

    match (category, subcategory, standard, standard_version) {
        (Some(category), Some(subcategory), Some(standard), Some(standard_version))
            if errors.is_empty() =>
        {
            Ok(ProductSubmission {
                product_sku: draft.sku.clone().unwrap_or_default(),
                product_link: draft.link.clone().unwrap_or_default(),
                category,
                subcategory,
                features: draft.features.clone(),
                labels: draft.labels.clone(),
                use_cases: draft.use_cases.clone(),
                standard,
                standard_version,
                technical_result: draft.technical_results.clone(),
            })
        }
        _ => Err(errors),
    }
}

fn required(value: Option<Id>, field: Field, errors: &mut ValidationErrors) -> Option<Id> {
    if value.is_none() {
        errors.add(field, MSG_REQUIRED);
    }
    value
}
