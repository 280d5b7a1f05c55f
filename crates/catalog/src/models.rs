//! Reference data returned by the catalog API.
//!
//! All payloads use camelCase keys on the wire.

use serde::{Deserialize, Serialize};

/// Numeric identifier used by every catalog entity.
pub type Id = i64;

/// Top-level category with its subcategories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: Id,
    pub title: String,
    #[serde(default)]
    pub subcategories: Vec<Subcategory>,
}

impl Category {
    pub fn subcategory(&self, id: Id) -> Option<&Subcategory> {
        self.subcategories.iter().find(|s| s.id == id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subcategory {
    pub id: Id,
    pub title: String,
    pub category_id: Id,
}

/// How a feature type is edited.
///
/// The API sends `"select"` for features with a list of possible values and
/// `"null"` otherwise. Anything unknown is treated like `"null"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureVariant {
    Select,
    #[serde(rename = "null", other)]
    None,
}

/// A feature definition scoped to one subcategory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureType {
    pub id: Id,
    pub title: String,
    pub variant: FeatureVariant,
    /// Unit label rendered after numeric inputs (e.g. "mm").
    #[serde(default)]
    pub extra: Option<String>,
    #[serde(default)]
    pub possible_values: Vec<PossibleValue>,
}

impl FeatureType {
    pub fn is_selectable(&self) -> bool {
        self.variant == FeatureVariant::Select
    }

    /// Seed options for the multi-select widget.
    pub fn options(&self) -> Vec<SelectOption> {
        self.possible_values.iter().map(SelectOption::from).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PossibleValue {
    pub id: Id,
    pub value: String,
}

/// `{ id, title }` pair used for labels, use cases and technical results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TitledItem {
    pub id: Id,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Standard {
    pub id: Id,
    pub title: String,
    #[serde(default)]
    pub versions: Vec<StandardVersion>,
}

impl Standard {
    pub fn version(&self, id: Id) -> Option<&StandardVersion> {
        self.versions.iter().find(|v| v.id == id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandardVersion {
    pub id: Id,
    pub title: String,
    #[serde(default)]
    pub technical_results: Vec<TitledItem>,
}

pub fn find_standard(standards: &[Standard], id: Id) -> Option<&Standard> {
    standards.iter().find(|s| s.id == id)
}

/// A selectable `{ label, value }` option.
///
/// This is also the shape every create endpoint answers with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectOption {
    pub label: String,
    pub value: Id,
}

impl SelectOption {
    pub fn new(label: impl Into<String>, value: Id) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

impl From<&PossibleValue> for SelectOption {
    fn from(v: &PossibleValue) -> Self {
        Self::new(v.value.clone(), v.id)
    }
}

impl From<&TitledItem> for SelectOption {
    fn from(item: &TitledItem) -> Self {
        Self::new(item.title.clone(), item.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn feature_type_decodes_select_variant() {
        let raw = r#"[{"id":1,"title":"Color","variant":"select","extra":null,
            "possibleValues":[{"id":10,"value":"Red"}]}]"#;
        let parsed: Vec<FeatureType> = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.len(), 1);
        assert!(parsed[0].is_selectable());
        assert_eq!(parsed[0].options(), vec![SelectOption::new("Red", 10)]);
    }

    #[test]
    fn unknown_variant_is_numeric() {
        let raw = r#"{"id":2,"title":"Width","variant":"null","extra":"mm"}"#;
        let parsed: FeatureType = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.variant, FeatureVariant::None);
        assert_eq!(parsed.extra.as_deref(), Some("mm"));
        assert!(parsed.possible_values.is_empty());

        let raw = r#"{"id":3,"title":"Depth","variant":"range"}"#;
        let parsed: FeatureType = serde_json::from_str(raw).unwrap();
        assert!(!parsed.is_selectable());
    }

    #[test]
    fn standards_nest_versions_and_results() {
        let raw = r#"[{"id":5,"title":"ISO 9001","versions":[
            {"id":50,"title":"2015","technicalResults":[{"id":500,"title":"Pass"}]}]}]"#;
        let parsed: Vec<Standard> = serde_json::from_str(raw).unwrap();
        let std = find_standard(&parsed, 5).unwrap();
        let version = std.version(50).unwrap();
        assert_eq!(version.technical_results[0].title, "Pass");
        assert!(std.version(51).is_none());
    }

    #[test]
    fn category_lookup_finds_subcategory() {
        let raw = r#"{"id":1,"title":"Lighting","subcategories":[
            {"id":7,"title":"Lamps","categoryId":1}]}"#;
        let cat: Category = serde_json::from_str(raw).unwrap();
        assert_eq!(cat.subcategory(7).map(|s| s.title.as_str()), Some("Lamps"));
        assert!(cat.subcategory(8).is_none());
    }
}
