use std::collections::BTreeMap;

use catalog::Id;
use serde::{Deserialize, Serialize};

/// Value stored for one feature type: a number for free-form features, the
/// selected possible-value ids for selectable ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FeatureValue {
    Number(f64),
    List(Vec<Id>),
}

/// The product being edited.
///
/// Text fields are `None` until first edited and ids are `None` until chosen.
/// Everything below the subcategory is scoped to it and is cleared whenever
/// the subcategory changes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Draft {
    pub sku: Option<String>,
    pub link: Option<String>,
    pub category: Option<Id>,
    pub subcategory: Option<Id>,
    pub features: BTreeMap<Id, FeatureValue>,
    pub labels: Vec<Id>,
    pub use_cases: Vec<Id>,
    pub standard: Option<Id>,
    pub standard_version: Option<Id>,
    pub technical_results: Vec<Id>,
}

impl Draft {
    /// Write category and subcategory together and drop scoped selections.
    pub fn select_category(&mut self, category: Id, subcategory: Id) {
        self.category = Some(category);
        self.subcategory = Some(subcategory);
        self.clear_scoped_selections();
    }

    pub fn clear_scoped_selections(&mut self) {
        self.features.clear();
        self.labels.clear();
        self.use_cases.clear();
        self.standard = None;
        self.clear_standard_dependents();
    }

    pub fn clear_standard_dependents(&mut self) {
        self.standard_version = None;
        self.technical_results.clear();
    }

    /// Store the number typed for a free-form feature.
    ///
    /// Blank, unparsable, non-finite and zero input removes the entry.
    pub fn set_feature_number(&mut self, feature: Id, raw: &str) -> Option<f64> {
        match parse_number(raw) {
            Some(n) => {
                self.features.insert(feature, FeatureValue::Number(n));
                Some(n)
            }
            None => {
                self.features.remove(&feature);
                None
            }
        }
    }

    pub fn feature_number(&self, feature: Id) -> Option<f64> {
        match self.features.get(&feature) {
            Some(FeatureValue::Number(n)) => Some(*n),
            _ => None,
        }
    }

    pub fn feature_list(&self, feature: Id) -> &[Id] {
        match self.features.get(&feature) {
            Some(FeatureValue::List(values)) => values,
            _ => &[],
        }
    }

    pub fn set_feature_list(&mut self, feature: Id, values: Vec<Id>) {
        self.features.insert(feature, FeatureValue::List(values));
    }
}

fn parse_number(raw: &str) -> Option<f64> {
    let n: f64 = raw.trim().parse().ok()?;
    (n.is_finite() && n != 0.0).then_some(n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn clearing_numeric_input_removes_key() {
        let mut draft = Draft::default();
        assert_eq!(draft.set_feature_number(2, "12.5"), Some(12.5));
        assert_eq!(draft.feature_number(2), Some(12.5));

        draft.set_feature_number(2, "");
        assert!(!draft.features.contains_key(&2));
    }

    #[test]
    fn zero_and_garbage_are_treated_as_empty() {
        let mut draft = Draft::default();
        for raw in ["0", "  ", "abc", "inf", "NaN"] {
            draft.set_feature_number(3, "7");
            draft.set_feature_number(3, raw);
            assert!(draft.features.get(&3).is_none(), "input {raw:?}");
        }
    }

    #[test]
    fn selecting_category_resets_dependents() {
        let mut draft = Draft {
            sku: Some("SKU-1".into()),
            labels: vec![1],
            use_cases: vec![2],
            standard: Some(5),
            standard_version: Some(50),
            technical_results: vec![500],
            ..Draft::default()
        };
        draft.set_feature_list(1, vec![10]);

        draft.select_category(3, 30);

        assert_eq!(draft.category, Some(3));
        assert_eq!(draft.subcategory, Some(30));
        assert_eq!(draft.sku.as_deref(), Some("SKU-1"));
        assert!(draft.features.is_empty());
        assert!(draft.labels.is_empty());
        assert!(draft.use_cases.is_empty());
        assert_eq!(draft.standard, None);
        assert_eq!(draft.standard_version, None);
        assert!(draft.technical_results.is_empty());
    }

    #[test]
    fn feature_values_serialize_untagged() {
        let mut draft = Draft::default();
        draft.set_feature_list(1, vec![10, 11]);
        draft.set_feature_number(2, "4");
        let json = serde_json::to_value(&draft.features).unwrap();
        assert_eq!(json, serde_json::json!({"1": [10, 11], "2": 4.0}));
        assert_eq!(draft.feature_list(2), &[] as &[Id]);
    }
}
