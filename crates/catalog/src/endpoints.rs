//! Typed routes of the catalog API.

use serde_json::{Map as JsonMap, Value as JsonValue};

use crate::{
    ApiClient, ApiError,
    models::{Category, FeatureType, Id, SelectOption, Standard, TitledItem},
};

/// Where an inline-created option is persisted.
///
/// Each target knows its POST path, the JSON field the new text is sent
/// under, and a stable identity key for the create operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CreateTarget {
    FeatureValue { feature_id: Id },
    Label { subcategory_id: Id },
    UseCase { subcategory_id: Id },
    TechnicalResult { version_id: Id },
}

impl CreateTarget {
    pub fn path(&self) -> String {
        match self {
            CreateTarget::FeatureValue { feature_id } => {
                format!("/product-features/{feature_id}/values")
            }
            CreateTarget::Label { subcategory_id } => {
                format!("/product-labels/subcategory/{subcategory_id}")
            }
            CreateTarget::UseCase { subcategory_id } => {
                format!("/product-use-cases/subcategory/{subcategory_id}")
            }
            CreateTarget::TechnicalResult { version_id } => {
                format!("/standards/version/{version_id}/technical-results")
            }
        }
    }

    /// Body field the new text is posted under.
    pub fn field(&self) -> &'static str {
        match self {
            CreateTarget::FeatureValue { .. } => "value",
            CreateTarget::Label { .. } => "label",
            CreateTarget::UseCase { .. } => "useCase",
            CreateTarget::TechnicalResult { .. } => "technicalResult",
        }
    }

    /// Identity key of the create operation (scope of the owning id).
    pub fn identity(&self) -> String {
        match self {
            CreateTarget::FeatureValue { feature_id } => format!("add-feature-value/{feature_id}"),
            CreateTarget::Label { subcategory_id } => format!("add-label/{subcategory_id}"),
            CreateTarget::UseCase { subcategory_id } => format!("add-use-cases/{subcategory_id}"),
            CreateTarget::TechnicalResult { version_id } => {
                format!("add-technical-result/{version_id}")
            }
        }
    }

    pub fn body(&self, text: &str) -> JsonValue {
        let mut map = JsonMap::new();
        map.insert(self.field().to_string(), JsonValue::String(text.to_string()));
        JsonValue::Object(map)
    }
}

fn scoped(subcategory: Id, resource: &str) -> String {
    format!("/categories/subcategory/{subcategory}/{resource}")
}

impl ApiClient {
    pub async fn categories(&self) -> Result<Vec<Category>, ApiError> {
        self.get("/categories").await
    }

    pub async fn feature_types(&self, subcategory: Id) -> Result<Vec<FeatureType>, ApiError> {
        self.get(&scoped(subcategory, "features")).await
    }

    pub async fn labels(&self, subcategory: Id) -> Result<Vec<TitledItem>, ApiError> {
        self.get(&scoped(subcategory, "labels")).await
    }

    pub async fn use_cases(&self, subcategory: Id) -> Result<Vec<TitledItem>, ApiError> {
        self.get(&scoped(subcategory, "use-cases")).await
    }

    pub async fn standards(&self, subcategory: Id) -> Result<Vec<Standard>, ApiError> {
        self.get(&scoped(subcategory, "standards")).await
    }

    /// Persist a new option; the response is directly usable as a select option.
    pub async fn create_option(
        &self,
        target: &CreateTarget,
        text: &str,
    ) -> Result<SelectOption, ApiError> {
        self.post(&target.path(), &target.body(text)).await
    }
}
