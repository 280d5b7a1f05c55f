//! Catalog API client.
//!
//! This crate wraps the product catalog REST API consumed by the product
//! editor:
//!   * `models`    : reference data returned by the API (categories, feature
//!                   types, labels, use cases, standards) and `SelectOption`
//!   * `client`    : `ApiClient` (base URL + request interceptor hook)
//!   * `endpoints` : typed calls for every route plus `CreateTarget`
//!   * `errors`    : `ApiError`
//!
//! The client is UI-agnostic; the editor crate drives it from its task
//! executor.
pub mod client;
pub mod endpoints;
pub mod errors;
pub mod models;

pub use client::{ApiClient, ApiConfig, PassThrough, RequestInterceptor};
pub use endpoints::CreateTarget;
pub use errors::ApiError;
pub use models::{
    Category, FeatureType, FeatureVariant, Id, PossibleValue, SelectOption, Standard,
    StandardVersion, Subcategory, TitledItem, find_standard,
};
pub use reqwest::Url;
