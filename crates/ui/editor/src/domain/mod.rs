//! Form domain of the product editor.
//!
//! Everything in here is plain data plus pure operations on it:
//!   * `resource`     : lifecycle of a fetched collection (`Resource<T>`) and the
//!                      `Generation` token that marks a subcategory selection
//!   * `draft`        : the in-progress product (`Draft`, `FeatureValue`)
//!   * `validation`   : submit-time rules producing `ProductSubmission`
//!   * `multi_select` : local state of a "pick from list or create new" widget
//!
//! No terminal or network types leak in here; the reducer in `core` drives
//! these types and the components only read them.
pub mod draft;
pub mod multi_select;
pub mod resource;
pub mod validation;
