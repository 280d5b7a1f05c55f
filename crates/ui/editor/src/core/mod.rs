//! Core of the product editor.
//!
//!   * `state`        : `FormState`, the single source of truth of the screen
//!   * `intent_model` : `FormIntent`, what the operator asked for
//!   * `reducer`      : pure intent / task-result reducers returning `Effect`s
//!   * `effects`      : declarative `Effect` / `TaskKind` / `InternalEvent` model
//!   * `executor`     : background task runner calling the catalog API
//!   * `loop`         : the event loop wiring terminal, reducer and executor
//!   * `app`          : `EditorApp`, the owner of state, page and popup
pub mod app;
pub mod effects;
pub mod executor;
pub mod intent_model;
pub mod r#loop;
pub mod reducer;
pub mod state;
