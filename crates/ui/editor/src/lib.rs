//! Product editor: a terminal form for creating catalog products.
//!
//! The form state machine (`core`) and the domain types (`domain`) do not
//! depend on the terminal; `components` and `tui` render them with ratatui.
pub mod action;
pub mod cli;
pub mod components;
pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod logging;
pub mod tui;
