//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and form controls while reading/writing
//! shared state from Leptos context providers.

pub mod app_header;
pub mod board_card;
pub mod metric_card;
pub mod text_field;
