//! Todo domain models and pane logic
//!
//! This module contains the record type and the classification engine.
//! It is split into submodules:
//! - `record`: Todo record and completion status
//! - `pane`: Pane selection and toolbar metadata
//! - `filter`: Text filter over person and project tags
//! - `classify`: Per-pane membership predicates
//! - `sequence`: Display ordering
//! - `pipeline`: Filter, classify and sort in one call

mod classify;
mod filter;
mod pane;
mod pipeline;
mod record;
mod sequence;

// Re-export all public types
pub use classify::{is_future_scheduled, is_inbox, is_member, is_today_or_overdue};
pub use filter::matches;
pub use pane::Pane;
pub use pipeline::project;
pub use record::{TodoRecord, TodoStatus, local_date_today, next};
pub use sequence::{compare, sort_records};
