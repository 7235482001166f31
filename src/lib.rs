//! Todo Panes Library
//!
//! Sorts todo items extracted from notes into five panes (Today, Scheduled,
//! Inbox, Someday / Maybe, Stakeholder actions), applies a person/project
//! text filter and orders the result for display.
//!
//! # Architecture
//!
//! - **Domain Layer**: `todo` module - records, pane rules, ordering, toggle
//! - **View Layer**: `view` module - active pane, filter and the collaborator seam
//! - **Persistence Layer**: `storage` module - TOML file of extracted items
//!
//! # Example
//!
//! ```
//! use todo_panes::{Pane, TodoRecord, project};
//! use chrono::NaiveDate;
//!
//! let today = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
//! let todos = vec![TodoRecord {
//!     description: "Pay rent".to_string(),
//!     action_date: NaiveDate::from_ymd_opt(2024, 1, 1),
//!     ..Default::default()
//! }];
//! assert_eq!(project(&todos, "", Pane::Today, today).len(), 1);
//! ```

pub mod formatting;
mod storage;
pub mod todo;
pub mod validation;
mod view;

// Re-export commonly used types
pub use storage::Storage;
pub use todo::{Pane, TodoRecord, TodoStatus, compare, is_member, matches, next, project};
pub use view::{TodoSink, TodoView};
