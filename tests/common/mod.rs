//! Common test utilities for integration tests

use chrono::NaiveDate;
use todo_panes::TodoRecord;

/// Reference date used across tests
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 2).unwrap()
}

/// Create a todo with minimal fields
#[allow(dead_code)]
pub fn create_todo(description: &str) -> TodoRecord {
    TodoRecord {
        description: description.to_string(),
        ..Default::default()
    }
}

/// Create a todo with date, someday flag and tags
#[allow(dead_code)]
pub fn create_full_todo(
    description: &str,
    action_date: Option<NaiveDate>,
    someday: bool,
    person: &str,
    project: &str,
) -> TodoRecord {
    TodoRecord {
        description: description.to_string(),
        action_date,
        is_someday_maybe_note: someday,
        person: person.to_string(),
        project: project.to_string(),
        source_file_path: format!("notes/{}.md", description),
        ..Default::default()
    }
}

/// Shorthand for a date in January 2024
#[allow(dead_code)]
pub fn jan(day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(2024, 1, day)
}
