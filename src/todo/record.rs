use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Get the current date in local timezone
pub fn local_date_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Completion status of a todo item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TodoStatus {
    /// Still to be done
    Open,
    /// Completed
    Done,
}

impl TodoStatus {
    /// Next status in the two-state cycle: `Open -> Done -> Open`.
    ///
    /// Only computes the value; committing it is up to the caller.
    pub fn toggle(self) -> Self {
        match self {
            TodoStatus::Open => TodoStatus::Done,
            TodoStatus::Done => TodoStatus::Open,
        }
    }
}

impl FromStr for TodoStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "open" => Ok(TodoStatus::Open),
            "done" => Ok(TodoStatus::Done),
            _ => Err(format!(
                "Invalid status '{}'. Valid options are: open, done",
                s
            )),
        }
    }
}

/// Free function form of [`TodoStatus::toggle`].
pub fn next(status: TodoStatus) -> TodoStatus {
    status.toggle()
}

/// A todo item extracted from a note
///
/// Records are snapshots: classification and ordering never modify them.
/// The extraction from source documents happens elsewhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoRecord {
    /// Item text, markup preserved
    pub description: String,
    /// Completion status
    pub status: TodoStatus,
    /// Optional action date (format: YYYY-MM-DD)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_date: Option<NaiveDate>,
    /// Someday/maybe backlog flag
    #[serde(default)]
    pub is_someday_maybe_note: bool,
    /// Person tag, matched by the text filter
    #[serde(default)]
    pub person: String,
    /// Project tag, matched by the text filter
    #[serde(default)]
    pub project: String,
    /// Note the item was extracted from
    #[serde(default)]
    pub source_file_path: String,
}

impl Default for TodoRecord {
    fn default() -> Self {
        Self {
            description: String::new(),
            status: TodoStatus::Open,
            action_date: None,
            is_someday_maybe_note: false,
            person: String::new(),
            project: String::new(),
            source_file_path: String::new(),
        }
    }
}

impl TodoRecord {
    /// Check if this item is completed
    pub fn is_done(&self) -> bool {
        self.status == TodoStatus::Done
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // トグルは往復で元に戻る
    #[test]
    fn test_toggle_is_involution() {
        assert_eq!(next(TodoStatus::Open), TodoStatus::Done);
        assert_eq!(next(TodoStatus::Done), TodoStatus::Open);
        assert_eq!(next(next(TodoStatus::Open)), TodoStatus::Open);
        assert_eq!(next(next(TodoStatus::Done)), TodoStatus::Done);
    }

    #[test]
    fn test_status_from_str() {
        assert_eq!("open".parse::<TodoStatus>(), Ok(TodoStatus::Open));
        assert_eq!("done".parse::<TodoStatus>(), Ok(TodoStatus::Done));
        let err = "Done".parse::<TodoStatus>().unwrap_err();
        assert!(err.contains("open, done"));
    }

    #[test]
    fn test_record_from_toml_defaults() {
        let record: TodoRecord = toml::from_str(
            r#"
description = "Call the plumber"
status = "open"
"#,
        )
        .unwrap();
        assert_eq!(record.action_date, None);
        assert!(!record.is_someday_maybe_note);
        assert_eq!(record.person, "");
        assert_eq!(record.project, "");
        assert!(!record.is_done());
    }

    #[test]
    fn test_record_with_action_date() {
        let record: TodoRecord = toml::from_str(
            r#"
description = "Send report"
status = "done"
action_date = "2024-03-15"
person = "alice"
"#,
        )
        .unwrap();
        assert_eq!(record.action_date, NaiveDate::from_ymd_opt(2024, 3, 15));
        assert!(record.is_done());
    }
}
