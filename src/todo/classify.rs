//! Pane membership rules
//!
//! Each pane has its own predicate over the same record. They are not a
//! priority chain, so a pane can be checked in isolation.

use crate::todo::filter::matches;
use crate::todo::pane::Pane;
use crate::todo::record::TodoRecord;
use chrono::NaiveDate;

/// Action date is today or earlier
pub fn is_today_or_overdue(record: &TodoRecord, today: NaiveDate) -> bool {
    record.action_date.is_some_and(|date| date <= today)
}

/// Dated after today and not flagged someday/maybe
pub fn is_future_scheduled(record: &TodoRecord, today: NaiveDate) -> bool {
    !record.is_someday_maybe_note
        && record.action_date.is_some()
        && !is_today_or_overdue(record, today)
}

/// Undated backlog: no date rule applies and not someday/maybe
pub fn is_inbox(record: &TodoRecord, today: NaiveDate) -> bool {
    !record.is_someday_maybe_note
        && !is_today_or_overdue(record, today)
        && !is_future_scheduled(record, today)
}

/// Decide whether `record` is shown in `pane`
///
/// A non-empty query that matches neither tag excludes the record from
/// every pane before any pane rule runs.
///
/// # Arguments
/// * `record` - The item to classify
/// * `query` - Current filter text, empty for no filter
/// * `pane` - The pane being displayed
/// * `today` - Reference date
pub fn is_member(record: &TodoRecord, query: &str, pane: Pane, today: NaiveDate) -> bool {
    if !matches(record, query) {
        return false;
    }

    match pane {
        Pane::Today => is_today_or_overdue(record, today),
        Pane::Scheduled => is_future_scheduled(record, today),
        Pane::Inbox => is_inbox(record, today),
        Pane::Someday => record.is_someday_maybe_note,
        Pane::Stakeholder => !query.is_empty(),
    }
}
