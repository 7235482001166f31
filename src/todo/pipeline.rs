use crate::todo::classify::is_member;
use crate::todo::pane::Pane;
use crate::todo::record::TodoRecord;
use crate::todo::sequence::sort_records;
use chrono::NaiveDate;

/// Items to display for a pane, in display order
///
/// Keeps the members of `pane` under `query` and `today`, then sorts them.
/// The input is left untouched, so this can be re-run on every change of
/// filter, pane or collection.
pub fn project(records: &[TodoRecord], query: &str, pane: Pane, today: NaiveDate) -> Vec<TodoRecord> {
    let mut shown: Vec<TodoRecord> = records
        .iter()
        .filter(|record| is_member(record, query, pane, today))
        .cloned()
        .collect();
    sort_records(&mut shown);
    shown
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_filters_and_sorts() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        let records = vec![
            TodoRecord {
                description: "later".to_string(),
                action_date: NaiveDate::from_ymd_opt(2024, 1, 9),
                ..Default::default()
            },
            TodoRecord {
                description: "earlier".to_string(),
                action_date: NaiveDate::from_ymd_opt(2024, 1, 1),
                ..Default::default()
            },
            TodoRecord {
                description: "future".to_string(),
                action_date: NaiveDate::from_ymd_opt(2024, 2, 1),
                ..Default::default()
            },
        ];

        let shown = project(&records, "", Pane::Today, today);
        let descriptions: Vec<&str> = shown.iter().map(|r| r.description.as_str()).collect();
        assert_eq!(descriptions, vec!["earlier", "later"]);
        assert_eq!(records[0].description, "later");
    }

    #[test]
    fn test_project_empty_input() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        assert!(project(&[], "", Pane::Inbox, today).is_empty());
    }
}
