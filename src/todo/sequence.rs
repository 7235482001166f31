use crate::todo::record::TodoRecord;
use std::cmp::Ordering;

/// Display order of two items
///
/// Undated items: someday/maybe before the rest. Otherwise by action date,
/// earliest first. When exactly one side has a date the pair is reported
/// as `Equal`, so this is not a total order.
pub fn compare(a: &TodoRecord, b: &TodoRecord) -> Ordering {
    match (a.action_date, b.action_date) {
        (None, None) => b.is_someday_maybe_note.cmp(&a.is_someday_maybe_note),
        (Some(a_date), Some(b_date)) => a_date.cmp(&b_date),
        _ => Ordering::Equal,
    }
}

/// Stable in-place sort with [`compare`]
///
/// `compare` is not transitive, and `slice::sort_by` may panic on such
/// comparators, so this is a plain insertion sort: an item only moves left
/// past neighbours that compare `Greater`.
pub fn sort_records(records: &mut [TodoRecord]) {
    for i in 1..records.len() {
        let mut j = i;
        while j > 0 && compare(&records[j - 1], &records[j]) == Ordering::Greater {
            records.swap(j - 1, j);
            j -= 1;
        }
    }
}
