use crate::todo::record::TodoRecord;

/// Text filter over the person and project tags
///
/// An empty query disables the filter. Otherwise the query must be a
/// case-sensitive substring of `person` or `project`.
pub fn matches(record: &TodoRecord, query: &str) -> bool {
    query.is_empty() || record.person.contains(query) || record.project.contains(query)
}
