//! Formatting helper functions for the todo view
//!
//! Plain-text stand-ins for the toolbar and item list.

use crate::todo::{Pane, TodoRecord};

/// Format the pane toolbar, marking the active pane
///
/// # Arguments
/// * `active` - The currently selected pane
///
/// # Returns
/// One line with every pane label, the active one in brackets
pub fn format_toolbar(active: Pane) -> String {
    Pane::ALL
        .iter()
        .map(|pane| {
            if *pane == active {
                format!("[{}]", pane.label())
            } else {
                pane.label().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Format the items of a pane into a display string
///
/// # Arguments
/// * `todos` - Items in display order
///
/// # Returns
/// Numbered list starting at 1, or a placeholder when empty
pub fn format_todos(todos: &[TodoRecord]) -> String {
    if todos.is_empty() {
        return "No items found".to_string();
    }

    let mut result = format!("Found {} item(s):\n\n", todos.len());
    for (index, todo) in todos.iter().enumerate() {
        let checkbox = if todo.is_done() { "[x]" } else { "[ ]" };
        result.push_str(&format!("{:>3}. {} {}\n", index + 1, checkbox, todo.description));

        if let Some(date) = todo.action_date {
            result.push_str(&format!("     Action date: {}\n", date));
        }
        if todo.is_someday_maybe_note {
            result.push_str("     Someday / Maybe\n");
        }
        if !todo.person.is_empty() {
            result.push_str(&format!("     Person: {}\n", todo.person));
        }
        if !todo.project.is_empty() {
            result.push_str(&format!("     Project: {}\n", todo.project));
        }
        if !todo.source_file_path.is_empty() {
            result.push_str(&format!("     Source: {}\n", todo.source_file_path));
        }
    }

    result
}
