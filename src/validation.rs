//! Validation helper functions for command-line arguments
//!
//! This module parses pane names, dates and list positions.

use crate::todo::{Pane, TodoRecord};
use anyhow::{Result, anyhow};
use chrono::NaiveDate;

/// Parse and validate a pane name
///
/// # Arguments
/// * `pane_str` - Lowercase pane name (e.g., "today", "someday")
///
/// # Returns
/// Result containing parsed Pane or error
pub fn parse_pane(pane_str: &str) -> Result<Pane> {
    pane_str.trim().parse::<Pane>().map_err(|e| anyhow!(e))
}

/// Parse and validate a reference date
///
/// # Arguments
/// * `date_str` - Date string in YYYY-MM-DD format
///
/// # Returns
/// Result containing parsed NaiveDate or error
pub fn parse_date(date_str: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(date_str.trim(), "%Y-%m-%d").map_err(|_| {
        anyhow!(
            "Invalid date format '{}'. Use YYYY-MM-DD (e.g., '2025-03-15')",
            date_str
        )
    })
}

/// Look up a displayed item by its 1-based position
pub fn select_item(todos: &[TodoRecord], position: usize) -> Result<&TodoRecord> {
    position
        .checked_sub(1)
        .and_then(|index| todos.get(index))
        .ok_or_else(|| {
            anyhow!(
                "No item at position {}. The pane shows {} item(s)",
                position,
                todos.len()
            )
        })
}
