//! Todo view state
//!
//! Holds what the rendering side owns: the record collection, the active
//! pane and the filter text. Status changes and file opening are handed to
//! a [`TodoSink`].

use crate::todo::{Pane, TodoRecord, TodoStatus, next, project};
use anyhow::Result;
use chrono::NaiveDate;
use log::debug;

/// Collaborator that commits a toggle and opens source files
pub trait TodoSink {
    /// Persist `new_status` for `todo`
    fn toggle_todo(&mut self, todo: &TodoRecord, new_status: TodoStatus) -> Result<()>;

    /// Open the note at `file_path`
    fn open_file(&mut self, file_path: &str) -> Result<()>;
}

#[derive(Debug, Clone, Default)]
pub struct TodoView {
    todos: Vec<TodoRecord>,
    active_pane: Pane,
    filter: String,
}

impl TodoView {
    pub fn new(todos: Vec<TodoRecord>) -> Self {
        Self {
            todos,
            ..Default::default()
        }
    }

    /// Replace the records through a function of the current ones
    pub fn set_records<F>(&mut self, setter: F)
    where
        F: FnOnce(Vec<TodoRecord>) -> Vec<TodoRecord>,
    {
        let current = std::mem::take(&mut self.todos);
        self.todos = setter(current);
        debug!("view now holds {} item(s)", self.todos.len());
    }

    pub fn records(&self) -> &[TodoRecord] {
        &self.todos
    }

    pub fn active_pane(&self) -> Pane {
        self.active_pane
    }

    pub fn set_active_pane(&mut self, pane: Pane) {
        debug!("active pane: {}", pane);
        self.active_pane = pane;
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn set_filter(&mut self, filter: impl Into<String>) {
        self.filter = filter.into();
        debug!("filter: '{}'", self.filter);
    }

    /// Items of the active pane in display order
    pub fn items(&self, today: NaiveDate) -> Vec<TodoRecord> {
        project(&self.todos, &self.filter, self.active_pane, today)
    }

    /// Checkbox state for `todo`
    pub fn checked(todo: &TodoRecord) -> bool {
        todo.is_done()
    }

    /// Ask `sink` to flip the status of `todo`
    pub fn toggle(&self, todo: &TodoRecord, sink: &mut impl TodoSink) -> Result<TodoStatus> {
        let new_status = next(todo.status);
        sink.toggle_todo(todo, new_status)?;
        Ok(new_status)
    }

    /// Ask `sink` to open the note `todo` came from
    pub fn open_file(&self, todo: &TodoRecord, sink: &mut impl TodoSink) -> Result<()> {
        sink.open_file(&todo.source_file_path)
    }
}
