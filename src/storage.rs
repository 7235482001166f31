use crate::todo::{TodoRecord, TodoStatus};
use crate::view::TodoSink;
use anyhow::{Result, bail};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// On-disk layout: a list of `[[todos]]` tables
#[derive(Debug, Default, Serialize, Deserialize)]
struct TodoFile {
    #[serde(default)]
    todos: Vec<TodoRecord>,
}

/// TOML file holding the extracted todo items
///
/// Also acts as the persistence collaborator of the CLI: toggled statuses
/// are written back to the same file.
pub struct Storage {
    file_path: PathBuf,
    last_opened: Option<String>,
}

impl Storage {
    pub fn new(file_path: impl AsRef<Path>) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
            last_opened: None,
        }
    }

    pub fn load(&self) -> Result<Vec<TodoRecord>> {
        if !self.file_path.exists() {
            debug!("{} does not exist, starting empty", self.file_path.display());
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.file_path)?;
        let file: TodoFile = toml::from_str(&content)?;
        debug!(
            "loaded {} item(s) from {}",
            file.todos.len(),
            self.file_path.display()
        );
        Ok(file.todos)
    }

    pub fn save(&self, todos: &[TodoRecord]) -> Result<()> {
        let file = TodoFile {
            todos: todos.to_vec(),
        };
        let content = toml::to_string_pretty(&file)?;
        fs::write(&self.file_path, content)?;
        Ok(())
    }

    /// Path most recently passed to [`TodoSink::open_file`]
    pub fn last_opened(&self) -> Option<&str> {
        self.last_opened.as_deref()
    }
}

impl TodoSink for Storage {
    fn toggle_todo(&mut self, todo: &TodoRecord, new_status: TodoStatus) -> Result<()> {
        let mut todos = self.load()?;
        let Some(stored) = todos.iter_mut().find(|t| *t == todo) else {
            bail!("Todo '{}' not found in {}", todo.description, self.file_path.display());
        };
        stored.status = new_status;
        self.save(&todos)?;
        info!("set '{}' to {:?}", todo.description, new_status);
        Ok(())
    }

    fn open_file(&mut self, file_path: &str) -> Result<()> {
        info!("open {}", file_path);
        self.last_opened = Some(file_path.to_string());
        Ok(())
    }
}
