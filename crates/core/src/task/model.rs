//! Task model definitions

use serde::{Deserialize, Serialize};

/// A to-do item as the client sees it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub done: bool,
}

impl Task {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            done: false,
        }
    }

    /// Mark as done
    pub fn completed(mut self) -> Self {
        self.done = true;
        self
    }
}

/// A task in the remote store's wire format
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    #[serde(rename = "_id")]
    pub id: String,
    pub task: String,
    #[serde(default)]
    pub status: bool,
}

impl From<TaskRecord> for Task {
    fn from(record: TaskRecord) -> Self {
        Self {
            id: record.id,
            title: record.task,
            done: record.status,
        }
    }
}

impl From<Task> for TaskRecord {
    fn from(task: Task) -> Self {
        Self {
            id: task.id,
            task: task.title,
            status: task.done,
        }
    }
}

/// Body of a create-task request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTask {
    pub task: String,
}

/// Everything the view renders from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskListState {
    /// Text typed into the input but not yet submitted
    pub draft_title: String,
    /// Exactly what the last applied fetch returned
    pub tasks: Vec<Task>,
}
