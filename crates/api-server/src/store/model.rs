use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A task as persisted by the server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredTask {
    pub id: String,
    pub task: String,
    pub status: bool,
    pub created_at: DateTime<Utc>,
}

impl StoredTask {
    /// Create a new, not yet completed task
    pub fn new(task: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().simple().to_string(),
            task: task.into(),
            status: false,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_task_is_open() {
        let task = StoredTask::new("buy milk");
        assert_eq!(task.task, "buy milk");
        assert!(!task.status);
        assert_eq!(task.id.len(), 32);
    }

    #[test]
    fn test_ids_are_unique() {
        assert_ne!(StoredTask::new("a").id, StoredTask::new("a").id);
    }
}
