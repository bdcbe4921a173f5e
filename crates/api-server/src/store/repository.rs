//! Task repository trait
//!
//! Defines the interface for task storage operations.

use async_trait::async_trait;

use super::model::StoredTask;
use crate::error::Result;

/// Repository interface for the task store
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Insert a new task
    async fn create(&self, task: StoredTask) -> Result<StoredTask>;

    /// All tasks in creation order
    async fn list(&self) -> Result<Vec<StoredTask>>;

    /// Set the completion flag of a task
    async fn set_status(&self, id: &str, status: bool) -> Result<StoredTask>;

    /// Delete a task by ID, returning whether it existed
    async fn delete(&self, id: &str) -> Result<bool>;

    /// Delete every task, returning how many were removed
    async fn delete_all(&self) -> Result<u64>;
}
