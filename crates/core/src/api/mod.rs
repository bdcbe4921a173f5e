//! Remote task store access
//!
//! [`TaskApi`] is the seam between the sync controller and the transport.
//! [`HttpTaskApi`] talks to the real server; tests plug in their own doubles.

mod http;

use async_trait::async_trait;

use crate::task::TaskRecord;
use crate::Result;

pub use http::{decode_task_list, HttpTaskApi};

/// Operations the remote task store offers
#[async_trait]
pub trait TaskApi: Send + Sync {
    /// Fetch the full collection
    ///
    /// `Ok(None)` means the server answered successfully but sent no data.
    async fn list(&self) -> Result<Option<Vec<TaskRecord>>>;

    /// Create a task with the given title
    async fn create(&self, title: &str) -> Result<()>;

    /// Mark a task as done
    async fn complete(&self, id: &str) -> Result<()>;

    /// Mark a task as not done
    async fn uncomplete(&self, id: &str) -> Result<()>;

    /// Remove a task
    async fn delete(&self, id: &str) -> Result<()>;

    /// Remove every task, returning how many were deleted
    async fn delete_all(&self) -> Result<u64>;
}
