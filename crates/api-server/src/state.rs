//! Application state

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::Result;
use crate::store::{FileTaskStore, TaskRepository};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    task_store: Arc<dyn TaskRepository>,
    data_dir: PathBuf,
}

impl AppState {
    /// Create a new AppState with the given data directory
    pub async fn new(data_dir: PathBuf) -> Result<Self> {
        let tasks_path = data_dir.join("tasks.json");
        let task_store = FileTaskStore::new(tasks_path).await?;

        Ok(Self::with_store(data_dir, Arc::new(task_store)))
    }

    /// Create an AppState around an existing repository
    pub fn with_store(data_dir: PathBuf, task_store: Arc<dyn TaskRepository>) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                task_store,
                data_dir,
            }),
        }
    }

    /// Get reference to the task store
    pub fn task_store(&self) -> &dyn TaskRepository {
        self.inner.task_store.as_ref()
    }

    pub fn data_dir(&self) -> &Path {
        &self.inner.data_dir
    }
}
