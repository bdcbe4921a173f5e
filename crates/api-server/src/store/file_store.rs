//! File-based task storage implementation
//!
//! Stores tasks as JSON in a file on disk.

use async_trait::async_trait;
use std::path::PathBuf;
use tokio::sync::RwLock;
use tracing::debug;

use super::model::StoredTask;
use super::repository::TaskRepository;
use crate::error::{Result, StoreError};

/// File-based task store using JSON
pub struct FileTaskStore {
    /// Path to the JSON file
    path: PathBuf,
    /// In-memory cache of tasks, in creation order
    cache: RwLock<Vec<StoredTask>>,
}

impl FileTaskStore {
    /// Create a new FileTaskStore
    ///
    /// If the file doesn't exist, it will be created on first write.
    pub async fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let mut tasks: Vec<StoredTask> = if path.exists() {
            let content = tokio::fs::read_to_string(&path).await?;
            serde_json::from_str(&content)?
        } else {
            Vec::new()
        };
        tasks.sort_by(|a, b| a.created_at.cmp(&b.created_at));

        Ok(Self {
            path,
            cache: RwLock::new(tasks),
        })
    }

    /// Persist the cache to disk
    async fn persist(&self) -> Result<()> {
        let cache = self.cache.read().await;
        let content = serde_json::to_string_pretty(&*cache)?;

        // Ensure parent directory exists
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        tokio::fs::write(&self.path, content).await?;
        debug!("Persisted {} tasks to {:?}", cache.len(), self.path);
        Ok(())
    }
}

#[async_trait]
impl TaskRepository for FileTaskStore {
    async fn create(&self, task: StoredTask) -> Result<StoredTask> {
        {
            let mut cache = self.cache.write().await;
            if cache.iter().any(|t| t.id == task.id) {
                return Err(StoreError::InvalidInput(format!(
                    "Task with ID {} already exists",
                    task.id
                )));
            }
            cache.push(task.clone());
        }
        self.persist().await?;
        Ok(task)
    }

    async fn list(&self) -> Result<Vec<StoredTask>> {
        Ok(self.cache.read().await.clone())
    }

    async fn set_status(&self, id: &str, status: bool) -> Result<StoredTask> {
        let updated = {
            let mut cache = self.cache.write().await;
            let task = cache
                .iter_mut()
                .find(|t| t.id == id)
                .ok_or_else(|| StoreError::TaskNotFound(id.to_string()))?;
            task.status = status;
            task.clone()
        };
        self.persist().await?;
        Ok(updated)
    }

    async fn delete(&self, id: &str) -> Result<bool> {
        let removed = {
            let mut cache = self.cache.write().await;
            let before = cache.len();
            cache.retain(|t| t.id != id);
            cache.len() != before
        };
        if removed {
            self.persist().await?;
        }
        Ok(removed)
    }

    async fn delete_all(&self) -> Result<u64> {
        let count = {
            let mut cache = self.cache.write().await;
            let count = cache.len() as u64;
            cache.clear();
            count
        };
        self.persist().await?;
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    async fn create_test_store() -> (FileTaskStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("tasks.json");
        let store = FileTaskStore::new(&path).await.unwrap();
        (store, temp_dir)
    }

    #[tokio::test]
    async fn test_create_task() {
        let (store, _temp) = create_test_store().await;

        let task = StoredTask::new("Test task");
        let created = store.create(task.clone()).await.unwrap();

        assert_eq!(created.id, task.id);
        assert_eq!(created.task, "Test task");
        assert!(!created.status);
    }

    #[tokio::test]
    async fn test_list_keeps_creation_order() {
        let (store, _temp) = create_test_store().await;

        store.create(StoredTask::new("Task 1")).await.unwrap();
        store.create(StoredTask::new("Task 2")).await.unwrap();
        store.create(StoredTask::new("Task 3")).await.unwrap();

        let titles: Vec<String> = store
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.task)
            .collect();
        assert_eq!(titles, vec!["Task 1", "Task 2", "Task 3"]);
    }

    #[tokio::test]
    async fn test_set_status() {
        let (store, _temp) = create_test_store().await;

        let task = store.create(StoredTask::new("Walk dog")).await.unwrap();

        let done = store.set_status(&task.id, true).await.unwrap();
        assert!(done.status);

        let undone = store.set_status(&task.id, false).await.unwrap();
        assert!(!undone.status);
    }

    #[tokio::test]
    async fn test_set_status_of_missing_task() {
        let (store, _temp) = create_test_store().await;

        let result = store.set_status("missing", true).await;
        match result.unwrap_err() {
            StoreError::TaskNotFound(id) => assert_eq!(id, "missing"),
            e => panic!("Expected TaskNotFound error, got: {:?}", e),
        }
    }

    #[tokio::test]
    async fn test_delete_task() {
        let (store, _temp) = create_test_store().await;

        let task = store.create(StoredTask::new("Task to delete")).await.unwrap();

        assert!(store.delete(&task.id).await.unwrap());
        assert!(store.list().await.unwrap().is_empty());

        // Delete again should return false
        assert!(!store.delete(&task.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_delete_all() {
        let (store, _temp) = create_test_store().await;

        store.create(StoredTask::new("a")).await.unwrap();
        store.create(StoredTask::new("b")).await.unwrap();

        assert_eq!(store.delete_all().await.unwrap(), 2);
        assert!(store.list().await.unwrap().is_empty());
        assert_eq!(store.delete_all().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_persistence_across_instances() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("tasks.json");

        let task_id;

        {
            let store = FileTaskStore::new(&path).await.unwrap();
            let task = store.create(StoredTask::new("Persistent task")).await.unwrap();
            store.set_status(&task.id, true).await.unwrap();
            task_id = task.id;
        }

        {
            let store = FileTaskStore::new(&path).await.unwrap();
            let tasks = store.list().await.unwrap();
            assert_eq!(tasks.len(), 1);
            assert_eq!(tasks[0].id, task_id);
            assert_eq!(tasks[0].task, "Persistent task");
            assert!(tasks[0].status);
        }
    }

    #[tokio::test]
    async fn test_duplicate_task_error() {
        let (store, _temp) = create_test_store().await;

        let task = StoredTask::new("Test task");
        store.create(task.clone()).await.unwrap();

        let result = store.create(task).await;
        match result.unwrap_err() {
            StoreError::InvalidInput(msg) => {
                assert!(msg.contains("already exists"));
            }
            e => panic!("Expected InvalidInput error, got: {:?}", e),
        }
    }
}
