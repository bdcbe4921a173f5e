//! Sync controller
//!
//! Issues remote operations and reconciles the [`TaskListStore`] with the
//! server by refetching the whole list after each successful mutation.
//! Failures are logged and stop at this boundary.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, error, info};

use crate::api::{HttpTaskApi, TaskApi};
use crate::config::ClientConfig;
use crate::task::{Task, TaskListStore};
use crate::Result;

/// What an operation ended up doing to the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// A fresh task list was written to the store
    Applied,
    /// Precondition not met, nothing was sent
    Skipped,
    /// The list arrived after a newer one had already been applied
    Stale,
    /// A remote call failed; the store was left alone
    Failed,
}

/// Drives remote operations and keeps the store in sync
#[derive(Clone)]
pub struct SyncController {
    inner: Arc<ControllerInner>,
}

struct ControllerInner {
    api: Arc<dyn TaskApi>,
    store: TaskListStore,
    /// Sequence number of the most recently issued refresh
    issued: AtomicU64,
    /// Sequence number of the refresh whose list is in the store
    applied: Mutex<u64>,
}

impl SyncController {
    pub fn new(api: Arc<dyn TaskApi>, store: TaskListStore) -> Self {
        Self {
            inner: Arc::new(ControllerInner {
                api,
                store,
                issued: AtomicU64::new(0),
                applied: Mutex::new(0),
            }),
        }
    }

    /// Create a controller talking HTTP to the configured task store
    pub fn connect(config: &ClientConfig) -> Self {
        Self::new(Arc::new(HttpTaskApi::new(config)), TaskListStore::new())
    }

    pub fn store(&self) -> &TaskListStore {
        &self.inner.store
    }

    /// Initial population of an empty store
    pub async fn mount(&self) -> SyncOutcome {
        info!("Loading task list");
        self.refresh().await
    }

    /// Fetch the full list and replace the store's tasks with it
    ///
    /// A response is only applied if no refresh issued later has been
    /// applied already.
    pub async fn refresh(&self) -> SyncOutcome {
        let seq = self.inner.issued.fetch_add(1, Ordering::SeqCst) + 1;
        debug!("Refresh #{} issued", seq);

        let records = match self.inner.api.list().await {
            Ok(records) => records.unwrap_or_default(),
            Err(e) => {
                error!("Error fetching tasks: {}", e);
                return SyncOutcome::Failed;
            }
        };

        let mut applied = self.inner.applied.lock().await;
        if seq <= *applied {
            debug!("Discarding refresh #{}, #{} already applied", seq, *applied);
            return SyncOutcome::Stale;
        }

        let tasks: Vec<Task> = records.into_iter().map(Task::from).collect();
        debug!("Refresh #{} applied with {} tasks", seq, tasks.len());
        self.inner.store.replace_tasks(tasks).await;
        *applied = seq;

        SyncOutcome::Applied
    }

    /// Create a task, clear the draft and refresh
    ///
    /// Blank titles are dropped without contacting the server. On failure the
    /// draft is kept so the user can try again.
    pub async fn create(&self, title: &str) -> SyncOutcome {
        if title.trim().is_empty() {
            debug!("Ignoring submission with an empty title");
            return SyncOutcome::Skipped;
        }

        if let Err(e) = self.inner.api.create(title).await {
            error!("Error creating task: {}", e);
            return SyncOutcome::Failed;
        }

        info!("Created task {:?}", title);
        self.inner.store.set_draft_title("").await;
        self.refresh().await
    }

    /// Submit whatever is in the draft
    pub async fn submit(&self) -> SyncOutcome {
        let draft = self.inner.store.draft_title().await;
        self.create(&draft).await
    }

    pub async fn complete(&self, id: &str) -> SyncOutcome {
        self.mutate("Error updating task", self.inner.api.complete(id))
            .await
    }

    pub async fn uncomplete(&self, id: &str) -> SyncOutcome {
        self.mutate("Error undoing task", self.inner.api.uncomplete(id))
            .await
    }

    pub async fn delete(&self, id: &str) -> SyncOutcome {
        self.mutate("Error deleting task", self.inner.api.delete(id))
            .await
    }

    /// Delete every task on the server, then refresh
    pub async fn clear_all(&self) -> SyncOutcome {
        match self.inner.api.delete_all().await {
            Ok(count) => {
                info!("Deleted {} tasks", count);
                self.refresh().await
            }
            Err(e) => {
                error!("Error deleting all tasks: {}", e);
                SyncOutcome::Failed
            }
        }
    }

    /// Run a mutating call and refresh if it succeeded
    async fn mutate<F>(&self, failure: &str, call: F) -> SyncOutcome
    where
        F: Future<Output = Result<()>>,
    {
        match call.await {
            Ok(()) => self.refresh().await,
            Err(e) => {
                error!("{}: {}", failure, e);
                SyncOutcome::Failed
            }
        }
    }
}
