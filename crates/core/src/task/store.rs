//! Client-side state store
//!
//! Holds the single [`TaskListState`] the view renders from. The store only
//! offers two writes: replacing the whole task list and setting the draft.

use std::sync::Arc;
use tokio::sync::{broadcast, RwLock};

use super::model::{Task, TaskListState};

/// Change notification sent to subscribers after every write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    TasksReplaced { count: usize },
    DraftChanged,
}

/// Shared handle to the task list state
#[derive(Clone)]
pub struct TaskListStore {
    state: Arc<RwLock<TaskListState>>,
    event_tx: broadcast::Sender<StoreEvent>,
}

impl TaskListStore {
    /// Create an empty store
    pub fn new() -> Self {
        let (event_tx, _) = broadcast::channel(64);
        Self {
            state: Arc::new(RwLock::new(TaskListState::default())),
            event_tx,
        }
    }

    /// Subscribe to change notifications
    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.event_tx.subscribe()
    }

    /// Get a copy of the current state
    pub async fn snapshot(&self) -> TaskListState {
        self.state.read().await.clone()
    }

    pub async fn tasks(&self) -> Vec<Task> {
        self.state.read().await.tasks.clone()
    }

    pub async fn draft_title(&self) -> String {
        self.state.read().await.draft_title.clone()
    }

    /// Replace the task list wholesale
    pub async fn replace_tasks(&self, tasks: Vec<Task>) {
        let count = tasks.len();
        self.state.write().await.tasks = tasks;
        let _ = self.event_tx.send(StoreEvent::TasksReplaced { count });
    }

    /// Set the in-progress title
    pub async fn set_draft_title(&self, title: impl Into<String>) {
        self.state.write().await.draft_title = title.into();
        let _ = self.event_tx.send(StoreEvent::DraftChanged);
    }
}

impl Default for TaskListStore {
    fn default() -> Self {
        Self::new()
    }
}
