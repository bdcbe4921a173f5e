use crate::sync::{SyncController, SyncOutcome};

/// Something the user did in the view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// The input text changed
    EditDraft(String),
    /// The form was submitted
    Submit,
    /// "done" was clicked on a row
    Complete(String),
    /// "undo" was clicked on a row
    Undo(String),
    /// "delete" was clicked on a row
    Delete(String),
    ClearAll,
    Refresh,
}

/// Route an intent to the store or the controller
pub async fn dispatch(controller: &SyncController, intent: Intent) -> SyncOutcome {
    match intent {
        Intent::EditDraft(text) => {
            controller.store().set_draft_title(text).await;
            SyncOutcome::Applied
        }
        Intent::Submit => controller.submit().await,
        Intent::Complete(id) => controller.complete(&id).await,
        Intent::Undo(id) => controller.uncomplete(&id).await,
        Intent::Delete(id) => controller.delete(&id).await,
        Intent::ClearAll => controller.clear_all().await,
        Intent::Refresh => controller.refresh().await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::TaskApi;
    use crate::error::SyncError;
    use crate::task::{TaskListStore, TaskRecord};
    use crate::Result;
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    /// Records which remote calls were made
    #[derive(Default)]
    struct RecordingApi {
        calls: Mutex<Vec<String>>,
    }

    impl RecordingApi {
        fn record(&self, call: String) {
            self.calls.lock().unwrap().push(call);
        }
    }

    #[async_trait]
    impl TaskApi for RecordingApi {
        async fn list(&self) -> Result<Option<Vec<TaskRecord>>> {
            self.record("list".to_string());
            Ok(None)
        }

        async fn create(&self, title: &str) -> Result<()> {
            self.record(format!("create {}", title));
            Ok(())
        }

        async fn complete(&self, id: &str) -> Result<()> {
            self.record(format!("complete {}", id));
            Ok(())
        }

        async fn uncomplete(&self, id: &str) -> Result<()> {
            self.record(format!("uncomplete {}", id));
            Ok(())
        }

        async fn delete(&self, id: &str) -> Result<()> {
            self.record(format!("delete {}", id));
            Err(SyncError::status(404, "gone"))
        }

        async fn delete_all(&self) -> Result<u64> {
            self.record("delete_all".to_string());
            Ok(0)
        }
    }

    fn setup() -> (SyncController, Arc<RecordingApi>) {
        let api = Arc::new(RecordingApi::default());
        (SyncController::new(api.clone(), TaskListStore::new()), api)
    }

    #[tokio::test]
    async fn test_typing_only_touches_the_draft() {
        let (controller, api) = setup();

        let outcome = dispatch(&controller, Intent::EditDraft("buy".to_string())).await;

        assert_eq!(outcome, SyncOutcome::Applied);
        assert_eq!(controller.store().draft_title().await, "buy");
        assert!(api.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_submit_creates_from_draft() {
        let (controller, api) = setup();
        dispatch(&controller, Intent::EditDraft("buy milk".to_string())).await;

        dispatch(&controller, Intent::Submit).await;

        assert_eq!(
            *api.calls.lock().unwrap(),
            vec!["create buy milk".to_string(), "list".to_string()]
        );
    }

    #[tokio::test]
    async fn test_row_clicks_map_to_operations() {
        let (controller, api) = setup();

        dispatch(&controller, Intent::Complete("7".to_string())).await;
        dispatch(&controller, Intent::Undo("7".to_string())).await;
        let deleted = dispatch(&controller, Intent::Delete("7".to_string())).await;

        assert_eq!(deleted, SyncOutcome::Failed);
        assert_eq!(
            *api.calls.lock().unwrap(),
            vec!["complete 7", "list", "uncomplete 7", "list", "delete 7"]
        );
    }
}
