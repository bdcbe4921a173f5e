use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Response};
use tracing::debug;

use super::TaskApi;
use crate::config::ClientConfig;
use crate::error::SyncError;
use crate::task::{NewTask, TaskRecord};
use crate::Result;

/// JSON-over-HTTP client for the remote task store
pub struct HttpTaskApi {
    client: Client,
    base_url: String,
}

impl HttpTaskApi {
    pub fn new(config: &ClientConfig) -> Self {
        Self::with_client(config, Client::new())
    }

    /// Use a preconfigured reqwest client
    pub fn with_client(config: &ClientConfig, client: Client) -> Self {
        Self {
            client,
            base_url: config.base_url().to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn task_url(&self, prefix: &str, id: &str) -> String {
        format!("{}{}/{}", self.base_url, prefix, urlencoding::encode(id))
    }

    async fn put_empty(&self, url: String) -> Result<()> {
        debug!("PUT {}", url);
        let res = self
            .client
            .put(url)
            .json(&serde_json::json!({}))
            .send()
            .await
            .map_err(|e| SyncError::transport(format!("Failed to reach task store: {}", e)))?;

        let res = ensure_success(res).await?;
        debug!("Task store answered {}", res.status());
        Ok(())
    }
}

/// Turn a non-success response into a Status error, keeping the body for the log
async fn ensure_success(res: Response) -> Result<Response> {
    let status = res.status();
    if status.is_success() {
        return Ok(res);
    }
    let body = res.text().await.unwrap_or_else(|_| String::new());
    Err(SyncError::status(status.as_u16(), body))
}

/// Decode a list response body
///
/// An empty body or `null` counts as "no data". Anything that is not an
/// array of task records is malformed.
pub fn decode_task_list(body: &str) -> Result<Option<Vec<TaskRecord>>> {
    if body.trim().is_empty() {
        return Ok(None);
    }

    let value: serde_json::Value = serde_json::from_str(body)
        .map_err(|e| SyncError::malformed(format!("task list is not JSON: {}", e)))?;

    match value {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::Array(_) => serde_json::from_value(value)
            .map(Some)
            .map_err(|e| SyncError::malformed(format!("invalid task entry: {}", e))),
        other => Err(SyncError::malformed(format!(
            "expected an array of tasks, got {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

#[async_trait]
impl TaskApi for HttpTaskApi {
    async fn list(&self) -> Result<Option<Vec<TaskRecord>>> {
        let url = self.url("/api/task");
        debug!("GET {}", url);

        let res = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| SyncError::transport(format!("Failed to reach task store: {}", e)))?;
        let res = ensure_success(res).await?;

        let body = res
            .text()
            .await
            .map_err(|e| SyncError::transport(format!("Failed to read task list: {}", e)))?;
        decode_task_list(&body)
    }

    async fn create(&self, title: &str) -> Result<()> {
        let url = self.url("/api/tasks");
        debug!("POST {}", url);

        let req = NewTask {
            task: title.to_string(),
        };
        let res = self
            .client
            .post(url)
            .json(&req)
            .send()
            .await
            .map_err(|e| SyncError::transport(format!("Failed to reach task store: {}", e)))?;

        let res = ensure_success(res).await?;
        debug!("Task store answered {}", res.status());
        Ok(())
    }

    async fn complete(&self, id: &str) -> Result<()> {
        self.put_empty(self.task_url("/api/tasks", id)).await
    }

    async fn uncomplete(&self, id: &str) -> Result<()> {
        self.put_empty(self.task_url("/api/undoTask", id)).await
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let url = self.task_url("/api/deleteTask", id);
        debug!("DELETE {}", url);

        let res = self
            .client
            .delete(url)
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(|e| SyncError::transport(format!("Failed to reach task store: {}", e)))?;

        ensure_success(res).await?;
        Ok(())
    }

    async fn delete_all(&self) -> Result<u64> {
        let url = self.url("/api/deleteAllTask");
        debug!("DELETE {}", url);

        let res = self
            .client
            .delete(url)
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(|e| SyncError::transport(format!("Failed to reach task store: {}", e)))?;
        let res = ensure_success(res).await?;

        res.json::<u64>()
            .await
            .map_err(|e| SyncError::malformed(format!("invalid delete count: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_body_is_no_data() {
        assert_eq!(decode_task_list("").unwrap(), None);
        assert_eq!(decode_task_list("  \n").unwrap(), None);
    }

    #[test]
    fn test_null_is_no_data() {
        assert_eq!(decode_task_list("null\n").unwrap(), None);
    }

    #[test]
    fn test_array_decodes_in_order() {
        let body = r#"[
            {"_id": "1", "task": "buy milk", "status": false},
            {"_id": "2", "task": "walk dog", "status": true}
        ]"#;
        let records = decode_task_list(body).unwrap().unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].task, "buy milk");
        assert!(records[1].status);
    }

    #[test]
    fn test_non_array_is_malformed() {
        let err = decode_task_list(r#"{"tasks": []}"#).unwrap_err();
        match err {
            SyncError::Malformed { message } => assert!(message.contains("an object")),
            e => panic!("Expected Malformed error, got: {:?}", e),
        }
    }

    #[test]
    fn test_entry_without_id_is_malformed() {
        let err = decode_task_list(r#"[{"task": "orphan"}]"#).unwrap_err();
        assert!(matches!(err, SyncError::Malformed { .. }));
    }

    #[test]
    fn test_invalid_json_is_malformed() {
        let err = decode_task_list("<html>").unwrap_err();
        assert!(matches!(err, SyncError::Malformed { .. }));
    }

    #[test]
    fn test_ids_are_percent_encoded() {
        let api = HttpTaskApi::new(&ClientConfig::new("http://localhost:9000/"));
        assert_eq!(
            api.task_url("/api/deleteTask", "a b/c"),
            "http://localhost:9000/api/deleteTask/a%20b%2Fc"
        );
    }
}
