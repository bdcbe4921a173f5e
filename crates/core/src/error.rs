//! Error types for the core library

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SyncError {
    /// The request never produced an HTTP response
    #[error("Transport error: {message}")]
    Transport { message: String },

    /// The server answered with a non-success status
    #[error("Server returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body did not have the expected shape
    #[error("Malformed response: {message}")]
    Malformed { message: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl SyncError {
    /// Create a Transport error
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Create a Status error
    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self::Status {
            status,
            body: body.into(),
        }
    }

    /// Create a Malformed error
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed {
            message: message.into(),
        }
    }
}
