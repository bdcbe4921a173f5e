//! Core library for the todo sync client
//!
//! This crate contains the client-side logic, including:
//! - Task list state and its store
//! - The HTTP client for the remote task store
//! - The sync controller that reconciles local state with the server
//! - The view mapping from state to rendered rows and from intents to operations

pub mod api;
pub mod config;
pub mod error;
pub mod sync;
pub mod task;
pub mod view;

pub use config::ClientConfig;
pub use error::SyncError;
pub use sync::{SyncController, SyncOutcome};
pub type Result<T> = std::result::Result<T, SyncError>;
