//! Task persistence
//!
//! Stored tasks, the repository interface and its JSON file implementation.

mod file_store;
mod model;
mod repository;

pub use file_store::FileTaskStore;
pub use model::StoredTask;
pub use repository::TaskRepository;
