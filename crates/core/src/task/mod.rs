//! Task module
//!
//! This module contains the task types and the client-side state store.

mod model;
mod store;

pub use model::*;
pub use store::{StoreEvent, TaskListStore};
