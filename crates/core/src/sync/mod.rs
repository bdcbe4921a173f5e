//! Synchronization between the local store and the remote task store
//!
//! Every mutation is followed by a full refetch; the store is never patched
//! locally.

mod controller;

pub use controller::{SyncController, SyncOutcome};
