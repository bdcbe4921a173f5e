//! View layer
//!
//! A pure mapping from [`TaskListState`](crate::task::TaskListState) to rows
//! and an input form, plus the intents a user can emit back into the
//! controller.

mod intent;
mod render;

pub use intent::{dispatch, Intent};
pub use render::{render, InputForm, RowStyle, TaskListView, TaskRow};
