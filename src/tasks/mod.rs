//! # Task abstractions.
//!
//! This module provides the units of work the retry loop supervises:
//! - [`Task`] - trait for one launch-and-wait attempt
//! - [`CommandTask`] - runs a child process with inherited standard streams
//! - [`TaskFn`] - function-based task implementation
//! - [`TaskRef`] - shared reference to a task (`Arc<dyn Task>`)

mod command;
mod task;
mod task_fn;

pub use command::CommandTask;
pub use task::{Task, TaskRef};
pub use task_fn::TaskFn;
