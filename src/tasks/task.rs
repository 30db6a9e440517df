//! # Task abstraction.
//!
//! This module defines the [`Task`] trait: one attempt that either succeeds
//! or reports a [`TaskError`]. The common handle type is [`TaskRef`], an
//! `Arc<dyn Task>` the retry loop can hold for the whole run.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::TaskError;

/// Shared handle to a task.
pub type TaskRef = Arc<dyn Task>;

/// # One retryable unit of work.
///
/// A `Task` has a stable [`name`](Task::name) and an async [`run`](Task::run)
/// method that performs exactly one attempt and resolves when it is over.
///
/// Return [`TaskError::Fail`] for outcomes worth retrying and
/// [`TaskError::Fatal`] for ones that are not.
///
/// # Example
/// ```
/// use async_trait::async_trait;
/// use retryvisor::{Task, TaskError};
///
/// struct Ping;
///
/// #[async_trait]
/// impl Task for Ping {
///     fn name(&self) -> &str { "ping" }
///
///     async fn run(&self) -> Result<(), TaskError> {
///         Ok(())
///     }
/// }
/// ```
#[async_trait]
pub trait Task: Send + Sync + 'static {
    /// Returns a stable, human-readable task name.
    fn name(&self) -> &str;

    /// Runs one attempt to completion.
    async fn run(&self) -> Result<(), TaskError>;
}
