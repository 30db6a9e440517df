//! # Run a single attempt of a task.
//!
//! Executes one attempt of a [`Task`] and publishes the failure events for it.
//!
//! ## Event flow
//!
//! ```text
//! Success:
//!   task.run() → Ok(())           → (nothing; the loop reports the final outcome)
//!
//! Failure:
//!   task.run() → Err(Fail)        → publish AttemptFailed
//!
//! Start failure:
//!   task.run() → Err(Fatal)       → publish SpawnFailed
//! ```
//!
//! ## Rules
//! - Publishes **at most one** event per attempt.
//! - Never sleeps and never retries; that is the loop's job.

use tokio::time::Instant;

use crate::{
    error::TaskError,
    events::{Event, EventKind},
    subscribers::SubscriberSet,
    tasks::Task,
};

/// Executes a single attempt of `task`, publishing failure events to `subs`.
///
/// `started` is the instant the attempt began; it is used to stamp how long
/// a failed attempt ran.
pub async fn run_once<T: Task + ?Sized>(
    task: &T,
    attempt: u32,
    started: Instant,
    subs: &SubscriberSet,
) -> Result<(), TaskError> {
    let res = task.run().await;

    match &res {
        Ok(()) => {}
        Err(e) if e.is_retryable() => {
            let ev = Event::new(EventKind::AttemptFailed)
                .with_task(task.name())
                .with_attempt(attempt)
                .with_took(started.elapsed())
                .with_reason(e.as_message());
            subs.emit(&ev).await;
        }
        Err(e) => {
            let ev = Event::new(EventKind::SpawnFailed)
                .with_task(task.name())
                .with_attempt(attempt)
                .with_reason(e.as_message());
            subs.emit(&ev).await;
        }
    }
    res
}
