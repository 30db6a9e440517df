//! # RetryLoop: run a task until it succeeds.
//!
//! Supervises execution of one [`Task`]:
//! - launches attempts strictly one after another,
//! - pauses between failures per [`BackoffStrategy`],
//! - stops at the first success, or at once when the task cannot be started.
//!
//! ## State machine
//! ```text
//! Start ──► attempt = 0, first_start = now
//!   │
//!   ▼
//! Launch ──► attempt += 1, last_start = now, publish AttemptStarting
//!   │
//!   ▼
//! Wait ──► run_once()
//!   ├─ Ok          ──► publish AttemptSucceeded ──► return RunReport
//!   ├─ Err(Fatal)  ──► (SpawnFailed published)  ──► return Err
//!   └─ Err(Fail)   ──► Backoff
//!                        ├─► pause = strategy.next(attempt)
//!                        ├─► publish BackoffScheduled
//!                        ├─► sleep(pause)
//!                        └─► Launch
//! ```
//!
//! ## Rules
//! - Attempts run **sequentially** (one child at a time).
//! - Attempt counter starts at 1 and **increments by one per launch**, never resets.
//! - There is **no attempt limit** and no internal cancellation; only
//!   terminating the process stops a task that never succeeds.
//! - No pause before the first attempt, none after the successful one.

use std::time::Duration;

use tokio::time::{self, Instant};

use crate::{
    core::runner::run_once,
    error::TaskError,
    events::{Event, EventKind},
    policies::BackoffStrategy,
    subscribers::SubscriberSet,
    tasks::TaskRef,
};

/// Summary of a run that ended in success.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunReport {
    /// Number of launches, including the successful one.
    pub attempts: u32,
    /// Time since the first attempt started.
    pub total: Duration,
    /// Duration of the successful attempt.
    pub last_attempt: Duration,
}

/// Retries a single [`TaskRef`] with backoff until it succeeds.
pub struct RetryLoop {
    task: TaskRef,
    strategy: BackoffStrategy,
    subs: SubscriberSet,
}

impl RetryLoop {
    /// Creates a loop for `task` using `strategy` between failures.
    pub fn new(task: TaskRef, strategy: BackoffStrategy, subs: SubscriberSet) -> Self {
        Self {
            task,
            strategy,
            subs,
        }
    }

    /// Runs the loop until the task succeeds or fails fatally.
    ///
    /// Returns the [`RunReport`] of the successful run, or the fatal
    /// [`TaskError`] that ended it. Retryable failures never escape.
    pub async fn run(self) -> Result<RunReport, TaskError> {
        let name = self.task.name().to_string();
        let first_start = Instant::now();
        let mut attempt: u32 = 0;

        loop {
            attempt += 1;
            let last_start = Instant::now();

            self.subs
                .emit(
                    &Event::new(EventKind::AttemptStarting)
                        .with_task(name.as_str())
                        .with_attempt(attempt)
                        .with_elapsed(first_start.elapsed()),
                )
                .await;

            match run_once(self.task.as_ref(), attempt, last_start, &self.subs).await {
                Ok(()) => {
                    let report = RunReport {
                        attempts: attempt,
                        total: first_start.elapsed(),
                        last_attempt: last_start.elapsed(),
                    };
                    self.subs
                        .emit(
                            &Event::new(EventKind::AttemptSucceeded)
                                .with_task(name.as_str())
                                .with_attempt(report.attempts)
                                .with_took(report.last_attempt)
                                .with_elapsed(report.total),
                        )
                        .await;
                    return Ok(report);
                }
                Err(e) if !e.is_retryable() => return Err(e),
                Err(e) => {
                    let delay = self.strategy.next(attempt);

                    self.subs
                        .emit(
                            &Event::new(EventKind::BackoffScheduled)
                                .with_task(name.as_str())
                                .with_attempt(attempt)
                                .with_delay(delay)
                                .with_elapsed(first_start.elapsed())
                                .with_reason(e.as_message()),
                        )
                        .await;

                    time::sleep(delay).await;
                }
            }
        }
    }
}
