//! # retryvisor
//!
//! **retryvisor** re-runs a command until it succeeds, pausing between
//! attempts according to a backoff strategy. It powers the `try` binary and
//! can be embedded to supervise any async [`Task`].
//!
//! ## Architecture
//! ### Overview
//! ```text
//!   argv ──► cli::Invocation ──► Config { strategy } + CommandTask
//!                                          │
//!                                          ▼
//! ┌───────────────────────────────────────────────────────────────────┐
//! │  RetryLoop (one task, sequential attempts)                        │
//! │  - attempt counter, first/last start marks                        │
//! │  - BackoffStrategy::next(attempt) after each failure              │
//! └──────┬───────────────────────────────────────────┬────────────────┘
//!        ▼                                           │ Publishes:
//!   run_once(task) ──► CommandTask::run()            │ - AttemptStarting
//!                        spawn child (inherit stdio) │ - AttemptFailed
//!                        wait for exit status        │ - BackoffScheduled
//!                                                    │ - AttemptSucceeded
//!                                                    │ - SpawnFailed
//!                                                    ▼
//!                                      SubscriberSet (inline, in order)
//!                                          ├──► LogWriter (tracing → stderr)
//!                                          └──► custom subscribers
//! ```
//!
//! ### Lifecycle
//! ```text
//! loop {
//!   ├─► attempt += 1
//!   ├─► publish AttemptStarting{ attempt }
//!   ├─► run_once(task)
//!   │       ├─ Ok          ─► publish AttemptSucceeded, return RunReport
//!   │       ├─ Err(Fatal)  ─► publish SpawnFailed, return Err (no retry)
//!   │       └─ Err(Fail)   ─► publish AttemptFailed
//!   │                         ├─ delay = strategy.next(attempt)
//!   │                         ├─ publish BackoffScheduled{ delay, attempt }
//!   │                         └─ sleep(delay)
//! }
//! ```
//!
//! ## Features
//! | Area              | Description                                              | Key types / traits                     |
//! |-------------------|----------------------------------------------------------|----------------------------------------|
//! | **Retry loop**    | Run a task until success with backoff between failures.  | [`RetryLoop`], [`RunReport`]           |
//! | **Policies**      | Constant, linear and quadratic ("exponential") delays.   | [`BackoffStrategy`]                    |
//! | **Tasks**         | Child processes or closures as retryable units.          | [`Task`], [`CommandTask`], [`TaskFn`]  |
//! | **Subscriber API**| Hook into loop events (logging, custom reporting).       | [`Subscribe`], [`LogWriter`]           |
//! | **Errors**        | Typed errors for attempts and process plumbing.          | [`TaskError`], [`RuntimeError`]        |
//! | **Configuration** | Settings resolved from the command line.                 | [`Config`], [`cli::Invocation`]        |
//!
//! ## Example
//! ```rust
//! use retryvisor::{BackoffStrategy, RetryLoop, SubscriberSet, TaskError, TaskFn, TaskRef};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), TaskError> {
//!     let task: TaskRef = TaskFn::arc("noop", || async { Ok::<_, TaskError>(()) });
//!
//!     let report = RetryLoop::new(task, BackoffStrategy::Linear, SubscriberSet::default())
//!         .run()
//!         .await?;
//!
//!     assert_eq!(report.attempts, 1);
//!     Ok(())
//! }
//! ```

pub mod cli;
mod config;
mod core;
mod error;
mod events;
pub mod humanize;
mod policies;
mod subscribers;
mod tasks;

pub use config::{Config, EXAMPLE_RETRIES};
pub use crate::core::{RetryLoop, RunReport};
pub use error::{ParseStrategyError, RuntimeError, TaskError};
pub use events::{Event, EventKind};
pub use policies::{BackoffStrategy, ScheduleEntry};
pub use subscribers::{LogWriter, Subscribe, SubscriberSet};
pub use tasks::{CommandTask, Task, TaskFn, TaskRef};
