//! # Events emitted by the retry loop.
//!
//! The [`EventKind`] enum classifies what happened during one run:
//! - **Attempt events**: an attempt starts, succeeds or fails
//! - **Scheduling events**: a pause before the next attempt was decided
//! - **Terminal events**: the child could not be started at all
//!
//! The [`Event`] struct carries the metadata the reporters need: attempt
//! number, the chosen delay and how long the run has been going.
//!
//! ## Ordering guarantees
//! Each event has a process-wide sequence number (`seq`) that increases
//! monotonically. Events of one run are also delivered in order, since
//! subscribers are called inline.
//!
//! ## Example
//! ```rust
//! use std::time::Duration;
//! use retryvisor::{Event, EventKind};
//!
//! let ev = Event::new(EventKind::BackoffScheduled)
//!     .with_task("make")
//!     .with_attempt(3)
//!     .with_delay(Duration::from_secs(6));
//!
//! assert_eq!(ev.kind, EventKind::BackoffScheduled);
//! assert_eq!(ev.task.as_deref(), Some("make"));
//! assert_eq!(ev.delay, Some(Duration::from_secs(6)));
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::time::{Duration, SystemTime};

/// Global sequence counter for event ordering.
static EVENT_SEQ: AtomicU64 = AtomicU64::new(0);

/// Classification of retry loop events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// An attempt is about to launch.
    ///
    /// Sets:
    /// - `task`: task name
    /// - `attempt`: attempt number (1-based)
    /// - `elapsed`: time since the first attempt started
    AttemptStarting,

    /// The attempt finished successfully; the run is over.
    ///
    /// Sets:
    /// - `task`: task name
    /// - `attempt`: total number of attempts
    /// - `took`: duration of this last attempt
    /// - `elapsed`: time since the first attempt started
    AttemptSucceeded,

    /// The attempt ran and failed (non-zero exit or killed by a signal).
    ///
    /// Sets:
    /// - `task`: task name
    /// - `attempt`: attempt number
    /// - `took`: duration of the attempt
    /// - `reason`: failure message
    AttemptFailed,

    /// The next attempt is scheduled after a pause.
    ///
    /// Sets:
    /// - `task`: task name
    /// - `attempt`: the attempt that just failed
    /// - `delay`: pause before the next attempt
    /// - `elapsed`: time since the first attempt started
    /// - `reason`: last failure message
    BackoffScheduled,

    /// The child could not be started; the run ends without retrying.
    ///
    /// Sets:
    /// - `task`: task name
    /// - `attempt`: attempt number
    /// - `reason`: error message
    SpawnFailed,
}

/// Retry loop event with optional metadata.
///
/// - `seq`: monotonic global sequence for ordering
/// - `at`: wall-clock timestamp
/// - other optional fields are set depending on the [`EventKind`]
#[derive(Clone, Debug)]
pub struct Event {
    /// Globally unique, monotonically increasing sequence number.
    pub seq: u64,
    /// Wall-clock timestamp.
    pub at: SystemTime,
    /// Event classification.
    pub kind: EventKind,

    /// Name of the task (the command line being retried).
    pub task: Option<Arc<str>>,
    /// Attempt count (starting from 1).
    pub attempt: Option<u32>,
    /// Pause before the next attempt.
    pub delay: Option<Duration>,
    /// Time since the first attempt started.
    pub elapsed: Option<Duration>,
    /// Duration of the attempt this event refers to.
    pub took: Option<Duration>,
    /// Human-readable reason (exit status, spawn error).
    pub reason: Option<Arc<str>>,
}

impl Event {
    /// Creates a new event of the given kind with current timestamp and next sequence number.
    pub fn new(kind: EventKind) -> Self {
        Self {
            seq: EVENT_SEQ.fetch_add(1, AtomicOrdering::Relaxed),
            at: SystemTime::now(),
            kind,
            task: None,
            attempt: None,
            delay: None,
            elapsed: None,
            took: None,
            reason: None,
        }
    }

    /// Attaches a task name.
    #[inline]
    pub fn with_task(mut self, task: impl Into<Arc<str>>) -> Self {
        self.task = Some(task.into());
        self
    }

    /// Attaches an attempt count.
    #[inline]
    pub fn with_attempt(mut self, n: u32) -> Self {
        self.attempt = Some(n);
        self
    }

    /// Attaches a backoff delay.
    #[inline]
    pub fn with_delay(mut self, d: Duration) -> Self {
        self.delay = Some(d);
        self
    }

    /// Attaches the time since the first attempt.
    #[inline]
    pub fn with_elapsed(mut self, d: Duration) -> Self {
        self.elapsed = Some(d);
        self
    }

    /// Attaches the duration of the current attempt.
    #[inline]
    pub fn with_took(mut self, d: Duration) -> Self {
        self.took = Some(d);
        self
    }

    /// Attaches a human-readable reason.
    #[inline]
    pub fn with_reason(mut self, reason: impl Into<Arc<str>>) -> Self {
        self.reason = Some(reason.into());
        self
    }
}
