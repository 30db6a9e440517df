//! # LogWriter - console progress reporter
//!
//! The subscriber behind `try`'s own output. Progress and outcome lines go
//! through `tracing` (stderr in the binary), never through the child's
//! inherited stdout/stderr handles.
//!
//! ## Example output
//! ```text
//! [try] Command failed after 1 attempt (started trying now), trying again 2 seconds from now...
//! [try] Command failed after 2 attempts (started trying 2 seconds ago), trying again 4 seconds from now...
//! [try] Command succeeded after 3 attempts (took 1.2s, started trying 7 seconds ago, 7.3s in total)
//! [try] failed to start nope: No such file or directory (os error 2)
//! ```

use async_trait::async_trait;

use crate::events::{Event, EventKind};
use crate::humanize::{self, Tense};
use crate::subscribers::Subscribe;

/// Event writer subscriber.
#[derive(Default)]
pub struct LogWriter;

impl LogWriter {
    /// Construct a new [`LogWriter`].
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Renders the console line for `e`, or `None` if the event is not
    /// reported at the default level.
    pub fn render(e: &Event) -> Option<String> {
        let attempts = humanize::plural(e.attempt.unwrap_or_default(), "attempt");
        let since_first = humanize::relative(e.elapsed.unwrap_or_default(), Tense::Past);

        match e.kind {
            EventKind::BackoffScheduled => Some(format!(
                "[try] Command failed after {attempts} (started trying {since_first}), trying again {}...",
                humanize::relative(e.delay.unwrap_or_default(), Tense::Future),
            )),
            EventKind::AttemptSucceeded => Some(format!(
                "[try] Command succeeded after {attempts} (took {}, started trying {since_first}, {} in total)",
                humanize::duration(e.took.unwrap_or_default()),
                humanize::duration(e.elapsed.unwrap_or_default()),
            )),
            EventKind::SpawnFailed => Some(format!(
                "[try] {}",
                e.reason.as_deref().unwrap_or("failed to start command")
            )),
            EventKind::AttemptStarting | EventKind::AttemptFailed => None,
        }
    }
}

#[async_trait]
impl Subscribe for LogWriter {
    async fn on_event(&self, e: &Event) {
        match e.kind {
            EventKind::AttemptStarting => {
                tracing::debug!(task = ?e.task, attempt = ?e.attempt, "[try] starting");
            }
            EventKind::AttemptFailed => {
                tracing::debug!(
                    task = ?e.task,
                    attempt = ?e.attempt,
                    reason = ?e.reason,
                    "[try] attempt failed"
                );
            }
            EventKind::SpawnFailed => {
                if let Some(line) = Self::render(e) {
                    tracing::error!("{line}");
                }
            }
            EventKind::BackoffScheduled | EventKind::AttemptSucceeded => {
                if let Some(line) = Self::render(e) {
                    tracing::info!("{line}");
                }
            }
        }
    }

    fn name(&self) -> &'static str {
        "LogWriter"
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn test_backoff_line_carries_progress() {
        let ev = Event::new(EventKind::BackoffScheduled)
            .with_attempt(2)
            .with_elapsed(Duration::from_secs(3))
            .with_delay(Duration::from_secs(4));

        assert_eq!(
            LogWriter::render(&ev).as_deref(),
            Some(
                "[try] Command failed after 2 attempts (started trying 3 seconds ago), \
                 trying again 4 seconds from now..."
            )
        );
    }

    #[test]
    fn test_success_line_carries_totals() {
        let ev = Event::new(EventKind::AttemptSucceeded)
            .with_attempt(1)
            .with_took(Duration::from_millis(1500))
            .with_elapsed(Duration::from_millis(1500));

        assert_eq!(
            LogWriter::render(&ev).as_deref(),
            Some("[try] Command succeeded after 1 attempt (took 1.5s, started trying 1 second ago, 1.5s in total)")
        );
    }

    #[test]
    fn test_spawn_failure_line() {
        let ev = Event::new(EventKind::SpawnFailed).with_reason("failed to start nope: not found");
        assert_eq!(
            LogWriter::render(&ev).as_deref(),
            Some("[try] failed to start nope: not found")
        );
    }

    #[test]
    fn test_attempt_events_are_quiet() {
        assert!(LogWriter::render(&Event::new(EventKind::AttemptStarting)).is_none());
        assert!(LogWriter::render(&Event::new(EventKind::AttemptFailed)).is_none());
    }
}
