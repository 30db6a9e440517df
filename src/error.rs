//! Error types used by the retry loop, its tasks and the command line.
//!
//! - [`TaskError`] - outcome of a single failed attempt (retryable or fatal).
//! - [`RuntimeError`] - failures of the supervisor's own process plumbing.
//! - [`ParseStrategyError`] - a strategy name that is not one of the known keywords.
//!
//! [`TaskError`] and [`RuntimeError`] provide `as_label` for logs and
//! [`TaskError::is_retryable`] to drive the retry decision.

use std::io;
use thiserror::Error;

/// # Errors produced by the supervisor's process plumbing.
///
/// These describe a child that could not be run at all, as opposed to a
/// child that ran and exited with a failure status.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum RuntimeError {
    /// The child process could not be created (not found, permission denied, ...).
    #[error("failed to start {program}: {source}")]
    Spawn {
        /// Program that was being launched.
        program: String,
        /// Underlying OS error.
        #[source]
        source: io::Error,
    },

    /// Waiting on a started child failed.
    #[error("failed to wait for {program}: {source}")]
    Wait {
        /// Program that was being waited on.
        program: String,
        /// Underlying OS error.
        #[source]
        source: io::Error,
    },
}

impl RuntimeError {
    /// Returns a short stable label (snake_case) for use in logs.
    ///
    /// # Example
    /// ```
    /// use std::io;
    /// use retryvisor::RuntimeError;
    ///
    /// let err = RuntimeError::Spawn {
    ///     program: "nope".into(),
    ///     source: io::Error::from(io::ErrorKind::NotFound),
    /// };
    /// assert_eq!(err.as_label(), "runtime_spawn_failed");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            RuntimeError::Spawn { .. } => "runtime_spawn_failed",
            RuntimeError::Wait { .. } => "runtime_wait_failed",
        }
    }
}

/// # Errors produced by one attempt.
///
/// `Fail` means the child ran and reported failure; the loop retries it.
/// `Fatal` means there is nothing worth retrying; the loop stops at once.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum TaskError {
    /// Non-recoverable error (should not be retried).
    #[error("fatal error (no retry): {error}")]
    Fatal {
        /// The underlying error message.
        error: String,
    },

    /// Attempt failed but may succeed if retried.
    #[error("execution failed: {error}")]
    Fail {
        /// The underlying error message.
        error: String,
    },
}

impl TaskError {
    /// Returns a short stable label (snake_case) for use in logs.
    ///
    /// # Example
    /// ```
    /// use retryvisor::TaskError;
    ///
    /// let err = TaskError::Fail { error: "exit status: 1".into() };
    /// assert_eq!(err.as_label(), "task_failed");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            TaskError::Fatal { .. } => "task_fatal",
            TaskError::Fail { .. } => "task_failed",
        }
    }

    /// Returns the bare error message without the variant prefix.
    pub fn as_message(&self) -> &str {
        match self {
            TaskError::Fatal { error } | TaskError::Fail { error } => error,
        }
    }

    /// Indicates whether the loop should back off and try again.
    ///
    /// # Example
    /// ```
    /// use retryvisor::TaskError;
    ///
    /// assert!(TaskError::Fail { error: "boom".into() }.is_retryable());
    /// assert!(!TaskError::Fatal { error: "nope".into() }.is_retryable());
    /// ```
    pub fn is_retryable(&self) -> bool {
        matches!(self, TaskError::Fail { .. })
    }
}

impl From<RuntimeError> for TaskError {
    /// Plumbing failures are never transient from the loop's point of view.
    fn from(err: RuntimeError) -> Self {
        TaskError::Fatal {
            error: err.to_string(),
        }
    }
}

/// A backoff strategy name that is not recognized.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unsupported backoff strategy {input:?} (expected constant, linear or exponential)")]
pub struct ParseStrategyError {
    /// The rejected input.
    pub input: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_error_becomes_fatal() {
        let err: TaskError = RuntimeError::Spawn {
            program: "missing-binary".into(),
            source: io::Error::from(io::ErrorKind::NotFound),
        }
        .into();

        assert!(!err.is_retryable());
        assert_eq!(err.as_label(), "task_fatal");
        assert!(err.as_message().starts_with("failed to start missing-binary"));
    }

    #[test]
    fn test_fail_is_retryable() {
        let err = TaskError::Fail {
            error: "exit status: 3".into(),
        };
        assert!(err.is_retryable());
        assert_eq!(err.as_message(), "exit status: 3");
        assert_eq!(err.to_string(), "execution failed: exit status: 3");
    }

    #[test]
    fn test_parse_error_names_input() {
        let err = ParseStrategyError {
            input: "quadratic".into(),
        };
        assert!(err.to_string().contains("\"quadratic\""));
    }
}
