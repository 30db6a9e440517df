//! # Child process task (`CommandTask`)
//!
//! [`CommandTask`] runs a program with arguments as one attempt:
//!
//! ```text
//! run()
//!   ├─► Command::new(program).args(args)
//!   │     stdin/stdout/stderr inherited (no capture, no buffering)
//!   ├─► spawn() ── Err ──► TaskError::Fatal   (not found, permission denied, ...)
//!   └─► wait()  ── exit 0        ──► Ok(())
//!               ── exit != 0     ──► TaskError::Fail
//!               ── killed by sig ──► TaskError::Fail
//! ```
//!
//! The child is killed if the supervisor drops the wait future, so an
//! aborted run never leaves an orphan behind.

use std::ffi::{OsStr, OsString};
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::error::{RuntimeError, TaskError};
use crate::tasks::task::Task;

/// Runs one program invocation per attempt.
///
/// Program and arguments are kept as [`OsString`], so arguments that are not
/// valid UTF-8 reach the child byte for byte.
#[derive(Clone, Debug)]
pub struct CommandTask {
    name: String,
    program: OsString,
    args: Vec<OsString>,
}

impl CommandTask {
    /// Creates a task for `program` invoked with `args`.
    pub fn new<I, S>(program: impl Into<OsString>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        let program = program.into();
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
        let name = std::iter::once(&program)
            .chain(args.iter())
            .map(|part| part.to_string_lossy())
            .collect::<Vec<_>>()
            .join(" ");

        Self {
            name,
            program,
            args,
        }
    }

    /// Splits a full command line (`program` followed by its arguments).
    ///
    /// Returns `None` for an empty command.
    pub fn from_argv(argv: Vec<OsString>) -> Option<Self> {
        let mut it = argv.into_iter();
        let program = it.next()?;
        Some(Self::new(program, it))
    }

    /// Program being executed.
    pub fn program(&self) -> &OsStr {
        &self.program
    }

    /// Arguments passed to the program.
    pub fn args(&self) -> &[OsString] {
        &self.args
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .kill_on_drop(true);
        cmd
    }
}

#[async_trait]
impl Task for CommandTask {
    fn name(&self) -> &str {
        &self.name
    }

    async fn run(&self) -> Result<(), TaskError> {
        let mut child = self.command().spawn().map_err(|source| RuntimeError::Spawn {
            program: self.program.to_string_lossy().into_owned(),
            source,
        })?;

        let status = child.wait().await.map_err(|source| RuntimeError::Wait {
            program: self.program.to_string_lossy().into_owned(),
            source,
        })?;

        if status.success() {
            Ok(())
        } else {
            Err(TaskError::Fail {
                error: status.to_string(),
            })
        }
    }
}
