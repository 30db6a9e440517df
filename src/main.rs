//! `try` - re-run a command until it succeeds.
//!
//! ```text
//! try [strategy] <command> [args...]
//! ```
//!
//! Exit codes: `0` once the command succeeds, `1` for usage, example output
//! or a command that cannot be started.

use std::process::ExitCode;
use std::sync::Arc;

use clap::{CommandFactory, Parser};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use retryvisor::cli::{self, Cli, Invocation};
use retryvisor::{Config, LogWriter, RetryLoop, Subscribe, SubscriberSet};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Cli::parse();
    init_tracing();

    execute(Invocation::resolve(args.args, Config::default())).await
}

/// Carries out `invocation` and maps its outcome to the process exit code.
async fn execute(invocation: Invocation) -> ExitCode {
    match invocation {
        Invocation::Usage => {
            print!("{}", cli::usage(Cli::command().get_name()));
            ExitCode::FAILURE
        }
        Invocation::Example(cfg) => {
            print!("{}", cli::example(&cfg));
            ExitCode::FAILURE
        }
        Invocation::Run { config, command } => {
            let subs = SubscriberSet::new(vec![Arc::new(LogWriter::new()) as Arc<dyn Subscribe>]);

            // Failures are reported by LogWriter as they happen.
            match RetryLoop::new(Arc::new(command), config.strategy, subs)
                .run()
                .await
            {
                Ok(_) => ExitCode::SUCCESS,
                Err(_) => ExitCode::FAILURE,
            }
        }
    }
}

/// Log lines go to stderr, away from the child's inherited stdout.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(EnvFilter::new("info"))
        .init();
}
