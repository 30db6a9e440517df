//! # Command-line surface of `try`.
//!
//! ```text
//! try [strategy] <command> [args...]
//! ```
//!
//! clap collects the raw argument vector (every token, hyphens included, so
//! flags reach the child untouched). [`Invocation::resolve`] then decides
//! what to do with it:
//!
//! | argv                              | Invocation                               |
//! |-----------------------------------|------------------------------------------|
//! | *(empty)*                         | [`Invocation::Usage`]                    |
//! | `linear`                          | [`Invocation::Example`] for `linear`     |
//! | `linear make test`                | run `make test` with `linear`            |
//! | `make test`                       | run `make test` with `constant`          |
//!
//! A strategy keyword is only consumed on an exact match; anything else is
//! the start of the command. One `--` separator right before the command is
//! dropped, with or without a strategy: `try -- ls` and `try linear -- ls`
//! both run `ls`.
//!
//! Arguments are carried as [`OsString`], so tokens that are not valid
//! UTF-8 are passed to the child unchanged.

use std::ffi::OsString;

use clap::Parser;

use crate::config::Config;
use crate::humanize::{self, Tense};
use crate::policies::BackoffStrategy;
use crate::tasks::CommandTask;

/// Raw command line.
#[derive(Parser, Debug)]
#[command(
    name = "try",
    about = "Re-run a command until it succeeds, pausing between attempts",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Cli {
    /// Optional strategy keyword followed by the command and its arguments.
    #[arg(
        value_name = "ARGS",
        num_args = 0..,
        trailing_var_arg = true,
        allow_hyphen_values = true,
        value_parser = clap::value_parser!(OsString)
    )]
    pub args: Vec<OsString>,
}

/// What a given argument vector asks for.
#[derive(Debug)]
pub enum Invocation {
    /// No arguments: print usage and fail.
    Usage,
    /// Strategy keyword alone: print its example schedule and fail.
    Example(Config),
    /// Retry `command` with `config.strategy`.
    Run {
        /// Resolved settings.
        config: Config,
        /// Child command to supervise.
        command: CommandTask,
    },
}

impl Invocation {
    /// Resolves `args` (as collected by [`Cli`], without the program name)
    /// on top of `base`.
    ///
    /// clap already drops a `--` in front of the first token; a `--` between
    /// the strategy keyword and the command is dropped here.
    pub fn resolve(mut args: Vec<OsString>, base: Config) -> Self {
        let Some(first) = args.first() else {
            return Invocation::Usage;
        };

        let config = match first.to_str().and_then(|s| s.parse::<BackoffStrategy>().ok()) {
            Some(strategy) => {
                args.remove(0);
                if args.first().is_some_and(|next| next == "--") {
                    args.remove(0);
                }
                base.with_strategy(strategy)
            }
            None => base,
        };

        match CommandTask::from_argv(args) {
            Some(command) => Invocation::Run { config, command },
            None => Invocation::Example(config),
        }
    }
}

/// Usage text printed when no arguments are given.
pub fn usage(program: &str) -> String {
    let strategies = BackoffStrategy::ALL
        .iter()
        .map(|s| {
            if *s == BackoffStrategy::default() {
                format!("{s} (default)")
            } else {
                s.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(", ");

    format!("usage: {program} [strategy] [command] [arg]...\nstrategies: {strategies}\n")
}

/// Example schedule for `cfg.strategy`, one line per attempt.
///
/// ```text
/// Example for the first 20 retries:
/// 1st attempt after 0s (now)
/// 2nd attempt after 2s (2 seconds from now)
/// 3rd attempt after 4s (6 seconds from now)
/// ...
/// ```
pub fn example(cfg: &Config) -> String {
    let rows = cfg.strategy.schedule(cfg.example_retries).into_iter().map(|row| {
        format!(
            "{} attempt after {} ({})\n",
            humanize::ordinal(row.attempt),
            humanize::duration(row.delay),
            humanize::relative(row.cumulative, Tense::Future),
        )
    });

    std::iter::once(format!(
        "Example for the first {} retries:\n",
        cfg.example_retries
    ))
    .chain(rows)
    .chain(std::iter::once("...\n".to_string()))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(list: &[&str]) -> Vec<OsString> {
        list.iter().map(OsString::from).collect()
    }

    fn parsed(list: &[&str]) -> Invocation {
        let cli = Cli::try_parse_from(std::iter::once("try").chain(list.iter().copied())).unwrap();
        Invocation::resolve(cli.args, Config::default())
    }

    #[test]
    fn test_no_args_is_usage() {
        assert!(matches!(
            Invocation::resolve(vec![], Config::default()),
            Invocation::Usage
        ));
    }

    #[test]
    fn test_keyword_alone_is_example() {
        match Invocation::resolve(argv(&["exponential"]), Config::default()) {
            Invocation::Example(cfg) => assert_eq!(cfg.strategy, BackoffStrategy::Exponential),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_keyword_is_consumed() {
        match Invocation::resolve(argv(&["linear", "make", "-j4", "test"]), Config::default()) {
            Invocation::Run { config, command } => {
                assert_eq!(config.strategy, BackoffStrategy::Linear);
                assert_eq!(command.program(), "make");
                assert_eq!(command.args(), ["-j4", "test"]);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_unknown_first_token_defaults_to_constant() {
        for first in ["curl", "Linear", "exp", "--linear"] {
            match Invocation::resolve(argv(&[first, "x"]), Config::default()) {
                Invocation::Run { config, command } => {
                    assert_eq!(config.strategy, BackoffStrategy::Constant);
                    assert_eq!(command.program(), first);
                    assert_eq!(command.args(), ["x"]);
                }
                other => panic!("unexpected {other:?}"),
            }
        }
    }

    #[test]
    fn test_only_first_keyword_is_consumed() {
        match Invocation::resolve(argv(&["constant", "linear"]), Config::default()) {
            Invocation::Run { config, command } => {
                assert_eq!(config.strategy, BackoffStrategy::Constant);
                assert_eq!(command.program(), "linear");
                assert!(command.args().is_empty());
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_clap_keeps_hyphenated_tokens() {
        let cli = Cli::try_parse_from(["try", "linear", "ls", "-la", "--color=never"]).unwrap();
        assert_eq!(cli.args, argv(&["linear", "ls", "-la", "--color=never"]));

        let cli = Cli::try_parse_from(["try", "grep", "--help"]).unwrap();
        assert_eq!(cli.args, argv(&["grep", "--help"]));

        let cli = Cli::try_parse_from(["try"]).unwrap();
        assert!(cli.args.is_empty());
    }

    #[test]
    fn test_separator_before_command_is_dropped() {
        for list in [&["--", "ls", "-l"][..], &["linear", "--", "ls", "-l"][..]] {
            match parsed(list) {
                Invocation::Run { command, .. } => {
                    assert_eq!(command.program(), "ls", "argv {list:?}");
                    assert_eq!(command.args(), ["-l"], "argv {list:?}");
                }
                other => panic!("unexpected {other:?} for {list:?}"),
            }
        }

        assert!(matches!(
            parsed(&["exponential", "--"]),
            Invocation::Example(cfg) if cfg.strategy == BackoffStrategy::Exponential
        ));
    }

    #[test]
    fn test_separator_inside_command_is_kept() {
        match parsed(&["linear", "git", "log", "--", "src"]) {
            Invocation::Run { command, .. } => {
                assert_eq!(command.program(), "git");
                assert_eq!(command.args(), ["log", "--", "src"]);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_arguments_are_run() {
        use std::os::unix::ffi::{OsStrExt, OsStringExt};

        let raw = OsString::from_vec(vec![b'f', 0xff, b'o']);
        let cli = Cli::try_parse_from([OsString::from("try"), "cat".into(), raw.clone()]).unwrap();
        assert_eq!(cli.args, vec![OsString::from("cat"), raw.clone()]);

        match Invocation::resolve(cli.args, Config::default()) {
            Invocation::Run { config, command } => {
                assert_eq!(config.strategy, BackoffStrategy::Constant);
                assert_eq!(command.program(), "cat");
                assert_eq!(command.args()[0].as_bytes(), [b'f', 0xff, b'o']);
            }
            other => panic!("unexpected {other:?}"),
        }

        // A non-UTF-8 first token is never a strategy keyword.
        match Invocation::resolve(vec![raw.clone()], Config::default()) {
            Invocation::Run { command, .. } => assert_eq!(command.program(), raw.as_os_str()),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_usage_lists_strategies() {
        assert_eq!(
            usage("try"),
            "usage: try [strategy] [command] [arg]...\n\
             strategies: constant (default), linear, exponential\n"
        );
    }

    #[test]
    fn test_example_has_twenty_rows() {
        let cfg = Config::default().with_strategy(BackoffStrategy::Linear);
        let text = example(&cfg);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 22);
        assert_eq!(lines[0], "Example for the first 20 retries:");
        assert_eq!(lines[1], "1st attempt after 0s (now)");
        assert_eq!(lines[2], "2nd attempt after 2s (2 seconds from now)");
        assert_eq!(lines[3], "3rd attempt after 4s (6 seconds from now)");
        assert_eq!(lines[20], "20th attempt after 38s (6 minutes from now)");
        assert_eq!(lines[21], "...");
    }

    #[test]
    fn test_example_exponential_tail() {
        let cfg = Config::default().with_strategy(BackoffStrategy::Exponential);
        let text = example(&cfg);

        // 19th pause is 2·19² = 722s; total 2·Σk² (k=1..19) = 4940s.
        assert!(text.contains("20th attempt after 12m2s (1 hour from now)"), "{text}");
    }
}
