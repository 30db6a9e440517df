//! # Runtime configuration.
//!
//! [`Config`] collects the knobs of one `try` invocation. Nothing is read
//! from files or the environment; the command line is the only source.
//!
//! # Example
//! ```
//! use retryvisor::{BackoffStrategy, Config};
//!
//! let cfg = Config::default().with_strategy(BackoffStrategy::Linear);
//!
//! assert_eq!(cfg.strategy, BackoffStrategy::Linear);
//! assert_eq!(cfg.example_retries, 20);
//! ```

use crate::policies::BackoffStrategy;

/// Default number of rows printed by the example schedule.
pub const EXAMPLE_RETRIES: u32 = 20;

/// Settings for the retry loop and the example schedule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    /// Backoff strategy applied between failed attempts.
    pub strategy: BackoffStrategy,
    /// Number of attempts listed when printing an example schedule.
    pub example_retries: u32,
}

impl Default for Config {
    /// Provides a default configuration:
    /// - `strategy = BackoffStrategy::Constant`
    /// - `example_retries = 20`
    fn default() -> Self {
        Self {
            strategy: BackoffStrategy::default(),
            example_retries: EXAMPLE_RETRIES,
        }
    }
}

impl Config {
    /// Returns a copy using `strategy`.
    #[must_use]
    pub fn with_strategy(mut self, strategy: BackoffStrategy) -> Self {
        self.strategy = strategy;
        self
    }
}
