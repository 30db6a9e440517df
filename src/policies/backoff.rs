//! # Backoff strategy for retrying commands.
//!
//! [`BackoffStrategy`] controls how the pause between attempts grows after
//! repeated failures. The delay is derived purely from the attempt number
//! (1-based), so the same attempt always waits the same amount of time:
//!
//! | Strategy                         | Delay after attempt `n` |
//! |----------------------------------|-------------------------|
//! | [`BackoffStrategy::Constant`]    | `2s`                    |
//! | [`BackoffStrategy::Linear`]      | `2n s`                  |
//! | [`BackoffStrategy::Exponential`] | `2n² s`                 |
//!
//! Note that `Exponential` grows **quadratically**, not as `2^n`. The name is
//! part of the command-line surface and is kept as is.
//!
//! # Example
//! ```rust
//! use std::time::Duration;
//! use retryvisor::BackoffStrategy;
//!
//! assert_eq!(BackoffStrategy::Constant.next(7), Duration::from_secs(2));
//! assert_eq!(BackoffStrategy::Linear.next(3), Duration::from_secs(6));
//! assert_eq!(BackoffStrategy::Exponential.next(3), Duration::from_secs(18));
//! ```

use std::{fmt, str::FromStr, time::Duration};

use crate::error::ParseStrategyError;

/// Base unit every strategy is scaled from.
const BASE_SECS: u64 = 2;

/// Retry backoff strategy.
///
/// A closed set: every strategy the command line accepts is a variant here,
/// and [`BackoffStrategy::next`] matches on all of them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BackoffStrategy {
    /// Fixed 2 second pause.
    #[default]
    Constant,
    /// Pause grows by 2 seconds per attempt.
    Linear,
    /// Pause is `2 × attempt²` seconds.
    Exponential,
}

impl BackoffStrategy {
    /// All strategies, in the order they are listed in usage text.
    pub const ALL: [BackoffStrategy; 3] = [
        BackoffStrategy::Constant,
        BackoffStrategy::Linear,
        BackoffStrategy::Exponential,
    ];

    /// Computes the pause that follows a failed `attempt` (1-based).
    ///
    /// Pure and deterministic. Arithmetic saturates instead of overflowing,
    /// which only matters for attempt numbers no real run reaches.
    pub fn next(self, attempt: u32) -> Duration {
        debug_assert!(attempt >= 1, "attempts are 1-based");

        let n = u64::from(attempt);
        let secs = match self {
            BackoffStrategy::Constant => BASE_SECS,
            BackoffStrategy::Linear => BASE_SECS.saturating_mul(n),
            BackoffStrategy::Exponential => BASE_SECS.saturating_mul(n.saturating_mul(n)),
        };
        Duration::from_secs(secs)
    }

    /// Lists the first `retries` attempts with the pause preceding each one.
    ///
    /// The first attempt starts immediately; attempt `i > 1` waits
    /// `next(i - 1)`. `cumulative` is the total waiting time before that
    /// attempt begins.
    pub fn schedule(self, retries: u32) -> Vec<ScheduleEntry> {
        let mut cumulative = Duration::ZERO;
        let mut delay = Duration::ZERO;

        (1..=retries)
            .map(|attempt| {
                if attempt > 1 {
                    delay = self.next(attempt - 1);
                    cumulative = cumulative.saturating_add(delay);
                }
                ScheduleEntry {
                    attempt,
                    delay,
                    cumulative,
                }
            })
            .collect()
    }

    /// Returns the command-line keyword for this strategy.
    pub fn as_str(self) -> &'static str {
        match self {
            BackoffStrategy::Constant => "constant",
            BackoffStrategy::Linear => "linear",
            BackoffStrategy::Exponential => "exponential",
        }
    }
}

impl fmt::Display for BackoffStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BackoffStrategy {
    type Err = ParseStrategyError;

    /// Matches the exact lowercase keyword, nothing else.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|strategy| strategy.as_str() == s)
            .ok_or_else(|| ParseStrategyError {
                input: s.to_string(),
            })
    }
}

/// One row of an example schedule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScheduleEntry {
    /// Attempt number (1-based).
    pub attempt: u32,
    /// Pause right before this attempt.
    pub delay: Duration,
    /// Total pause accumulated before this attempt starts.
    pub cumulative: Duration,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_is_flat() {
        for attempt in 1..50 {
            assert_eq!(
                BackoffStrategy::Constant.next(attempt),
                Duration::from_secs(2),
                "attempt {} should be constant at 2s",
                attempt
            );
        }
    }

    #[test]
    fn test_linear_formula() {
        for attempt in 1..50u32 {
            assert_eq!(
                BackoffStrategy::Linear.next(attempt),
                Duration::from_secs(2 * u64::from(attempt))
            );
        }
    }

    #[test]
    fn test_exponential_is_quadratic() {
        assert_eq!(BackoffStrategy::Exponential.next(1), Duration::from_secs(2));
        assert_eq!(BackoffStrategy::Exponential.next(2), Duration::from_secs(8));
        assert_eq!(BackoffStrategy::Exponential.next(3), Duration::from_secs(18));
        assert_eq!(BackoffStrategy::Exponential.next(10), Duration::from_secs(200));
    }

    #[test]
    fn test_growing_strategies_are_strictly_monotonic() {
        for strategy in [BackoffStrategy::Linear, BackoffStrategy::Exponential] {
            for attempt in 1..200 {
                assert!(
                    strategy.next(attempt + 1) > strategy.next(attempt),
                    "{strategy} not increasing at attempt {attempt}"
                );
            }
        }
    }

    #[test]
    fn test_huge_attempt_saturates() {
        assert_eq!(
            BackoffStrategy::Exponential.next(u32::MAX),
            Duration::from_secs(u64::MAX)
        );
        assert_eq!(
            BackoffStrategy::Linear.next(u32::MAX),
            Duration::from_secs(2 * u64::from(u32::MAX))
        );
    }

    #[test]
    fn test_parse_exact_keywords_only() {
        assert_eq!("constant".parse::<BackoffStrategy>(), Ok(BackoffStrategy::Constant));
        assert_eq!("linear".parse::<BackoffStrategy>(), Ok(BackoffStrategy::Linear));
        assert_eq!("exponential".parse::<BackoffStrategy>(), Ok(BackoffStrategy::Exponential));

        for bad in ["Linear", "exp", "", " linear", "quadratic"] {
            let err = bad.parse::<BackoffStrategy>().unwrap_err();
            assert_eq!(err.input, bad);
        }
    }

    #[test]
    fn test_display_round_trips_keyword() {
        for strategy in BackoffStrategy::ALL {
            assert_eq!(strategy.to_string().parse::<BackoffStrategy>(), Ok(strategy));
        }
    }

    #[test]
    fn test_schedule_linear() {
        let rows = BackoffStrategy::Linear.schedule(4);
        let delays: Vec<u64> = rows.iter().map(|r| r.delay.as_secs()).collect();
        let totals: Vec<u64> = rows.iter().map(|r| r.cumulative.as_secs()).collect();

        assert_eq!(delays, vec![0, 2, 4, 6]);
        assert_eq!(totals, vec![0, 2, 6, 12]);
        assert_eq!(rows.last().map(|r| r.attempt), Some(4));
    }

    #[test]
    fn test_schedule_matches_formula() {
        for strategy in BackoffStrategy::ALL {
            let rows = strategy.schedule(20);
            assert_eq!(rows.len(), 20);

            let mut total = Duration::ZERO;
            for row in rows.iter().skip(1) {
                assert_eq!(row.delay, strategy.next(row.attempt - 1));
                total += row.delay;
                assert_eq!(row.cumulative, total);
            }
        }
    }

    #[test]
    fn test_schedule_empty() {
        assert!(BackoffStrategy::Constant.schedule(0).is_empty());
    }
}
