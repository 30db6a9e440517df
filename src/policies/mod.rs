//! Retry policies.
//!
//! This module holds the knob that controls **how long** to wait between
//! attempts.
//!
//! ## Contents
//! - [`BackoffStrategy`] how retry delays evolve (constant / linear / exponential)
//! - [`ScheduleEntry`]   one row of a precomputed example schedule
//!
//! ## Quick wiring
//! ```text
//! cli::Invocation::Run { strategy, .. }
//!      └─► core::retry::RetryLoop uses:
//!           - strategy.next(attempt) after every failed attempt
//! ```
//!
//! ## Defaults
//! - `BackoffStrategy::default()` → `Constant` (2s between attempts).

mod backoff;

pub use backoff::{BackoffStrategy, ScheduleEntry};
