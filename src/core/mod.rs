//! Retry core: the loop and its single-attempt runner.
//!
//! The public API from this module is [`RetryLoop`] and the [`RunReport`]
//! it returns.
//!
//! Internal modules:
//! - [`runner`]: executes one attempt and publishes its failure events;
//! - [`retry`]: drives attempts, backoff and timing until success.

mod retry;
mod runner;

pub use retry::{RetryLoop, RunReport};
