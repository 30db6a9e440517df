//! # Event subscribers for the retry loop.
//!
//! This module provides the [`Subscribe`] trait, the [`SubscriberSet`] the
//! loop publishes through, and the built-in [`LogWriter`].
//!
//! ## Architecture
//! ```text
//! Event flow:
//!   RetryLoop / run_once ── emit(&Event) ──► SubscriberSet
//!                                                │
//!                                     ┌──────────┼──────────┐
//!                                     ▼          ▼          ▼
//!                                 LogWriter   Recorder    Custom
//! ```

mod log;
mod set;
mod subscriber;

pub use log::LogWriter;
pub use set::SubscriberSet;
pub use subscriber::Subscribe;
