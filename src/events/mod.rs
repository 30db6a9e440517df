//! Retry loop events.
//!
//! This module holds the event **data model** published by the retry loop
//! and the single-attempt runner.
//!
//! ## Contents
//! - [`EventKind`], [`Event`] event classification and payload metadata
//!
//! ## Quick reference
//! - **Publishers**: `core::retry::RetryLoop`, `core::runner::run_once`.
//! - **Consumers**: every [`Subscribe`](crate::Subscribe) in the loop's
//!   [`SubscriberSet`](crate::SubscriberSet), e.g. [`LogWriter`](crate::LogWriter).

mod event;

pub use event::{Event, EventKind};
