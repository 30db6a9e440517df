//! # Event subscriber trait.
//!
//! Provides [`Subscribe`], the extension point for plugging event handlers
//! (console reporting, test recorders, notifications) into the retry loop.
//!
//! ## Rules
//! - Events are delivered **inline**: the loop awaits every subscriber before
//!   it moves on, so a subscriber sees a run's events in order.
//! - A panicking subscriber is isolated by [`SubscriberSet`](crate::SubscriberSet);
//!   the loop and the other subscribers keep going.
//! - Keep handlers short; the next attempt waits for them.
//!
//! ## Example
//! ```rust
//! use async_trait::async_trait;
//! use retryvisor::{Event, EventKind, Subscribe};
//!
//! struct Bell;
//!
//! #[async_trait]
//! impl Subscribe for Bell {
//!     async fn on_event(&self, ev: &Event) {
//!         if matches!(ev.kind, EventKind::AttemptSucceeded) {
//!             print!("\x07");
//!         }
//!     }
//!
//!     fn name(&self) -> &'static str { "bell" }
//! }
//! ```

use async_trait::async_trait;

use crate::events::Event;

/// Event subscriber for retry loop observability.
#[async_trait]
pub trait Subscribe: Send + Sync + 'static {
    /// Processes a single event.
    async fn on_event(&self, event: &Event);

    /// Returns the subscriber name used when reporting a panic.
    ///
    /// The default uses `type_name::<Self>()`, which can be verbose - override it when possible.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
