//! # SubscriberSet: in-order fan-out over multiple subscribers
//!
//! [`SubscriberSet`] hands each [`Event`](crate::events::Event) to every
//! subscriber in registration order and awaits each one.
//!
//! ## What it guarantees
//! - `emit(&Event)` returns after every subscriber has seen the event.
//! - Global FIFO: all subscribers observe the same order.
//! - Panics inside subscribers are caught and logged (isolation).
//!
//! ## Diagram
//! ```text
//!    emit(&Event)
//!        ├──► S1.on_event() ──► S2.on_event() ──► ... ──► SN.on_event()
//!        └──► return
//! ```

use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;

use crate::events::Event;

use super::Subscribe;

/// Ordered collection of subscribers.
#[derive(Clone, Default)]
pub struct SubscriberSet {
    subs: Vec<Arc<dyn Subscribe>>,
}

impl SubscriberSet {
    /// Creates a set from subscribers, kept in the given order.
    #[must_use]
    pub fn new(subs: Vec<Arc<dyn Subscribe>>) -> Self {
        Self { subs }
    }

    /// Appends one more subscriber.
    pub fn push(&mut self, sub: Arc<dyn Subscribe>) {
        self.subs.push(sub);
    }

    /// Delivers one event to every subscriber, in order.
    ///
    /// A subscriber that panics is logged with its name and skipped; the
    /// remaining subscribers still receive the event.
    pub async fn emit(&self, event: &Event) {
        for sub in &self.subs {
            let fut = sub.on_event(event);
            if let Err(panic_err) = AssertUnwindSafe(fut).catch_unwind().await {
                tracing::warn!(
                    subscriber = sub.name(),
                    "[try] subscriber panicked: {}",
                    panic_message(panic_err.as_ref())
                );
            }
        }
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&'static str>() {
        s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else {
        "unknown panic"
    }
}
