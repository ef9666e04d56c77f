//! Broadcast channel carrying booking change events.

use tokio::sync::broadcast;
use tracing::debug;

use guesthouse_core::events::BookingEvent;

/// Single-node change feed backed by a `tokio` broadcast channel.
///
/// Publishing never blocks and never fails: with no subscribers the
/// event is simply dropped, and a lagged subscriber misses events and
/// refetches on reconnect.
#[derive(Debug)]
pub struct ChangeFeed {
    /// Broadcast sender; receivers are created on demand.
    tx: broadcast::Sender<BookingEvent>,
}

impl ChangeFeed {
    /// Create a feed with the given channel capacity.
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Publish an event to all current subscribers.
    pub fn publish(&self, event: BookingEvent) {
        match self.tx.send(event) {
            Ok(receivers) => debug!(receivers, "Booking event published"),
            Err(_) => debug!("Booking event published with no subscribers"),
        }
    }

    /// Subscribe to the feed.
    pub fn subscribe(&self) -> broadcast::Receiver<BookingEvent> {
        self.tx.subscribe()
    }

    /// Number of currently attached subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}
