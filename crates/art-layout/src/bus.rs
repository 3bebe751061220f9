//! In-process event bus
//!
//! Each subscriber owns an unbounded queue, so nothing is dropped while the
//! subscription is alive and every subscriber sees events in publish order.
//! The bus is created by the composition root and handed to producers and
//! consumers explicitly.

use parking_lot::Mutex;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::mpsc;

struct BusInner<E> {
    subscribers: Mutex<Vec<mpsc::UnboundedSender<E>>>,
    events_published: AtomicU64,
}

/// Typed publish/subscribe channel
///
/// Cheap to clone; clones publish to the same subscribers.
pub struct EventBus<E> {
    inner: Arc<BusInner<E>>,
}

impl<E: Clone + Send + 'static> EventBus<E> {
    /// Create a bus with no subscribers
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Arc::new(BusInner {
                subscribers: Mutex::new(Vec::new()),
                events_published: AtomicU64::new(0),
            }),
        }
    }

    /// Publish an event to every live subscriber
    ///
    /// Returns the number of subscribers that received it. Subscriptions
    /// dropped since the last publish are pruned here.
    pub fn publish(&self, event: E) -> usize {
        self.inner.events_published.fetch_add(1, Ordering::Relaxed);
        let mut subscribers = self.inner.subscribers.lock();
        subscribers.retain(|tx| tx.send(event.clone()).is_ok());
        let receivers = subscribers.len();
        if receivers == 0 {
            tracing::debug!("event published with no subscribers");
        } else {
            tracing::debug!(receivers, "event published");
        }
        receivers
    }

    /// Subscribe to all events published from now on
    #[must_use]
    pub fn subscribe(&self) -> Subscription<E> {
        let (tx, receiver) = mpsc::unbounded_channel();
        self.inner.subscribers.lock().push(tx);
        Subscription { receiver }
    }

    /// Number of live subscriptions
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        let mut subscribers = self.inner.subscribers.lock();
        subscribers.retain(|tx| !tx.is_closed());
        subscribers.len()
    }

    /// Total events published
    #[must_use]
    pub fn events_published(&self) -> u64 {
        self.inner.events_published.load(Ordering::Relaxed)
    }
}

impl<E: Clone + Send + 'static> Default for EventBus<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Clone for EventBus<E> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<E> fmt::Debug for EventBus<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("subscribers", &self.inner.subscribers.lock().len())
            .field(
                "events_published",
                &self.inner.events_published.load(Ordering::Relaxed),
            )
            .finish()
    }
}

/// Receiving end of one subscription
#[derive(Debug)]
pub struct Subscription<E> {
    receiver: mpsc::UnboundedReceiver<E>,
}

impl<E> Subscription<E> {
    /// Next queued event without waiting
    pub fn try_next(&mut self) -> Option<E> {
        self.receiver.try_recv().ok()
    }

    /// Wait for the next event
    ///
    /// Returns `None` once every bus handle is dropped and the queue is empty.
    pub async fn recv(&mut self) -> Option<E> {
        self.receiver.recv().await
    }

    /// Number of queued events
    #[must_use]
    pub fn pending(&self) -> usize {
        self.receiver.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delivery_preserves_order() {
        let bus = EventBus::new();
        let mut a = bus.subscribe();
        let mut b = bus.subscribe();
        for n in 0..5 {
            assert_eq!(bus.publish(n), 2);
        }
        let drained: Vec<i32> = std::iter::from_fn(|| a.try_next()).collect();
        assert_eq!(drained, vec![0, 1, 2, 3, 4]);
        assert_eq!(b.pending(), 5);
        assert_eq!(b.try_next(), Some(0));
        assert_eq!(bus.events_published(), 5);
    }

    #[test]
    fn late_subscribers_see_only_new_events() {
        let bus = EventBus::new();
        bus.publish("early");
        let mut late = bus.subscribe();
        bus.publish("late");
        assert_eq!(late.try_next(), Some("late"));
        assert_eq!(late.try_next(), None);
    }

    #[test]
    fn dropped_subscriptions_are_pruned() {
        let bus = EventBus::new();
        let keep = bus.subscribe();
        let gone = bus.subscribe();
        assert_eq!(bus.subscriber_count(), 2);
        drop(gone);
        assert_eq!(bus.publish(1u8), 1);
        assert_eq!(bus.subscriber_count(), 1);
        drop(keep);
        assert_eq!(bus.publish(2u8), 0);
    }

    #[tokio::test]
    async fn recv_ends_when_bus_dropped() {
        let bus = EventBus::new();
        let mut sub = bus.subscribe();
        bus.clone().publish(7u32);
        drop(bus);
        assert_eq!(sub.recv().await, Some(7));
        assert_eq!(sub.recv().await, None);
    }
}
