//! Outbound event bus contract (outbound half).
//!
//! `publish` is fire-and-forget: delivery failures are logged, never
//! propagated to the caller, because the order/visit/plan write that
//! triggered the event is already authoritative.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::Mutex;

use crate::envelope::EventEnvelope;
use crate::event::Event;

/// A sink for outbound domain/integration events. Implementations must never
/// let a publish failure propagate as an error to the caller.
#[async_trait]
pub trait EventBus: Send + Sync {
    /// Publish an already-serialized envelope. Takes the `event_type` ahead
    /// of time so implementations can route without reparsing the body.
    async fn publish_envelope(&self, event_type: &str, envelope: Value);
}

/// Serialize `payload` into a fresh envelope and hand it to `bus`.
///
/// A free function rather than a trait method so `EventBus` stays
/// object-safe (`Arc<dyn EventBus>` is how every pipeline holds it).
pub async fn publish<B, P>(bus: &B, payload: P)
where
    B: EventBus + ?Sized,
    P: Event,
{
    let event_type = payload.event_type();
    let envelope = EventEnvelope::wrap(payload);
    match serde_json::to_value(&envelope) {
        Ok(json) => bus.publish_envelope(event_type, json).await,
        Err(e) => tracing::error!(error = %e, event_type, "failed to serialize event envelope; not publishing"),
    }
}

/// An in-process bus used by tests and by the polling consumer's in-memory
/// backend. Publications are appended to both a durable log (for assertions)
/// and a FIFO queue a consumer can drain.
#[derive(Default)]
pub struct InMemoryEventBus {
    log: Mutex<Vec<Value>>,
    queue: Mutex<VecDeque<Value>>,
}

impl InMemoryEventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything ever published, in publish order.
    pub fn published(&self) -> Vec<Value> {
        self.log.lock().expect("event bus log poisoned").clone()
    }

    /// Pop up to `max` messages in FIFO order, simulating one poll batch.
    pub fn poll(&self, max: usize) -> Vec<Value> {
        let mut queue = self.queue.lock().expect("event bus queue poisoned");
        let n = max.min(queue.len());
        queue.drain(..n).collect()
    }
}

#[async_trait]
impl EventBus for InMemoryEventBus {
    async fn publish_envelope(&self, _event_type: &str, envelope: Value) {
        self.log
            .lock()
            .expect("event bus log poisoned")
            .push(envelope.clone());
        self.queue
            .lock()
            .expect("event bus queue poisoned")
            .push_back(envelope);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize)]
    struct Ping {
        n: u32,
    }

    impl Event for Ping {
        fn event_type(&self) -> &'static str {
            "ping"
        }
        fn microservice(&self) -> &'static str {
            "test"
        }
    }

    #[tokio::test]
    async fn publish_then_poll_delivers_fifo() {
        let bus = InMemoryEventBus::new();
        publish(&bus, Ping { n: 1 }).await;
        publish(&bus, Ping { n: 2 }).await;

        let batch = bus.poll(10);
        assert_eq!(batch.len(), 2);
        assert_eq!(batch[0]["n"], 1);
        assert_eq!(batch[1]["n"], 2);
        assert_eq!(bus.published().len(), 2);
    }

    #[tokio::test]
    async fn poll_respects_max_batch_size() {
        let bus = InMemoryEventBus::new();
        publish(&bus, Ping { n: 1 }).await;
        publish(&bus, Ping { n: 2 }).await;
        publish(&bus, Ping { n: 3 }).await;

        let first = bus.poll(2);
        assert_eq!(first.len(), 2);
        let second = bus.poll(2);
        assert_eq!(second.len(), 1);
    }
}
