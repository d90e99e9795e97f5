//! The wire envelope wrapping every published event.

use chrono::{DateTime, Utc};
use opsfabric_core::EventId;
use serde::{Deserialize, Serialize};

use crate::event::Event;

/// `{event_id, event_type, microservice, timestamp, ...payload}`.
/// `event_id` is freshly minted at publish time; it is the key the
/// Idempotency Ledger dedups on downstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventEnvelope<P> {
    pub event_id: EventId,
    pub event_type: String,
    pub microservice: String,
    pub timestamp: DateTime<Utc>,
    #[serde(flatten)]
    pub payload: P,
}

impl<P: Event> EventEnvelope<P> {
    pub fn wrap(payload: P) -> Self {
        Self {
            event_id: EventId::new(),
            event_type: payload.event_type().to_string(),
            microservice: payload.microservice().to_string(),
            timestamp: payload.occurred_at(),
            payload,
        }
    }
}
