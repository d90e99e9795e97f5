//! Idempotency Ledger: the `processed_events` table.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use opsfabric_core::{DomainError, DomainResult, EventId};
use serde::{Deserialize, Serialize};

/// A row means this `event_id` was consumed and may not be re-applied.
/// `payload_snapshot` is opaque and exists for debugging only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessedEvent {
    pub event_id: EventId,
    pub event_type: String,
    pub microservice: String,
    pub payload_snapshot: String,
    pub processed_at: DateTime<Utc>,
}

#[async_trait]
pub trait IdempotencyLedger: Send + Sync {
    async fn has_been_processed(&self, event_id: EventId) -> DomainResult<bool>;

    /// Record `event_id` as consumed. Fails with `Conflict`
    /// (`AlreadyProcessed`) on a duplicate insert.
    async fn mark_as_processed(
        &self,
        event_id: EventId,
        event_type: &str,
        microservice: &str,
        payload_snapshot: String,
        processed_at: DateTime<Utc>,
    ) -> DomainResult<()>;
}

#[derive(Default)]
pub struct InMemoryIdempotencyLedger {
    rows: RwLock<HashMap<EventId, ProcessedEvent>>,
}

impl InMemoryIdempotencyLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.rows.read().expect("ledger lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl IdempotencyLedger for InMemoryIdempotencyLedger {
    async fn has_been_processed(&self, event_id: EventId) -> DomainResult<bool> {
        Ok(self
            .rows
            .read()
            .expect("ledger lock poisoned")
            .contains_key(&event_id))
    }

    async fn mark_as_processed(
        &self,
        event_id: EventId,
        event_type: &str,
        microservice: &str,
        payload_snapshot: String,
        processed_at: DateTime<Utc>,
    ) -> DomainResult<()> {
        let mut rows = self
            .rows
            .write()
            .map_err(|_| DomainError::internal("ledger lock poisoned"))?;
        if rows.contains_key(&event_id) {
            return Err(DomainError::conflict(format!(
                "event {event_id} already processed"
            )));
        }
        rows.insert(
            event_id,
            ProcessedEvent {
                event_id,
                event_type: event_type.to_string(),
                microservice: microservice.to_string(),
                payload_snapshot,
                processed_at,
            },
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn marking_twice_fails_with_conflict() {
        let ledger = InMemoryIdempotencyLedger::new();
        let id = EventId::new();
        ledger
            .mark_as_processed(id, "order_created", "order", "{}".into(), Utc::now())
            .await
            .unwrap();
        let err = ledger
            .mark_as_processed(id, "order_created", "order", "{}".into(), Utc::now())
            .await
            .unwrap_err();
        assert_eq!(err.code(), "conflict");
    }

    #[tokio::test]
    async fn unprocessed_event_reports_false() {
        let ledger = InMemoryIdempotencyLedger::new();
        assert!(!ledger.has_been_processed(EventId::new()).await.unwrap());
    }
}
