//! Sales-Plan Projector: the only consumer of `order_created`.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use opsfabric_core::{DomainResult, EventId, Money, SellerId};
use serde::{Deserialize, Serialize};

use crate::ledger::IdempotencyLedger;
use crate::quarter::current_quarter_code;
use crate::sales_plan::SalesPlanRepository;

/// The subset of `order_created`'s observable schema this service
/// actually reads -- it owns nothing else about the order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCreatedEvent {
    pub event_id: EventId,
    pub event_type: String,
    pub microservice: String,
    pub seller_id: Option<SellerId>,
    pub monto_total: Money,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectionOutcome {
    /// The accumulator was credited.
    Applied,
    /// `event_id` had already been processed; no-op (invariant R1).
    DuplicateSuppressed,
    /// `seller_id` was absent; recorded as processed, no plan touched.
    SkippedNoSeller,
}

pub struct SalesPlanProjector {
    ledger: Arc<dyn IdempotencyLedger>,
    sales_plans: Arc<dyn SalesPlanRepository>,
}

impl SalesPlanProjector {
    pub fn new(ledger: Arc<dyn IdempotencyLedger>, sales_plans: Arc<dyn SalesPlanRepository>) -> Self {
        Self { ledger, sales_plans }
    }

    pub async fn process(
        &self,
        event: OrderCreatedEvent,
        processed_at: DateTime<Utc>,
    ) -> DomainResult<ProjectionOutcome> {
        // Step 1: duplicate suppression.
        if self.ledger.has_been_processed(event.event_id).await? {
            return Ok(ProjectionOutcome::DuplicateSuppressed);
        }

        let snapshot = serde_json::to_string(&event).unwrap_or_default();

        // Step 2: client-app orders (no seller) don't credit anyone.
        if event.seller_id.is_none() {
            self.ledger
                .mark_as_processed(event.event_id, &event.event_type, &event.microservice, snapshot, processed_at)
                .await?;
            return Ok(ProjectionOutcome::SkippedNoSeller);
        }
        let seller_id = event.seller_id.expect("checked above");

        // Step 3-4: credit the current quarter's plan. A missing plan
        // propagates as `NotFound` and this event is NOT marked processed,
 // so the message returns to the queue.
        let quarter = current_quarter_code(processed_at);
        self.sales_plans.credit(seller_id, &quarter, event.monto_total).await?;

        // Step 5: mark processed in the same logical transaction as the credit.
        self.ledger
            .mark_as_processed(event.event_id, &event.event_type, &event.microservice, snapshot, processed_at)
            .await?;

        Ok(ProjectionOutcome::Applied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::InMemoryIdempotencyLedger;
    use crate::sales_plan::{GoalType, InMemorySalesPlanRepository, SalesPlan};
    use chrono::TimeZone;

    fn event(seller_id: Option<SellerId>, event_id: EventId) -> OrderCreatedEvent {
        OrderCreatedEvent {
            event_id,
            event_type: "order_created".into(),
            microservice: "order".into(),
            seller_id,
            monto_total: Money::parse("100.00").unwrap(),
        }
    }

    #[tokio::test]
    async fn s5_duplicate_delivery_credits_exactly_once() {
        let ledger = Arc::new(InMemoryIdempotencyLedger::new());
        let plans = Arc::new(InMemorySalesPlanRepository::new());
        let seller_id = SellerId::new();
        let mut plan = SalesPlan::new(seller_id, "Q4-2025", GoalType::Sales, Money::parse("10000.00").unwrap());
        plan.accumulated = Money::parse("500.00").unwrap();
        plans.save(plan).await.unwrap();

        let projector = SalesPlanProjector::new(ledger.clone(), plans.clone());
        let e = event(Some(seller_id), EventId::new());
        let at = Utc.with_ymd_and_hms(2025, 11, 18, 10, 0, 0).unwrap();

        for i in 0..3 {
            let outcome = projector.process(e.clone(), at).await.unwrap();
            if i == 0 {
                assert_eq!(outcome, ProjectionOutcome::Applied);
            } else {
                assert_eq!(outcome, ProjectionOutcome::DuplicateSuppressed);
            }
        }

        let plan = plans
            .find_by_seller_and_period(seller_id, "Q4-2025")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(plan.accumulated.to_string(), "600.00");
        assert_eq!(ledger.len(), 1);
    }

    #[tokio::test]
    async fn s7_seller_absent_marks_processed_without_touching_any_plan() {
        let ledger = Arc::new(InMemoryIdempotencyLedger::new());
        let plans = Arc::new(InMemorySalesPlanRepository::new());
        let projector = SalesPlanProjector::new(ledger.clone(), plans);

        let e = event(None, EventId::new());
        let at = Utc::now();
        let outcome = projector.process(e.clone(), at).await.unwrap();
        assert_eq!(outcome, ProjectionOutcome::SkippedNoSeller);

        // Replay is a no-op.
        let outcome = projector.process(e, at).await.unwrap();
        assert_eq!(outcome, ProjectionOutcome::DuplicateSuppressed);
        assert_eq!(ledger.len(), 1);
    }

    #[tokio::test]
    async fn missing_plan_is_not_marked_processed_so_it_can_retry() {
        let ledger = Arc::new(InMemoryIdempotencyLedger::new());
        let plans = Arc::new(InMemorySalesPlanRepository::new());
        let projector = SalesPlanProjector::new(ledger.clone(), plans);

        let seller_id = SellerId::new();
        let e = event(Some(seller_id), EventId::new());
        let err = projector.process(e, Utc::now()).await.unwrap_err();
        assert_eq!(err.code(), "not_found");
        assert!(ledger.is_empty());
    }
}
