//! The `seller` service's sales-plan accumulator, the Idempotency Ledger
//!, and the Sales-Plan Projector that connects the two.

pub mod ledger;
pub mod projector;
pub mod quarter;
pub mod sales_plan;

pub use ledger::{IdempotencyLedger, InMemoryIdempotencyLedger, ProcessedEvent};
pub use projector::{OrderCreatedEvent, ProjectionOutcome, SalesPlanProjector};
pub use quarter::current_quarter_code;
pub use sales_plan::{GoalType, SalesPlan, SalesPlanRepository};
