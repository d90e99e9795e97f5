//! Collaborator interfaces the Order Pipeline is a pure function over.

use async_trait::async_trait;
use opsfabric_core::{CustomerId, DomainResult, InventoryId};
use opsfabric_inventory::{InventoryRecord, ReservationDelta};

use crate::order::CustomerSnapshot;

/// The `customer` service, as seen through the pipeline's boundary.
#[async_trait]
pub trait CustomerPort: Send + Sync {
    async fn get_customer(&self, customer_id: CustomerId) -> DomainResult<CustomerSnapshot>;
}

/// The `inventory` service, as seen through the pipeline's boundary.
#[async_trait]
pub trait InventoryPort: Send + Sync {
    async fn get_inventory(&self, inventory_id: InventoryId) -> DomainResult<InventoryRecord>;

    /// Apply a reservation delta. Positive reserves, negative releases.
    /// Implementations must reject a reservation that would take
    /// `available_quantity` below zero with `DomainError::conflict`
    /// ("insufficient inventory").
    async fn adjust_reservation(&self, delta: ReservationDelta) -> DomainResult<()>;
}
