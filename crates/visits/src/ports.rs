//! The `clients` service, as seen through from the Visit Saga.

use async_trait::async_trait;
use opsfabric_core::{ClientId, DomainResult, SellerId};

/// What the saga needs from a client record -- deliberately smaller than
/// the `clients` service's own `Client` entity ("Cross-service
/// references are id-only").
#[derive(Debug, Clone, PartialEq)]
pub struct ClientSnapshot {
    pub client_id: ClientId,
    pub assigned_seller_id: Option<SellerId>,
    pub institution_name: String,
    pub address: String,
    pub city: String,
    pub country: String,
}

#[async_trait]
pub trait ClientPort: Send + Sync {
    async fn get_client(&self, client_id: ClientId) -> DomainResult<ClientSnapshot>;

    /// Assign `seller_id` as the client's owner. Called only when the
 /// client is currently unassigned. If this call fails,
    /// the saga aborts without compensation -- the client remains
    /// unassigned either way.
    async fn assign_seller(&self, client_id: ClientId, seller_id: SellerId) -> DomainResult<()>;
}
