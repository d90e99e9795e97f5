//! Collaborator adapters wired at startup by [`crate::services::AppServices`].
//!
//! These are reference, single-process implementations of the ports each
//! domain crate defines. A production deployment swaps any one of
//! these for an `opsfabric-service-client`-backed adapter that calls the
//! owning microservice over HTTP, without touching the pipeline/saga code
//! that depends only on the trait.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use opsfabric_clients::ClientRepository;
use opsfabric_core::{ClientId, CustomerId, DomainError, DomainResult, InventoryId, SellerId};
use opsfabric_inventory::{InventoryRecord, ReservationDelta};
use opsfabric_orders::order::CustomerSnapshot;
use opsfabric_orders::ports::{CustomerPort, InventoryPort};
use opsfabric_visits::ports::{ClientPort, ClientSnapshot};

/// Adapts the `clients` service's own repository to the Visit Saga's
/// [`ClientPort`].
pub struct ClientPortAdapter {
    repository: Arc<dyn ClientRepository>,
}

impl ClientPortAdapter {
    pub fn new(repository: Arc<dyn ClientRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl ClientPort for ClientPortAdapter {
    async fn get_client(&self, client_id: ClientId) -> DomainResult<ClientSnapshot> {
        let client = self
            .repository
            .find(client_id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("client {client_id} not found")))?;
        Ok(ClientSnapshot {
            client_id,
            assigned_seller_id: client.assigned_seller_id(),
            institution_name: client.institution_name().to_string(),
            address: client.address().to_string(),
            city: client.city().to_string(),
            country: client.country().to_string(),
        })
    }

    async fn assign_seller(&self, client_id: ClientId, seller_id: SellerId) -> DomainResult<()> {
        let mut client = self
            .repository
            .find(client_id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("client {client_id} not found")))?;
        client.assign_seller(seller_id)?;
        self.repository.save(client).await
    }
}

/// The end-customer directory backing the Order Pipeline's [`CustomerPort`].
/// A "customer" here is the individual placing an order, distinct from the
/// institutional `Client` a seller visits -- a thin in-memory reference
/// store standing in for that service's own repository.
#[derive(Default)]
pub struct InMemoryCustomerPort {
    rows: RwLock<HashMap<CustomerId, CustomerSnapshot>>,
}

impl InMemoryCustomerPort {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed(&self, snapshot: CustomerSnapshot) {
        self.rows.write().unwrap().insert(snapshot.customer_id, snapshot);
    }
}

#[async_trait]
impl CustomerPort for InMemoryCustomerPort {
    async fn get_customer(&self, customer_id: CustomerId) -> DomainResult<CustomerSnapshot> {
        self.rows
            .read()
            .unwrap()
            .get(&customer_id)
            .cloned()
            .ok_or_else(|| DomainError::not_found(format!("customer {customer_id} not found")))
    }
}

/// The Order Pipeline's view of the `inventory` service: current stock plus
/// the reservation mutation.
#[derive(Default)]
pub struct InMemoryInventoryPort {
    rows: RwLock<HashMap<InventoryId, InventoryRecord>>,
}

impl InMemoryInventoryPort {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed(&self, record: InventoryRecord) {
        self.rows.write().unwrap().insert(record.id, record);
    }
}

#[async_trait]
impl InventoryPort for InMemoryInventoryPort {
    async fn get_inventory(&self, inventory_id: InventoryId) -> DomainResult<InventoryRecord> {
        self.rows
            .read()
            .unwrap()
            .get(&inventory_id)
            .cloned()
            .ok_or_else(|| DomainError::not_found(format!("inventory record {inventory_id} not found")))
    }

    async fn adjust_reservation(&self, delta: ReservationDelta) -> DomainResult<()> {
        let mut rows = self.rows.write().unwrap();
        let record = rows
            .get_mut(&delta.inventory_id)
            .ok_or_else(|| DomainError::not_found(format!("inventory record {} not found", delta.inventory_id)))?;
        let next = record.available_quantity as i64 - delta.quantity_delta;
        if next < 0 {
            return Err(DomainError::conflict("insufficient inventory"));
        }
        record.available_quantity = next as u32;
        Ok(())
    }
}
