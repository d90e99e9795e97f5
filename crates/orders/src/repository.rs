use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use opsfabric_core::{DomainError, DomainResult, OrderId};

use crate::order::Order;

#[async_trait]
pub trait OrderRepository: Send + Sync {
    async fn find(&self, id: OrderId) -> DomainResult<Option<Order>>;

    /// Persist the order and all of its items atomically.
    async fn save(&self, order: Order) -> DomainResult<()>;
}

#[derive(Default)]
pub struct InMemoryOrderRepository {
    rows: RwLock<HashMap<OrderId, Order>>,
}

impl InMemoryOrderRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn find(&self, id: OrderId) -> DomainResult<Option<Order>> {
        Ok(self
            .rows
            .read()
            .expect("order repository lock poisoned")
            .get(&id)
            .cloned())
    }

    async fn save(&self, order: Order) -> DomainResult<()> {
        self.rows
            .write()
            .map_err(|_| DomainError::internal("order repository lock poisoned"))?
            .insert(order.id, order);
        Ok(())
    }
}
