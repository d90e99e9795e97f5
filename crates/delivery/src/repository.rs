use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use opsfabric_core::{DomainError, DomainResult, RouteId, ShipmentId};

use crate::route::Route;
use crate::shipment::Shipment;

#[async_trait]
pub trait ShipmentRepository: Send + Sync {
    async fn find(&self, id: ShipmentId) -> DomainResult<Shipment>;
    async fn find_ungeocoded(&self) -> DomainResult<Vec<Shipment>>;
    async fn save(&self, shipment: Shipment) -> DomainResult<()>;
}

#[async_trait]
pub trait RouteRepository: Send + Sync {
    async fn find(&self, id: RouteId) -> DomainResult<Route>;
    async fn save(&self, route: Route) -> DomainResult<()>;
}

#[derive(Default)]
pub struct InMemoryShipmentRepository {
    rows: RwLock<HashMap<ShipmentId, Shipment>>,
}

impl InMemoryShipmentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed(&self, shipment: Shipment) {
        self.rows.write().unwrap().insert(shipment.id, shipment);
    }
}

#[async_trait]
impl ShipmentRepository for InMemoryShipmentRepository {
    async fn find(&self, id: ShipmentId) -> DomainResult<Shipment> {
        self.rows
            .read()
            .unwrap()
            .get(&id)
            .cloned()
            .ok_or_else(|| DomainError::not_found(format!("shipment {id} not found")))
    }

    async fn find_ungeocoded(&self) -> DomainResult<Vec<Shipment>> {
        Ok(self
            .rows
            .read()
            .unwrap()
            .values()
            .filter(|s| !s.is_geocoded())
            .cloned()
            .collect())
    }

    async fn save(&self, shipment: Shipment) -> DomainResult<()> {
        self.rows.write().unwrap().insert(shipment.id, shipment);
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryRouteRepository {
    rows: RwLock<HashMap<RouteId, Route>>,
}

impl InMemoryRouteRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RouteRepository for InMemoryRouteRepository {
    async fn find(&self, id: RouteId) -> DomainResult<Route> {
        self.rows
            .read()
            .unwrap()
            .get(&id)
            .cloned()
            .ok_or_else(|| DomainError::not_found(format!("route {id} not found")))
    }

    async fn save(&self, route: Route) -> DomainResult<()> {
        self.rows.write().unwrap().insert(route.id, route);
        Ok(())
    }
}
