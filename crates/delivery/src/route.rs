use chrono::NaiveDate;
use opsfabric_core::{DomainError, DomainResult, Entity, Money, RouteId, VehicleId};
use serde::{Deserialize, Serialize};

use crate::shipment::Shipment;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteStatus {
    Planned,
    InProgress,
    Completed,
    Cancelled,
}

/// Aggregate. `shipments` are kept in the order `add_shipment` was
/// called; callers read them back via [`Route::shipments`], sorted by
/// `sequence_in_route` (invariant I6: a permutation of `0..n-1`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Route {
    pub id: RouteId,
    pub vehicle_id: VehicleId,
    pub date: NaiveDate,
    pub status: RouteStatus,
    pub estimated_duration_minutes: u32,
    pub total_distance_km: Money,
    shipments: Vec<Shipment>,
}

impl Route {
    pub fn new(vehicle_id: VehicleId, date: NaiveDate, estimated_duration_minutes: u32, total_distance_km: Money) -> Self {
        Self {
            id: RouteId::new(),
            vehicle_id,
            date,
            status: RouteStatus::Planned,
            estimated_duration_minutes,
            total_distance_km,
            shipments: Vec::new(),
        }
    }

    /// Assign `shipment` to this route at `sequence`, transitioning it from
    /// `PENDING` to `ASSIGNED` (invariant I7).
    pub fn add_shipment(&mut self, mut shipment: Shipment, sequence: u32) -> DomainResult<()> {
        shipment.assign_to_route(self.id, sequence)?;
        self.shipments.push(shipment);
        Ok(())
    }

    pub fn total_orders(&self) -> usize {
        self.shipments.len()
    }

    /// Shipments ordered by `sequence_in_route` (ascending).
    pub fn shipments(&self) -> Vec<&Shipment> {
        let mut ordered: Vec<&Shipment> = self.shipments.iter().collect();
        ordered.sort_by_key(|s| s.sequence_in_route.unwrap_or(u32::MAX));
        ordered
    }

    pub fn start(&mut self) -> DomainResult<()> {
        if self.status != RouteStatus::Planned {
            return Err(DomainError::conflict("route is not planned"));
        }
        self.status = RouteStatus::InProgress;
        for shipment in &mut self.shipments {
            if shipment.status == crate::shipment::ShipmentStatus::Assigned {
                shipment.mark_in_transit()?;
            }
        }
        Ok(())
    }

    pub fn complete(&mut self) -> DomainResult<()> {
        if self.status != RouteStatus::InProgress {
            return Err(DomainError::conflict("route is not in progress"));
        }
        self.status = RouteStatus::Completed;
        Ok(())
    }

    pub fn cancel(&mut self) -> DomainResult<()> {
        if !matches!(self.status, RouteStatus::Planned | RouteStatus::InProgress) {
            return Err(DomainError::conflict("route cannot be cancelled from its current status"));
        }
        self.status = RouteStatus::Cancelled;
        Ok(())
    }
}

impl Entity for Route {
    type Id = RouteId;

    fn id(&self) -> RouteId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shipment::Shipment;
    use opsfabric_core::{CustomerId, OrderId};
    use chrono::Utc;

    fn shipment() -> Shipment {
        Shipment::new(
            OrderId::new(),
            CustomerId::new(),
            "Calle 1",
            "Bogotá",
            "CO",
            Utc::now().date_naive(),
        )
        .unwrap()
    }

    #[test]
    fn total_orders_matches_shipment_count_and_sequence_is_a_permutation() {
        let mut route = Route::new(VehicleId::new(), Utc::now().date_naive(), 30, Money::parse("10.00").unwrap());
        route.add_shipment(shipment(), 1).unwrap();
        route.add_shipment(shipment(), 0).unwrap();
        assert_eq!(route.total_orders(), 2);
        let ordered = route.shipments();
        assert_eq!(ordered[0].sequence_in_route, Some(0));
        assert_eq!(ordered[1].sequence_in_route, Some(1));
    }

    #[test]
    fn start_moves_assigned_shipments_to_in_transit() {
        let mut route = Route::new(VehicleId::new(), Utc::now().date_naive(), 30, Money::parse("10.00").unwrap());
        route.add_shipment(shipment(), 0).unwrap();
        route.start().unwrap();
        assert_eq!(route.status, RouteStatus::InProgress);
        assert_eq!(route.shipments()[0].status, crate::shipment::ShipmentStatus::InTransit);
    }

    #[test]
    fn cannot_complete_a_route_that_has_not_started() {
        let mut route = Route::new(VehicleId::new(), Utc::now().date_naive(), 30, Money::parse("10.00").unwrap());
        assert!(route.complete().is_err());
    }
}
