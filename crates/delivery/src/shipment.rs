use chrono::{NaiveDate, Utc};
use opsfabric_core::{CustomerId, DomainError, DomainResult, Entity, OrderId, RouteId, ShipmentId};
use serde::{Deserialize, Serialize};

use crate::coordinates::Coordinates;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeocodingStatus {
    Pending,
    Success,
    Failed,
}

/// "Status lattice: PENDING -> ASSIGNED (only while PENDING) ->
/// IN_TRANSIT -> DELIVERED; no backward transitions."
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShipmentStatus {
    Pending,
    Assigned,
    InTransit,
    Delivered,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shipment {
    pub id: ShipmentId,
    pub order_id: OrderId,
    pub customer_id: CustomerId,
    pub delivery_address: String,
    pub delivery_city: String,
    pub delivery_country: String,
    pub coordinates: Option<Coordinates>,
    pub geocoding_status: GeocodingStatus,
    pub route_id: Option<RouteId>,
    pub sequence_in_route: Option<u32>,
    pub order_date: NaiveDate,
    pub estimated_delivery_date: NaiveDate,
    pub status: ShipmentStatus,
}

impl Shipment {
    pub fn new(
        order_id: OrderId,
        customer_id: CustomerId,
        delivery_address: impl Into<String>,
        delivery_city: impl Into<String>,
        delivery_country: impl Into<String>,
        order_date: NaiveDate,
    ) -> DomainResult<Self> {
        let delivery_address = delivery_address.into();
        let delivery_city = delivery_city.into();
        let delivery_country = delivery_country.into();
        if delivery_address.trim().is_empty()
            || delivery_city.trim().is_empty()
            || delivery_country.trim().is_empty()
        {
            return Err(DomainError::validation(
                "delivery address, city, and country are required",
            ));
        }
        Ok(Self {
            id: ShipmentId::new(),
            order_id,
            customer_id,
            delivery_address,
            delivery_city,
            delivery_country,
            coordinates: None,
            geocoding_status: GeocodingStatus::Pending,
            route_id: None,
            sequence_in_route: None,
            order_date,
            estimated_delivery_date: Self::calculate_estimated_delivery(order_date),
            status: ShipmentStatus::Pending,
        })
    }

    /// Default: `estimated_delivery_date = order_date + 1 day`.
    pub fn calculate_estimated_delivery(order_date: NaiveDate) -> NaiveDate {
        order_date + chrono::Duration::days(1)
    }

    pub fn set_coordinates(&mut self, coordinates: Coordinates) {
        self.coordinates = Some(coordinates);
        self.geocoding_status = GeocodingStatus::Success;
    }

    pub fn mark_geocoding_failed(&mut self) {
        self.geocoding_status = GeocodingStatus::Failed;
    }

    pub fn is_geocoded(&self) -> bool {
        self.geocoding_status == GeocodingStatus::Success
    }

    pub fn assign_to_route(&mut self, route_id: RouteId, sequence: u32) -> DomainResult<()> {
        if self.status != ShipmentStatus::Pending {
            return Err(DomainError::conflict(format!(
                "shipment {} is not pending (status {:?})",
                self.id, self.status
            )));
        }
        self.route_id = Some(route_id);
        self.sequence_in_route = Some(sequence);
        self.status = ShipmentStatus::Assigned;
        Ok(())
    }

    pub fn mark_in_transit(&mut self) -> DomainResult<()> {
        if self.status != ShipmentStatus::Assigned {
            return Err(DomainError::conflict(format!(
                "shipment {} is not assigned (status {:?})",
                self.id, self.status
            )));
        }
        self.status = ShipmentStatus::InTransit;
        Ok(())
    }

    pub fn mark_delivered(&mut self) -> DomainResult<()> {
        if self.status != ShipmentStatus::InTransit {
            return Err(DomainError::conflict(format!(
                "shipment {} is not in transit (status {:?})",
                self.id, self.status
            )));
        }
        self.status = ShipmentStatus::Delivered;
        Ok(())
    }
}

impl Entity for Shipment {
    type Id = ShipmentId;

    fn id(&self) -> ShipmentId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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
    fn estimated_delivery_is_one_day_after_order_date() {
        let today = Utc::now().date_naive();
        assert_eq!(
            Shipment::calculate_estimated_delivery(today),
            today + chrono::Duration::days(1)
        );
    }

    #[test]
    fn status_lattice_has_no_backward_transitions() {
        let mut s = shipment();
        s.assign_to_route(RouteId::new(), 0).unwrap();
        assert!(s.assign_to_route(RouteId::new(), 1).is_err());
        s.mark_in_transit().unwrap();
        assert!(s.assign_to_route(RouteId::new(), 1).is_err());
        s.mark_delivered().unwrap();
        assert!(s.mark_in_transit().is_err());
    }

    #[test]
    fn cannot_mark_in_transit_before_assignment() {
        let mut s = shipment();
        assert!(s.mark_in_transit().is_err());
    }
}
