//! Strongly-typed identifiers used across the domain.
//!
//! Every entity id is a distinct newtype over `Uuid` (v7, time-ordered) so
//! that a `ClientId` can never be passed where a `VisitId` is expected.

use core::str::FromStr;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

macro_rules! uuid_id {
    ($t:ident, $name:literal) => {
        #[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $t(Uuid);

        impl $t {
            /// Allocate a fresh, time-ordered identifier.
            pub fn new() -> Self {
                Self(Uuid::now_v7())
            }

            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            pub fn as_uuid(&self) -> Uuid {
                self.0
            }
        }

        impl Default for $t {
            fn default() -> Self {
                Self::new()
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<Uuid> for $t {
            fn from(value: Uuid) -> Self {
                Self(value)
            }
        }

        impl From<$t> for Uuid {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let uuid = Uuid::from_str(s)
                    .map_err(|e| DomainError::validation(format!("{}: {}", $name, e)))?;
                Ok(Self(uuid))
            }
        }
    };
}

uuid_id!(ClientId, "client_id");
uuid_id!(SellerId, "seller_id");
uuid_id!(CustomerId, "customer_id");
uuid_id!(VisitId, "visit_id");
uuid_id!(OrderId, "order_id");
uuid_id!(OrderItemId, "order_item_id");
uuid_id!(ProductId, "product_id");
uuid_id!(InventoryId, "inventory_id");
uuid_id!(WarehouseId, "warehouse_id");
uuid_id!(ShipmentId, "shipment_id");
uuid_id!(RouteId, "route_id");
uuid_id!(VehicleId, "vehicle_id");
uuid_id!(SalesPlanId, "sales_plan_id");
uuid_id!(EventId, "event_id");
uuid_id!(UserId, "user_id");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_string() {
        let id = ClientId::new();
        let parsed: ClientId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn rejects_malformed_uuid() {
        let err = "not-a-uuid".parse::<OrderId>().unwrap_err();
        assert_eq!(err.code(), "validation_rejected");
    }

    #[test]
    fn distinct_id_kinds_do_not_mix_at_the_type_level() {
        let client = ClientId::new();
        let order: OrderId = OrderId::from_uuid(client.as_uuid());
        // Same bits, different types -- the compiler is the actual guard here;
        // this just documents the conversion path used at service boundaries.
        assert_eq!(client.as_uuid(), order.as_uuid());
    }
}
