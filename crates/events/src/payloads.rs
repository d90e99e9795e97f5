//! Concrete event payloads produced by the core.

use opsfabric_core::{ClientId, CustomerId, Money, OrderId, ProductId, SellerId, UserId};
use serde::Serialize;

use crate::event::Event;

/// `order_created`: the only event the Sales-Plan Projector
/// consumes. Field names mirror the external interface contract.
#[derive(Debug, Clone, Serialize)]
pub struct OrderCreated {
    pub order_id: OrderId,
    pub customer_id: CustomerId,
    pub seller_id: Option<SellerId>,
    pub monto_total: Money,
    pub metodo_creacion: &'static str,
    pub items: Vec<OrderCreatedItem>,
}

#[derive(Debug, Clone, Serialize)]
pub struct OrderCreatedItem {
    pub product_id: ProductId,
    pub quantity: u32,
    pub unit_price: Money,
    pub total_price: Money,
}

impl Event for OrderCreated {
    fn event_type(&self) -> &'static str {
        "order_created"
    }

    fn microservice(&self) -> &'static str {
        "order"
    }
}

/// `visit_created` (optional, emitted on the Create Visit dataflow).
#[derive(Debug, Clone, Serialize)]
pub struct VisitCreated {
    pub visit_id: opsfabric_core::VisitId,
    pub seller_id: SellerId,
    pub client_id: ClientId,
}

impl Event for VisitCreated {
    fn event_type(&self) -> &'static str {
        "visit_created"
    }

    fn microservice(&self) -> &'static str {
        "seller"
    }
}

/// `delivery_routes_generated`: void payload, consumers refetch.
#[derive(Debug, Clone, Serialize)]
pub struct DeliveryRoutesGenerated;

impl Event for DeliveryRoutesGenerated {
    fn event_type(&self) -> &'static str {
        "delivery_routes_generated"
    }

    fn microservice(&self) -> &'static str {
        "delivery"
    }
}

/// `visit_routes_generated`: notifies a seller's mobile client that a
/// new set of visit routes is available.
#[derive(Debug, Clone, Serialize)]
pub struct VisitRoutesGenerated {
    pub seller_id: SellerId,
}

impl Event for VisitRoutesGenerated {
    fn event_type(&self) -> &'static str {
        "visit_routes_generated"
    }

    fn microservice(&self) -> &'static str {
        "seller"
    }
}

/// `report_generated`: notifies a web user that a previously
/// requested report finished; no payload data, the client refetches.
#[derive(Debug, Clone, Serialize)]
pub struct ReportGenerated {
    pub user_id: UserId,
    pub report_id: Option<String>,
}

impl Event for ReportGenerated {
    fn event_type(&self) -> &'static str {
        "report_generated"
    }

    fn microservice(&self) -> &'static str {
        "web"
    }
}
