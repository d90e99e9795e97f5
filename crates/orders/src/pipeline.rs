//! Order Pipeline: validate, reserve, persist, publish.
//!
//! A pure function over its collaborators -- no mutable adapters held as
//! hidden attributes, no framework-injected singletons. Everything it
//! needs is passed in at construction.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use opsfabric_core::{CustomerId, DomainError, DomainResult, InventoryId, SellerId, VisitId};
use opsfabric_events::payloads::{OrderCreated, OrderCreatedItem};
use opsfabric_events::EventBus;
use opsfabric_inventory::ReservationDelta;

use crate::order::{CreationMethod, Order, OrderItem, SellerSnapshot};
use crate::ports::{CustomerPort, InventoryPort};
use crate::repository::OrderRepository;

/// One requested line item: `{inventory_id, quantity>0}`.
#[derive(Debug, Clone, Copy)]
pub struct NewOrderItem {
    pub inventory_id: InventoryId,
    pub quantity: u32,
}

/// Everything the pipeline needs to create an order, independent of the
/// transport that collected it.
#[derive(Debug, Clone)]
pub struct NewOrderRequest {
    pub customer_id: CustomerId,
    pub creation_method: CreationMethod,
    pub seller_id: Option<SellerId>,
    pub visit_id: Option<VisitId>,
    pub seller: Option<SellerSnapshot>,
    pub delivery_address: String,
    pub delivery_city: String,
    pub delivery_country: String,
    pub items: Vec<NewOrderItem>,
}

pub struct OrderPipeline {
    customers: Arc<dyn CustomerPort>,
    inventory: Arc<dyn InventoryPort>,
    orders: Arc<dyn OrderRepository>,
    events: Arc<dyn EventBus>,
}

impl OrderPipeline {
    pub fn new(
        customers: Arc<dyn CustomerPort>,
        inventory: Arc<dyn InventoryPort>,
        orders: Arc<dyn OrderRepository>,
        events: Arc<dyn EventBus>,
    ) -> Self {
        Self {
            customers,
            inventory,
            orders,
            events,
        }
    }

    pub async fn create_order(
        &self,
        request: NewOrderRequest,
        created_at: DateTime<Utc>,
    ) -> DomainResult<Order> {
        if request.items.is_empty() {
            return Err(DomainError::validation("order must contain at least one item"));
        }

        // Step 1: fetch customer, record snapshot.
        let customer = self.customers.get_customer(request.customer_id).await?;

        let mut order = Order::new(
            customer,
            request.creation_method,
            request.seller_id,
            request.visit_id,
            request.seller.clone(),
            request.delivery_address,
            request.delivery_city,
            request.delivery_country,
            created_at,
        )?;

        // Steps 2-4: fetch + price + reserve each item in list order, tracking
        // every reservation that actually succeeded so a later failure can be
        // compensated by releasing exactly those (reservations are issued
        // in item-list order for deterministic compensation).
        let mut reserved: Vec<ReservationDelta> = Vec::with_capacity(request.items.len());
        let mut built_items: Vec<OrderItem> = Vec::with_capacity(request.items.len());

        for requested in &request.items {
            let record = match self.inventory.get_inventory(requested.inventory_id).await {
                Ok(record) => record,
                Err(e) => {
                    self.compensate(&reserved).await;
                    return Err(e);
                }
            };

            let unit_price = record.base_price.scaled_by(130, 100);

            let delta = ReservationDelta::reserve(requested.inventory_id, requested.quantity);
            if let Err(e) = self.inventory.adjust_reservation(delta).await {
                self.compensate(&reserved).await;
                return Err(e);
            }
            reserved.push(delta);

            match OrderItem::new(
                order.id,
                record.product_id,
                record.id,
                record.warehouse_id,
                requested.quantity,
                unit_price,
                record.product_name,
                record.sku,
                record.warehouse_name,
                record.warehouse_city,
                record.warehouse_country,
                record.batch_number,
                record.expiration_date,
            ) {
                Ok(item) => built_items.push(item),
                Err(e) => {
                    self.compensate(&reserved).await;
                    return Err(e);
                }
            }
        }

        for item in built_items {
            order.add_item(item)?;
        }

        // Step 5: persist atomically.
        self.orders.save(order.clone()).await?;

        // Step 6: publish after commit, fire-and-forget.
        let event = OrderCreated {
            order_id: order.id,
            customer_id: order.customer.customer_id,
            seller_id: order.seller_id,
            monto_total: order.total_amount,
            metodo_creacion: order.creation_method.wire_name(),
            items: order
                .items
                .iter()
                .map(|i| OrderCreatedItem {
                    product_id: i.product_id,
                    quantity: i.quantity,
                    unit_price: i.unit_price,
                    total_price: i.total_price,
                })
                .collect(),
        };
        opsfabric_events::bus::publish(&*self.events, event).await;

        Ok(order)
    }

    /// Release every reservation that succeeded before a later step failed,
    /// in reverse order. A release failure does not retroactively create
    /// the order; it escalates to an operator-actionable leak, logged here
    /// rather than surfaced to the caller.
    async fn compensate(&self, reserved: &[ReservationDelta]) {
        for delta in reserved.iter().rev() {
            if let Err(e) = self.inventory.adjust_reservation(delta.release()).await {
                tracing::error!(
                    inventory_id = %delta.inventory_id,
                    error = %e,
                    "partial reservation leak: release failed after a later reservation step failed"
                );
            }
        }
    }
}
