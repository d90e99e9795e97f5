use chrono::{DateTime, NaiveDate, Utc};
use opsfabric_core::{
    CustomerId, DomainError, DomainResult, Entity, InventoryId, Money, OrderId, OrderItemId,
    ProductId, SellerId, VisitId, WarehouseId,
};
use serde::{Deserialize, Serialize};

/// How an order was created; drives the method-conditional referent
/// invariants on `Order::new` (which of `seller_id`/`visit_id` are
/// required, optional, or must be absent).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CreationMethod {
    SellerVisit,
    ClientApp,
    SellerApp,
}

impl CreationMethod {
    pub fn wire_name(&self) -> &'static str {
        match self {
            Self::SellerVisit => "SELLER_VISIT",
            Self::ClientApp => "CLIENT_APP",
            Self::SellerApp => "SELLER_APP",
        }
    }
}

/// Customer fields copied at order-creation time; immune to later customer
/// updates ("Denormalized snapshots are historical").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerSnapshot {
    pub customer_id: CustomerId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SellerSnapshot {
    pub seller_id: SellerId,
    pub name: String,
}

/// One line item. `total_price` is always `quantity * unit_price`, checked
/// at construction to within the one-cent tolerance the data model allows
/// (invariant I2).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: OrderItemId,
    pub order_id: OrderId,
    pub product_id: ProductId,
    pub inventory_id: InventoryId,
    pub warehouse_id: WarehouseId,
    pub quantity: u32,
    pub unit_price: Money,
    pub total_price: Money,
    pub product_name: String,
    pub sku: String,
    pub warehouse_name: String,
    pub warehouse_city: String,
    pub warehouse_country: String,
    pub batch_number: String,
    pub expiration_date: Option<NaiveDate>,
}

impl OrderItem {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        order_id: OrderId,
        product_id: ProductId,
        inventory_id: InventoryId,
        warehouse_id: WarehouseId,
        quantity: u32,
        unit_price: Money,
        product_name: impl Into<String>,
        sku: impl Into<String>,
        warehouse_name: impl Into<String>,
        warehouse_city: impl Into<String>,
        warehouse_country: impl Into<String>,
        batch_number: impl Into<String>,
        expiration_date: Option<NaiveDate>,
    ) -> DomainResult<Self> {
        if quantity == 0 {
            return Err(DomainError::validation("item quantity must be > 0"));
        }
        let total_price = unit_price.times_quantity(quantity);
        Ok(Self {
            id: OrderItemId::new(),
            order_id,
            product_id,
            inventory_id,
            warehouse_id,
            quantity,
            unit_price,
            total_price,
            product_name: product_name.into(),
            sku: sku.into(),
            warehouse_name: warehouse_name.into(),
            warehouse_city: warehouse_city.into(),
            warehouse_country: warehouse_country.into(),
            batch_number: batch_number.into(),
            expiration_date,
        })
    }
}

/// Aggregate root. `total_amount` is maintained incrementally as
/// items are added, never recomputed by summing at read time (O(1) on add,
/// invariant I1).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub customer: CustomerSnapshot,
    pub seller_id: Option<SellerId>,
    pub visit_id: Option<VisitId>,
    pub creation_method: CreationMethod,
    pub seller: Option<SellerSnapshot>,
    pub delivery_address: String,
    pub delivery_city: String,
    pub delivery_country: String,
    pub total_amount: Money,
    pub items: Vec<OrderItem>,
    pub created_at: DateTime<Utc>,
}

impl Order {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        customer: CustomerSnapshot,
        creation_method: CreationMethod,
        seller_id: Option<SellerId>,
        visit_id: Option<VisitId>,
        seller: Option<SellerSnapshot>,
        delivery_address: impl Into<String>,
        delivery_city: impl Into<String>,
        delivery_country: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> DomainResult<Self> {
        validate_method(creation_method, seller_id, visit_id, &seller)?;

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
            id: OrderId::new(),
            customer,
            seller_id,
            visit_id,
            creation_method,
            seller,
            delivery_address,
            delivery_city,
            delivery_country,
            total_amount: Money::ZERO,
            items: Vec::new(),
            created_at,
        })
    }

    /// Append a line item, updating `total_amount` incrementally.
    pub fn add_item(&mut self, item: OrderItem) -> DomainResult<()> {
        if item.order_id != self.id {
            return Err(DomainError::validation(
                "item does not belong to this order",
            ));
        }
        self.total_amount = self.total_amount + item.total_price;
        self.items.push(item);
        Ok(())
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn total_quantity(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }
}

impl Entity for Order {
    type Id = OrderId;

    fn id(&self) -> OrderId {
        self.id
    }
}

fn validate_method(
    method: CreationMethod,
    seller_id: Option<SellerId>,
    visit_id: Option<VisitId>,
    seller: &Option<SellerSnapshot>,
) -> DomainResult<()> {
    match method {
        CreationMethod::SellerVisit => {
            if seller_id.is_none() || visit_id.is_none() || seller.is_none() {
                return Err(DomainError::validation(
                    "SELLER_VISIT orders require seller_id, visit_id, and a seller snapshot",
                ));
            }
        }
        CreationMethod::SellerApp => {
            if seller_id.is_none() || seller.is_none() {
                return Err(DomainError::validation(
                    "SELLER_APP orders require seller_id and a seller snapshot",
                ));
            }
        }
        CreationMethod::ClientApp => {
            if seller_id.is_some() || visit_id.is_some() {
                return Err(DomainError::validation(
                    "CLIENT_APP orders must not reference a seller or a visit",
                ));
            }
        }
    }
    Ok(())
}
