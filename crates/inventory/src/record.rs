use chrono::NaiveDate;
use opsfabric_core::{InventoryId, Money, ProductId, WarehouseId};
use serde::{Deserialize, Serialize};

/// What `GET /inventory/{id}` returns: enough to denormalize onto an
/// `OrderItem` without a join back to `catalog`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryRecord {
    pub id: InventoryId,
    pub warehouse_id: WarehouseId,
    pub available_quantity: u32,
    pub product_id: ProductId,
    pub product_name: String,
    pub sku: String,
    pub base_price: Money,
    pub category: String,
    pub warehouse_name: String,
    pub warehouse_city: String,
    pub warehouse_country: String,
    pub batch_number: String,
    pub expiration_date: Option<NaiveDate>,
}
