use opsfabric_core::{Entity, Money, ProductId};
use serde::{Deserialize, Serialize};

/// A sellable product. Owned by the `catalog` service; other services only
/// ever hold its id and a point-in-time snapshot of these fields.
/// Cross-service references are id-only; there are no joins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub sku: String,
    pub category: String,
    pub base_price: Money,
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> ProductId {
        self.id
    }
}
