//! The `order` service: the Order/OrderItem aggregate and the Order
//! Pipeline that validates, reserves, persists, and publishes it.

pub mod order;
pub mod pipeline;
pub mod ports;
pub mod repository;

pub use order::{CreationMethod, CustomerSnapshot, Order, OrderItem, SellerSnapshot};
pub use pipeline::{NewOrderItem, NewOrderRequest, OrderPipeline};
pub use ports::{CustomerPort, InventoryPort};
pub use repository::{InMemoryOrderRepository, OrderRepository};
