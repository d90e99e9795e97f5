//! The `catalog` service: product records the Order Pipeline denormalizes
//! a snapshot of onto each order line (`OrderItem`).

pub mod product;

pub use product::Product;
