//! The `delivery` service: Shipment/Route entities and the Route
//! Optimizer.

pub mod coordinates;
pub mod optimizer;
pub mod repository;
pub mod route;
pub mod shipment;
pub mod vehicle;

pub use coordinates::Coordinates;
pub use optimizer::{RouteOptimizationResult, RouteOptimizer};
pub use repository::{InMemoryRouteRepository, InMemoryShipmentRepository, RouteRepository, ShipmentRepository};
pub use route::{Route, RouteStatus};
pub use shipment::{GeocodingStatus, Shipment, ShipmentStatus};
pub use vehicle::Vehicle;
