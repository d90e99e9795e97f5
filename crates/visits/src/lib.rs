//! The `seller` service's Visit entity and the Create-Visit saga.

pub mod ports;
pub mod repository;
pub mod saga;
pub mod visit;

pub use ports::ClientPort;
pub use repository::{InMemoryVisitRepository, VisitRepository};
pub use saga::{CreateVisitRequest, VisitSaga};
pub use visit::{Visit, VisitStatus};
