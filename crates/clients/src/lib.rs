//! The `clients` service: institutional customers and the single-writer
//! seller assignment mutation the Visit Saga drives through its remote port.

pub mod client;
pub mod repository;

pub use client::Client;
pub use repository::{ClientRepository, InMemoryClientRepository};
