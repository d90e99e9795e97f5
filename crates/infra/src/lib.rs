//! Process-wide configuration and the inbound event bus adapter.

pub mod config;
pub mod event_consumer;

pub use config::AppConfig;
pub use event_consumer::{EventConsumer, EventHandler};
