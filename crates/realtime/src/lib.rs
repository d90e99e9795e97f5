//! Realtime notifications: best-effort fan-out to connected
//! clients over a hosted pub/sub channel. Publish failures are logged, never
//! propagated — a missed push notification is not a transaction failure.

pub mod in_memory;
pub mod notifier;

pub use in_memory::InMemoryRealtimeNotifier;
pub use notifier::{AblyRealtimeNotifier, RealtimeNotifier};
