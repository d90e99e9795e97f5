//! Integration events: the envelope, the outbound bus contract, and the
//! payload shapes produced by the core.

pub mod bus;
pub mod envelope;
pub mod event;
pub mod payloads;

pub use bus::{EventBus, InMemoryEventBus};
pub use envelope::EventEnvelope;
pub use event::Event;
