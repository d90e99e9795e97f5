//! The minimal vocabulary every integration event payload implements.

use chrono::{DateTime, Utc};

/// An integration event payload: something a producer can name, version,
/// and timestamp, independent of the envelope that carries it.
pub trait Event: serde::Serialize {
    /// Wire name used as `event_type` at the top of the envelope, e.g.
    /// `"order_created"`.
    fn event_type(&self) -> &'static str;

    /// Name of the microservice that produced the event.
    fn microservice(&self) -> &'static str;

    /// When the event occurred (UTC). Defaults to now for events that don't
    /// carry their own timestamp field.
    fn occurred_at(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
