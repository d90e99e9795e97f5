//! Typed remote-call primitive over HTTP.
//!
//! One [`ServiceClient`] per downstream service, built once at startup and
//! shared across request tasks: HTTP transports are process-wide, never
//! per-request. No retry and no circuit-breaker here -- that policy
//! belongs to the caller (the saga / pipeline deciding whether to abort or
//! compensate).

mod client;
mod config;

pub use client::ServiceClient;
pub use config::ServiceClientConfig;
