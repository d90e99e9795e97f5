use std::time::Duration;

/// `{service}_url`, `{service}_timeout_ms`: a single configured timeout
/// applied to both the connect phase and the request phase.
#[derive(Debug, Clone)]
pub struct ServiceClientConfig {
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl ServiceClientConfig {
    pub fn new(base_url: impl Into<String>, connect_timeout_ms: u64, request_timeout_ms: u64) -> Self {
        Self {
            base_url: base_url.into(),
            connect_timeout: Duration::from_millis(connect_timeout_ms),
            request_timeout: Duration::from_millis(request_timeout_ms),
        }
    }
}
