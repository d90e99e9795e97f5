use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

/// publish a named event, with an optional JSON payload, to a
/// channel. Channel names are environment-namespaced so the same hosted
/// account can serve multiple deployments without cross-talk.
#[async_trait]
pub trait RealtimeNotifier: Send + Sync {
    async fn publish(&self, channel: &str, event: &str, payload: Option<Value>);
    async fn health_check(&self) -> bool;
}

/// Talks to a hosted pub/sub REST API (Ably-shaped: `PUT /channels/{name}/messages`
/// with a `{name, data}` body, bearer-authenticated by the API key).
pub struct AblyRealtimeNotifier {
    http: reqwest::Client,
    api_key: String,
    environment: String,
}

impl AblyRealtimeNotifier {
    const BASE_URL: &'static str = "https://rest.ably.io";

    pub fn new(api_key: impl Into<String>, environment: impl Into<String>) -> Self {
        let api_key = api_key.into();
        let environment = environment.into();
        if api_key.is_empty() {
            tracing::warn!("realtime API key not provided; publishes will be skipped");
        }
        Self {
            http: reqwest::Client::builder()
                .timeout(Duration::from_secs(5))
                .build()
                .expect("reqwest client builds"),
            api_key,
            environment,
        }
    }

    /// Prefixes `channel` with the environment unless it is already
    /// prefixed, so callers can pass either a bare or pre-namespaced name.
    fn namespaced_channel(&self, channel: &str) -> String {
        let prefix = format!("{}:", self.environment);
        if channel.starts_with(&prefix) {
            channel.to_string()
        } else {
            format!("{prefix}{channel}")
        }
    }
}

#[async_trait]
impl RealtimeNotifier for AblyRealtimeNotifier {
    async fn publish(&self, channel: &str, event: &str, payload: Option<Value>) {
        if self.api_key.is_empty() {
            tracing::warn!(channel, event, "realtime not configured, skipping publish");
            return;
        }
        let channel = self.namespaced_channel(channel);
        let body = serde_json::json!({
            "name": event,
            "data": payload.unwrap_or(Value::Object(Default::default())),
        });
        let url = format!("{}/channels/{}/messages", Self::BASE_URL, channel);
        let result = self
            .http
            .post(&url)
            .basic_auth(&self.api_key, Some(""))
            .json(&body)
            .send()
            .await;
        match result {
            Ok(response) if response.status().is_success() => {}
            Ok(response) => {
                tracing::error!(channel, event, status = %response.status(), "failed to publish realtime event");
            }
            Err(error) => {
                tracing::error!(channel, event, %error, "failed to publish realtime event");
            }
        }
    }

    async fn health_check(&self) -> bool {
        if self.api_key.is_empty() {
            return false;
        }
        let url = format!("{}/time", Self::BASE_URL);
        self.http
            .get(&url)
            .basic_auth(&self.api_key, Some(""))
            .send()
            .await
            .map(|response| response.status().is_success())
            .unwrap_or(false)
    }
}
