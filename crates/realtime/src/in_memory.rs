use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use crate::notifier::RealtimeNotifier;

/// Records every publish instead of sending it anywhere. Used by
/// orchestration-layer tests that assert a notification was fired.
#[derive(Default)]
pub struct InMemoryRealtimeNotifier {
    published: Mutex<Vec<(String, String, Option<Value>)>>,
}

impl InMemoryRealtimeNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn published(&self) -> Vec<(String, String, Option<Value>)> {
        self.published.lock().unwrap().clone()
    }
}

#[async_trait]
impl RealtimeNotifier for InMemoryRealtimeNotifier {
    async fn publish(&self, channel: &str, event: &str, payload: Option<Value>) {
        self.published
            .lock()
            .unwrap()
            .push((channel.to_string(), event.to_string(), payload));
    }

    async fn health_check(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn publish_is_recorded_in_order() {
        let notifier = InMemoryRealtimeNotifier::new();
        notifier.publish("sellers:1", "order.created", None).await;
        notifier.publish("sellers:1", "visit.created", None).await;
        let published = notifier.published();
        assert_eq!(published.len(), 2);
        assert_eq!(published[0].1, "order.created");
        assert_eq!(published[1].1, "visit.created");
    }
}
