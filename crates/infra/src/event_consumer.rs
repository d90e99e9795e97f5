//! Inbound event bus adapter. Polls a queue, dispatches each message
//! by its `event_type` field to a registered handler, and acknowledges
//! (deletes) the message only when dispatch succeeds or the message itself
//! is unprocessable:
//!   - handler succeeds -> ack
//!   - handler fails -> no ack, message is redelivered
//!   - body is not valid JSON, or `event_type` is unknown -> ack and drop

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use opsfabric_core::DomainResult;
use serde_json::Value;

#[derive(Debug, Clone)]
pub struct ReceivedMessage {
    pub receipt_handle: String,
    pub body: String,
}

#[async_trait]
pub trait QueueSource: Send + Sync {
    async fn receive(&self, max_messages: u32) -> DomainResult<Vec<ReceivedMessage>>;
    async fn delete(&self, receipt_handle: &str) -> DomainResult<()>;
}

#[async_trait]
pub trait EventHandler: Send + Sync {
    async fn handle(&self, event_type: &str, payload: Value) -> DomainResult<()>;
}

pub struct EventConsumer {
    source: Arc<dyn QueueSource>,
    handlers: HashMap<String, Arc<dyn EventHandler>>,
    poll_max: u32,
}

impl EventConsumer {
    pub fn new(source: Arc<dyn QueueSource>, poll_max: u32) -> Self {
        Self {
            source,
            handlers: HashMap::new(),
            poll_max,
        }
    }

    pub fn register(&mut self, event_type: impl Into<String>, handler: Arc<dyn EventHandler>) {
        self.handlers.insert(event_type.into(), handler);
    }

    /// Polls once and dispatches every received message. Returns the number
    /// of messages that were acknowledged (deleted from the queue).
    pub async fn run_once(&self) -> DomainResult<usize> {
        let messages = self.source.receive(self.poll_max).await?;
        let mut acked = 0;
        for message in messages {
            if self.process(&message).await {
                self.source.delete(&message.receipt_handle).await?;
                acked += 1;
            }
        }
        Ok(acked)
    }

    /// Returns `true` when the message should be acknowledged (either the
    /// handler succeeded, or the message was unprocessable and must not be
    /// redelivered).
    async fn process(&self, message: &ReceivedMessage) -> bool {
        let parsed: Value = match serde_json::from_str(&message.body) {
            Ok(value) => value,
            Err(error) => {
                tracing::error!(receipt_handle = %message.receipt_handle, %error, "dropping message with invalid JSON body");
                return true;
            }
        };

        let event_type = match parsed.get("event_type").and_then(Value::as_str) {
            Some(event_type) => event_type.to_string(),
            None => {
                tracing::error!(receipt_handle = %message.receipt_handle, "dropping message with no event_type field");
                return true;
            }
        };

        let handler = match self.handlers.get(&event_type) {
            Some(handler) => handler,
            None => {
                tracing::warn!(event_type, "dropping message with no registered handler");
                return true;
            }
        };

        match handler.handle(&event_type, parsed).await {
            Ok(()) => true,
            Err(error) => {
                tracing::error!(event_type, %error, "handler failed, message will be redelivered");
                false
            }
        }
    }
}
