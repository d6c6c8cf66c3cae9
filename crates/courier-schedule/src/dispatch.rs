use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use courier_core::MessageStore;

use crate::picker;

/// Failure surfaced by an outbound delivery backend.
#[derive(Debug, thiserror::Error)]
#[error("outbound delivery failed: {0}")]
pub struct OutboundError(pub String);

/// Chat-gateway send primitive.
///
/// The daily binary plugs in a serenity REST sender; tests plug in fakes.
#[async_trait]
pub trait Outbound: Send + Sync {
    async fn deliver(&self, text: &str) -> Result<(), OutboundError>;
}

/// Fire-time callback: pick one message and hand it to the outbound sink.
pub struct PostDispatcher {
    store: MessageStore,
    outbound: Arc<dyn Outbound>,
}

impl PostDispatcher {
    pub fn new(store: MessageStore, outbound: Arc<dyn Outbound>) -> Self {
        Self { store, outbound }
    }

    /// One post attempt.
    ///
    /// Delivery failures are logged and swallowed; the scheduler's next
    /// cycle is the retry. An empty store (unreachable once the load-time
    /// check passed) skips the cycle instead of crashing the loop.
    pub async fn fire(&self) {
        let messages = self.store.messages();
        if messages.is_empty() {
            warn!("message store is empty at fire time, skipping this cycle");
            return;
        }

        let message = picker::pick(messages);
        match self.outbound.deliver(message.as_str()).await {
            Ok(()) => info!("scheduled post delivered"),
            Err(e) => warn!(error = %e, "scheduled post failed, next cycle will retry"),
        }
    }
}
