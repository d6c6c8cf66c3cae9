//! REST-only outbound sender for the daily poster.
//!
//! `Http` talks straight to the Discord REST API, so the poster never
//! opens a gateway websocket and has nothing to reconnect.

use std::sync::Arc;

use async_trait::async_trait;
use serenity::http::Http;
use serenity::model::id::ChannelId;
use tracing::debug;

use courier_schedule::{Outbound, OutboundError};

use crate::send;

/// Sends scheduled posts to one fixed channel.
pub struct ChannelSender {
    http: Arc<Http>,
    channel_id: ChannelId,
}

impl ChannelSender {
    pub fn new(bot_token: &str, channel_id: u64) -> Self {
        Self {
            http: Arc::new(Http::new(bot_token)),
            channel_id: ChannelId::new(channel_id),
        }
    }
}

#[async_trait]
impl Outbound for ChannelSender {
    async fn deliver(&self, text: &str) -> Result<(), OutboundError> {
        debug!(channel_id = %self.channel_id, "delivering scheduled post");
        send::send_chunked(&self.http, self.channel_id, text)
            .await
            .map_err(|e| OutboundError(e.to_string()))
    }
}
