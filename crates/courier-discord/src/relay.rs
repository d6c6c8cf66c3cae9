//! Anonymous re-posting — downloads the invoker's attachment and sends it
//! back into the channel with no attribution.

use serenity::builder::{CreateAttachment, CreateMessage};
use serenity::model::channel::Attachment;
use serenity::model::id::ChannelId;
use serenity::prelude::Context;
use tracing::warn;

use courier_core::config::RelayConfig;

use crate::error::DiscordError;
use crate::send;

/// Send `text` (and the attachment, when present) into `channel_id`.
pub async fn repost(
    relay: &RelayConfig,
    ctx: &Context,
    channel_id: ChannelId,
    text: &str,
    attachment: Option<&Attachment>,
) -> Result<(), DiscordError> {
    let Some(att) = attachment else {
        send::send_chunked(&ctx.http, channel_id, text).await?;
        return Ok(());
    };

    if u64::from(att.size) > relay.max_attachment_bytes {
        warn!(
            filename = %att.filename,
            size = att.size,
            "attachment exceeds relay cap, relaying text only"
        );
        let notice = format!(
            "{text}\n[attachment '{}' was too large to relay]",
            att.filename
        );
        send::send_chunked(&ctx.http, channel_id, &notice).await?;
        return Ok(());
    }

    let bytes = download_bytes(&att.url).await?;
    let file = CreateAttachment::bytes(bytes, att.filename.clone());
    channel_id
        .send_message(&ctx.http, CreateMessage::new().content(text).add_file(file))
        .await?;
    Ok(())
}

/// Fetch a Discord CDN URL into memory.
async fn download_bytes(url: &str) -> Result<Vec<u8>, reqwest::Error> {
    let bytes = reqwest::get(url)
        .await?
        .error_for_status()?
        .bytes()
        .await?;
    Ok(bytes.to_vec())
}
