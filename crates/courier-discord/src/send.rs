/// Discord rejects messages over 2000 characters; stay under with margin.
const CHUNK_MAX: usize = 1950;

/// Split `text` into chunks of at most [`CHUNK_MAX`] characters, preferring
/// newline and space boundaries. Counts characters, not bytes, so a chunk
/// boundary can never land inside a UTF-8 sequence.
pub fn split_chunks(text: &str) -> Vec<String> {
    if text.chars().count() <= CHUNK_MAX {
        return vec![text.to_string()];
    }

    let mut chunks = Vec::new();
    let mut remaining = text;

    loop {
        if remaining.chars().count() <= CHUNK_MAX {
            if !remaining.is_empty() {
                chunks.push(remaining.to_string());
            }
            break;
        }

        // Byte offset just past the CHUNK_MAX-th character.
        let window_end = remaining
            .char_indices()
            .nth(CHUNK_MAX)
            .map(|(i, _)| i)
            .unwrap_or(remaining.len());
        let window = &remaining[..window_end];

        let mut split_at = window
            .rfind('\n')
            .or_else(|| window.rfind(' '))
            .unwrap_or(window_end);
        // A boundary at position 0 would produce an empty chunk; hard-split
        // the window instead.
        if split_at == 0 {
            split_at = window_end;
        }

        chunks.push(remaining[..split_at].to_string());
        remaining = remaining[split_at..].trim_start();
    }

    chunks
}

/// Send `text` to `channel_id` in order, one message per chunk.
pub async fn send_chunked(
    http: &serenity::http::Http,
    channel_id: serenity::model::id::ChannelId,
    text: &str,
) -> Result<(), serenity::Error> {
    for chunk in split_chunks(text) {
        channel_id.say(http, &chunk).await?;
    }
    Ok(())
}
