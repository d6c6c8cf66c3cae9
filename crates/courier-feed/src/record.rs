use serde::Deserialize;

use courier_core::Message;

/// One row of the feed CSV.
///
/// Expected header: `title,url,score`. Extra columns are ignored by the
/// reader; missing ones fail deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedRecord {
    pub title: String,
    pub url: String,
    /// Popularity score the load-time threshold filter applies to.
    pub score: f64,
}

impl FeedRecord {
    /// Post-ready rendering: bold title, bare link on its own line so the
    /// chat client embeds a preview.
    pub fn into_message(self) -> Message {
        Message::from(format!("**{}**\n{}", self.title, self.url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_carries_title_and_link() {
        let record = FeedRecord {
            title: "Read this".to_string(),
            url: "https://example.com/read".to_string(),
            score: 80.0,
        };
        assert_eq!(
            record.into_message().as_str(),
            "**Read this**\nhttps://example.com/read"
        );
    }
}
