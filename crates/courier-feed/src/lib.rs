//! `courier-feed` — CSV feed ingestion for the daily poster.
//!
//! One fetch at startup: download the feed, drop rows under the popularity
//! threshold, format the survivors, build the immutable message store. No
//! caching and no retry. A failed or empty load is a startup failure, and
//! the process supervisor is the retry mechanism.

pub mod error;
pub mod fetch;
pub mod record;

pub use error::FeedError;
pub use record::FeedRecord;

use tracing::info;

use courier_core::config::DailyConfig;
use courier_core::{Message, MessageStore};

/// Fetch, filter and format the feed into the daily poster's message store.
pub async fn load_messages(cfg: &DailyConfig) -> Result<MessageStore, FeedError> {
    let records = fetch::fetch_records(&cfg.feed).await?;
    build_store(records, cfg.threshold)
}

/// Threshold filter plus formatting, separated from the network fetch so
/// tests can drive it with in-memory rows.
pub fn build_store(records: Vec<FeedRecord>, threshold: f64) -> Result<MessageStore, FeedError> {
    let total = records.len();

    let messages: Vec<Message> = records
        .into_iter()
        .filter(|r| r.score >= threshold)
        .map(FeedRecord::into_message)
        .collect();

    if messages.is_empty() {
        return Err(FeedError::Empty { threshold });
    }

    info!(total, kept = messages.len(), threshold, "feed loaded");

    Ok(MessageStore::new(messages)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str, score: f64) -> FeedRecord {
        FeedRecord {
            title: title.to_string(),
            url: format!("https://example.com/{title}"),
            score,
        }
    }

    #[test]
    fn threshold_drops_low_scores() {
        let store = build_store(vec![record("hot", 90.0), record("cold", 10.0)], 50.0).unwrap();
        assert_eq!(store.len(), 1);
        assert!(store.messages()[0].as_str().contains("hot"));
    }

    #[test]
    fn threshold_is_inclusive() {
        let store = build_store(vec![record("edge", 50.0)], 50.0).unwrap();
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn empty_result_after_filtering_is_an_error() {
        let err = build_store(vec![record("cold", 10.0)], 50.0).unwrap_err();
        assert!(matches!(err, FeedError::Empty { .. }));
    }

    #[test]
    fn zero_threshold_keeps_everything() {
        let store = build_store(vec![record("a", 0.0), record("b", 99.0)], 0.0).unwrap();
        assert_eq!(store.len(), 2);
    }
}
