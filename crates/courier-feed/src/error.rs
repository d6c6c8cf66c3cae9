use thiserror::Error;

/// Failures while loading the daily feed.
///
/// All of these are startup-fatal: the poster refuses to schedule without
/// a non-empty message store.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("feed download failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("feed is not valid CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("no feed rows at or above score {threshold}")]
    Empty { threshold: f64 },

    #[error(transparent)]
    Store(#[from] courier_core::CourierError),
}
