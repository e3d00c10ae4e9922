//! Feed error types.

use thiserror::Error;

/// Errors a data provider can report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    #[error("provider unavailable: {0}")]
    Unavailable(String),

    #[error("query rejected: {0}")]
    Rejected(String),
}

/// Errors surfaced by the feed loader.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedError {
    /// The provider failed; shown inline, not retried.
    #[error("could not load products: {0}")]
    FetchFailure(#[from] ProviderError),

    /// A result arrived for a superseded query. Dropped, never shown.
    #[error("stale result for generation {ticket} (current {current})")]
    StaleResult { ticket: u64, current: u64 },
}

impl FeedError {
    /// Whether this is a discard condition rather than a real failure.
    pub fn is_stale(&self) -> bool {
        matches!(self, FeedError::StaleResult { .. })
    }
}
