//! Error types for the poller

use thiserror::Error;

pub type Result<T> = std::result::Result<T, PollerError>;

#[derive(Debug, Error)]
pub enum PollerError {
    /// Interval or timeout rejected
    #[error("Invalid poll options: {0}")]
    InvalidOptions(String),

    /// `start_polling` was called outside a Tokio runtime
    #[error("No Tokio runtime available to drive the poll loop")]
    NoRuntime,
}
