//! Error types for queue and controller operations

use thiserror::Error;

/// Errors detected by the queue or controller
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaybackError {
    /// Operation needs a current track but the queue has none
    #[error("Queue is empty")]
    EmptyQueue,

    /// Index outside `[0, len)`
    #[error("Index {index} out of range for queue of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
