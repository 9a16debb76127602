//! Errors surfaced by the combined chat service.
//!
//! Provider failures are absorbed by the engine and never reach callers;
//! only a failure to read the active interaction, or a poisoned internal
//! lock, is reported.

use thiserror::Error;

use super::ports::InteractionStoreError;

/// Result type for combined chat service operations.
pub type ChatServiceResult<T> = Result<T, ChatServiceError>;

/// Service-level errors for the combined chat.
#[derive(Debug, Clone, Error)]
pub enum ChatServiceError {
    /// The active interaction could not be read.
    #[error(transparent)]
    InteractionStore(#[from] InteractionStoreError),

    /// Internal state lock was poisoned.
    #[error("chat state lock poisoned: {0}")]
    StatePoisoned(String),
}
