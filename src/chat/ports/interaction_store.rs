//! Port for reading the active support interaction.

use crate::chat::domain::SupportInteraction;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for interaction store operations.
pub type InteractionStoreResult<T> = Result<T, InteractionStoreError>;

/// Source of the support interaction the user is currently in.
///
/// The engine re-reads the store on every refresh and once more when a
/// live-agent fetch completes, so implementations should return the latest
/// snapshot rather than a cached one.
#[async_trait]
pub trait InteractionStore: Send + Sync {
    /// Returns the active support interaction, if any.
    ///
    /// # Errors
    ///
    /// Returns `InteractionStoreError` if the store cannot be read.
    async fn current_support_interaction(
        &self,
    ) -> InteractionStoreResult<Option<SupportInteraction>>;
}

/// Errors returned by interaction store adapters.
#[derive(Debug, Clone, Error)]
pub enum InteractionStoreError {
    /// The store is temporarily unavailable.
    #[error("interaction store unavailable: {0}")]
    Unavailable(String),

    /// Backend failure.
    #[error("interaction store backend error: {0}")]
    Backend(Arc<dyn std::error::Error + Send + Sync>),
}

impl InteractionStoreError {
    /// Wraps a backend error.
    pub fn backend(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Backend(Arc::new(err))
    }
}
