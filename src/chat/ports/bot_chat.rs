//! Port for fetching support bot conversations.

use crate::chat::domain::{BotChat, BotChatId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for bot chat operations.
pub type BotChatResult<T> = Result<T, BotChatError>;

/// Fetches bot conversations by id.
///
/// `Ok(None)` means the chat has not arrived yet; the engine treats it the
/// same as a chat that is still loading.
#[async_trait]
pub trait BotChatPort: Send + Sync {
    /// Fetches the bot chat with the given id.
    ///
    /// # Errors
    ///
    /// Returns `BotChatError` if the provider rejects the request.
    async fn fetch_bot_chat(&self, bot_chat_id: BotChatId) -> BotChatResult<Option<BotChat>>;
}

/// Errors returned by bot chat adapters.
#[derive(Debug, Clone, Error)]
pub enum BotChatError {
    /// The provider has no chat with this id.
    #[error("bot chat not found: {0}")]
    NotFound(BotChatId),

    /// Backend failure.
    #[error("bot chat backend error: {0}")]
    Backend(Arc<dyn std::error::Error + Send + Sync>),
}

impl BotChatError {
    /// Wraps a backend error.
    pub fn backend(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Backend(Arc::new(err))
    }
}
