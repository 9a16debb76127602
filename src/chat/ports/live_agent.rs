//! Port for fetching live-agent conversations.

use crate::chat::domain::{BotChatId, LiveAgentConversation, LiveAgentConversationId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for live-agent operations.
pub type LiveAgentResult<T> = Result<T, LiveAgentError>;

/// Fetches live-agent conversations attached to a bot chat.
///
/// Each call is a one-shot request. Deduplication is the caller's concern.
#[async_trait]
pub trait LiveAgentPort: Send + Sync {
    /// Fetches the conversation `conversation_id` handed off from `chat_id`.
    ///
    /// Returns `Ok(None)` when the provider has no such conversation.
    ///
    /// # Errors
    ///
    /// Returns `LiveAgentError` if the provider rejects the request.
    async fn fetch_conversation(
        &self,
        chat_id: BotChatId,
        conversation_id: &LiveAgentConversationId,
    ) -> LiveAgentResult<Option<LiveAgentConversation>>;
}

/// Errors returned by live-agent adapters.
#[derive(Debug, Clone, Error)]
pub enum LiveAgentError {
    /// The help desk is unreachable.
    #[error("live-agent system unavailable: {0}")]
    Unavailable(String),

    /// Backend failure.
    #[error("live-agent backend error: {0}")]
    Backend(Arc<dyn std::error::Error + Send + Sync>),
}

impl LiveAgentError {
    /// Wraps a backend error.
    pub fn backend(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Backend(Arc::new(err))
    }
}
