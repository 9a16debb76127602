//! In-memory implementation of the `LiveAgentPort`.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::chat::{
    domain::{BotChatId, LiveAgentConversation, LiveAgentConversationId},
    ports::{LiveAgentError, LiveAgentPort, LiveAgentResult},
};

/// In-memory [`LiveAgentPort`] backed by a map of conversations.
///
/// Every request is recorded so tests can assert how often the engine asked
/// for a conversation. A failure can be armed with
/// [`InMemoryLiveAgentAdapter::fail_with`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryLiveAgentAdapter {
    store: Arc<RwLock<LiveAgentStore>>,
}

#[derive(Debug, Default)]
struct LiveAgentStore {
    conversations: HashMap<LiveAgentConversationId, LiveAgentConversation>,
    requests: Vec<(BotChatId, LiveAgentConversationId)>,
    failure: Option<String>,
}

impl InMemoryLiveAgentAdapter {
    /// Creates an empty adapter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores or replaces a conversation.
    ///
    /// # Errors
    ///
    /// Returns `LiveAgentError` when lock acquisition fails.
    pub fn insert(&self, conversation: LiveAgentConversation) -> LiveAgentResult<()> {
        let mut guard = self.write()?;
        guard
            .conversations
            .insert(conversation.id.clone(), conversation);
        Ok(())
    }

    /// Makes every subsequent fetch fail with `LiveAgentError::Unavailable`.
    ///
    /// # Errors
    ///
    /// Returns `LiveAgentError` when lock acquisition fails.
    pub fn fail_with(&self, reason: impl Into<String>) -> LiveAgentResult<()> {
        let mut guard = self.write()?;
        guard.failure = Some(reason.into());
        Ok(())
    }

    /// Returns every request received, in arrival order.
    ///
    /// # Errors
    ///
    /// Returns `LiveAgentError` when lock acquisition fails.
    pub fn fetch_log(&self) -> LiveAgentResult<Vec<(BotChatId, LiveAgentConversationId)>> {
        self.store
            .read()
            .map(|guard| guard.requests.clone())
            .map_err(|e| LiveAgentError::backend(std::io::Error::other(e.to_string())))
    }

    fn write(&self) -> LiveAgentResult<std::sync::RwLockWriteGuard<'_, LiveAgentStore>> {
        self.store
            .write()
            .map_err(|e| LiveAgentError::backend(std::io::Error::other(e.to_string())))
    }
}

#[async_trait]
impl LiveAgentPort for InMemoryLiveAgentAdapter {
    async fn fetch_conversation(
        &self,
        chat_id: BotChatId,
        conversation_id: &LiveAgentConversationId,
    ) -> LiveAgentResult<Option<LiveAgentConversation>> {
        let mut guard = self.write()?;
        guard.requests.push((chat_id, conversation_id.clone()));

        if let Some(reason) = &guard.failure {
            return Err(LiveAgentError::Unavailable(reason.clone()));
        }

        Ok(guard.conversations.get(conversation_id).cloned())
    }
}
