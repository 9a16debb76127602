//! In-memory implementation of the `BotChatPort`.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::chat::{
    domain::{BotChat, BotChatId},
    ports::{BotChatError, BotChatPort, BotChatResult},
};

/// In-memory [`BotChatPort`] backed by a map of chats.
///
/// Unknown ids resolve to `Ok(None)`, the same as a chat that has not loaded.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBotChatAdapter {
    store: Arc<RwLock<BotChatStore>>,
}

#[derive(Debug, Default)]
struct BotChatStore {
    chats: HashMap<BotChatId, BotChat>,
    fetches: usize,
}

impl InMemoryBotChatAdapter {
    /// Creates an empty adapter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores or replaces a bot chat.
    ///
    /// # Errors
    ///
    /// Returns `BotChatError` when lock acquisition fails.
    pub fn insert(&self, chat: BotChat) -> BotChatResult<()> {
        let mut guard = self
            .store
            .write()
            .map_err(|e| BotChatError::backend(std::io::Error::other(e.to_string())))?;
        guard.chats.insert(chat.bot_chat_id, chat);
        Ok(())
    }

    /// Returns how many fetches have been served.
    ///
    /// # Errors
    ///
    /// Returns `BotChatError` when lock acquisition fails.
    pub fn fetch_count(&self) -> BotChatResult<usize> {
        self.store
            .read()
            .map(|guard| guard.fetches)
            .map_err(|e| BotChatError::backend(std::io::Error::other(e.to_string())))
    }
}

#[async_trait]
impl BotChatPort for InMemoryBotChatAdapter {
    async fn fetch_bot_chat(&self, bot_chat_id: BotChatId) -> BotChatResult<Option<BotChat>> {
        let mut guard = self
            .store
            .write()
            .map_err(|e| BotChatError::backend(std::io::Error::other(e.to_string())))?;
        guard.fetches += 1;
        Ok(guard.chats.get(&bot_chat_id).cloned())
    }
}
