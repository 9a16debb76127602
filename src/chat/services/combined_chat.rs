//! Combined chat service for merging bot and live-agent transcripts.
//!
//! The `CombinedChatService` owns the single [`Chat`] value consumers see. Each
//! call to [`CombinedChatService::refresh`] is one input-change cycle: it reads
//! the active interaction, loads the bot chat, runs [`reduce`] and applies the
//! outcome, fetching the live-agent conversation when a hand-off is due.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tokio::sync::watch;

use crate::chat::{
    config::CombinedChatConfig,
    domain::{
        BotChat, BotChatId, Chat, ChatInputs, LiveAgentConversation, LiveAgentConversationId,
        LiveAgentFetch, ResolvedIds, SupportInteractionId, Transition, reduce,
    },
    error::{ChatServiceError, ChatServiceResult},
    ports::{BotChatPort, InteractionStore, LiveAgentPort},
};

type FetchKey = (BotChatId, LiveAgentConversationId);

/// Launched live-agent fetches. `None` marks a fetch that is in flight or
/// returned nothing; `Some` holds the conversation it delivered.
type FetchLedger = HashMap<FetchKey, Option<LiveAgentConversation>>;

/// Service that keeps one combined transcript in step with the active
/// support interaction.
///
/// Provider failures never surface from this service: a failed or empty
/// fetch simply produces no transition.
///
/// # Example
///
/// ```ignore
/// use support_chat::chat::services::CombinedChatService;
///
/// let service = CombinedChatService::new(
///     interaction_store,
///     bot_chats,
///     live_agent,
///     CombinedChatConfig::default(),
/// );
///
/// let mut updates = service.subscribe();
/// let chat = service.refresh().await?;
/// ```
#[derive(Clone)]
pub struct CombinedChatService<S, B, L>
where
    S: InteractionStore,
    B: BotChatPort,
    L: LiveAgentPort,
{
    interaction_store: Arc<S>,
    bot_chats: Arc<B>,
    live_agent: Arc<L>,
    config: CombinedChatConfig,
    state: Arc<watch::Sender<Chat>>,
    ledger: Arc<Mutex<FetchLedger>>,
}

impl<S, B, L> CombinedChatService<S, B, L>
where
    S: InteractionStore,
    B: BotChatPort,
    L: LiveAgentPort,
{
    /// Creates a new service holding the empty chat.
    #[must_use]
    pub fn new(
        interaction_store: Arc<S>,
        bot_chats: Arc<B>,
        live_agent: Arc<L>,
        config: CombinedChatConfig,
    ) -> Self {
        let (state, _) = watch::channel(Chat::empty());
        Self {
            interaction_store,
            bot_chats,
            live_agent,
            config,
            state: Arc::new(state),
            ledger: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Returns the engine configuration.
    #[must_use]
    pub const fn config(&self) -> CombinedChatConfig {
        self.config
    }

    /// Returns the current combined chat.
    #[must_use]
    pub fn main_chat_state(&self) -> Chat {
        self.state.borrow().clone()
    }

    /// Subscribes to chat replacements.
    ///
    /// The receiver observes whole chats only; every replacement is published
    /// atomically.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Chat> {
        self.state.subscribe()
    }

    /// Overwrites the chat directly, bypassing the transition rule.
    pub fn set_main_chat_state(&self, chat: Chat) {
        self.state.send_replace(chat);
    }

    /// Overwrites the chat with a value derived from the previous one.
    pub fn update_main_chat_state<F>(&self, update: F)
    where
        F: FnOnce(&Chat) -> Chat,
    {
        self.state.send_modify(|chat| *chat = update(chat));
    }

    /// Starts over with an empty chat and forgets which live-agent
    /// conversations were already fetched, along with their cached content.
    ///
    /// # Errors
    ///
    /// Returns [`ChatServiceError::StatePoisoned`] if the fetch ledger lock
    /// was poisoned.
    pub fn reset(&self) -> ChatServiceResult<()> {
        self.ledger_guard()?.clear();
        self.state.send_replace(Chat::empty());
        Ok(())
    }

    /// Runs one input-change cycle and returns the resulting chat.
    ///
    /// # Errors
    ///
    /// Returns [`ChatServiceError::InteractionStore`] if the active
    /// interaction cannot be read, or [`ChatServiceError::StatePoisoned`] if
    /// the fetch ledger lock was poisoned. Provider failures are logged and
    /// absorbed.
    pub async fn refresh(&self) -> ChatServiceResult<Chat> {
        let interaction = self
            .interaction_store
            .current_support_interaction()
            .await?;
        let ids = ResolvedIds::from_interaction(interaction.as_ref());

        if let Some(current) = &interaction {
            if !ids.bot_event {
                tracing::debug!(
                    support_interaction_id = %current.uuid,
                    "no bot event resolved for support interaction"
                );
            } else if ids.bot_chat_id.is_none() {
                tracing::debug!(
                    support_interaction_id = %current.uuid,
                    "bot event carries a non-numeric chat id"
                );
            }
        }

        let bot_chat = match ids.bot_chat_id {
            Some(bot_chat_id) => self.load_bot_chat(bot_chat_id).await,
            None => None,
        };

        let inputs = ChatInputs::new(interaction.as_ref(), self.config.help_center_experience)
            .with_bot_chat(bot_chat.as_ref());

        let mut pending = None;
        self.state.send_if_modified(|chat| match reduce(chat, &inputs) {
            Transition::Unchanged => false,
            Transition::Replace(next) => {
                let changed = *chat != next;
                *chat = next;
                changed
            }
            Transition::FetchLiveAgent(fetch) => {
                pending = Some(fetch);
                false
            }
        });

        match pending {
            Some(fetch) => self.hand_off(fetch).await,
            None => Ok(self.main_chat_state()),
        }
    }

    async fn load_bot_chat(&self, bot_chat_id: BotChatId) -> Option<BotChat> {
        match self.bot_chats.fetch_bot_chat(bot_chat_id).await {
            Ok(Some(bot_chat)) => Some(bot_chat),
            Ok(None) => {
                tracing::debug!(bot_chat_id = %bot_chat_id, "bot chat not available yet");
                None
            }
            Err(err) => {
                tracing::warn!(
                    bot_chat_id = %bot_chat_id,
                    error = %err,
                    "bot chat fetch failed"
                );
                None
            }
        }
    }

    async fn hand_off(&self, fetch: LiveAgentFetch) -> ChatServiceResult<Chat> {
        let key = fetch.key();
        let earlier = {
            let mut ledger = self.ledger_guard()?;
            let earlier = ledger.get(&key).cloned();
            if earlier.is_none() {
                ledger.insert(key.clone(), None);
            }
            earlier
        };

        match earlier {
            Some(Some(conversation)) => {
                tracing::debug!(
                    support_interaction_id = %fetch.support_interaction_id,
                    conversation_id = %fetch.conversation_id,
                    "rebuilding hand-off transcript from fetched conversation"
                );
                return Ok(self.publish(fetch.complete(conversation)));
            }
            Some(None) => {
                tracing::debug!(
                    bot_chat_id = %fetch.chat_id,
                    conversation_id = %fetch.conversation_id,
                    "live-agent conversation already requested"
                );
                return Ok(self.main_chat_state());
            }
            None => {}
        }

        let conversation = match self
            .live_agent
            .fetch_conversation(fetch.chat_id, &fetch.conversation_id)
            .await
        {
            Ok(Some(conversation)) => conversation,
            Ok(None) => {
                tracing::debug!(
                    bot_chat_id = %fetch.chat_id,
                    conversation_id = %fetch.conversation_id,
                    "live-agent conversation not found"
                );
                return Ok(self.main_chat_state());
            }
            Err(err) => {
                tracing::warn!(
                    bot_chat_id = %fetch.chat_id,
                    conversation_id = %fetch.conversation_id,
                    error = %err,
                    "live-agent conversation fetch failed"
                );
                return Ok(self.main_chat_state());
            }
        };

        if !self.is_current(fetch.support_interaction_id).await? {
            tracing::debug!(
                support_interaction_id = %fetch.support_interaction_id,
                conversation_id = %fetch.conversation_id,
                "discarding live-agent conversation for stale support interaction"
            );
            self.ledger_guard()?.remove(&key);
            return Ok(self.main_chat_state());
        }

        self.ledger_guard()?.insert(key, Some(conversation.clone()));
        let chat = fetch.complete(conversation);
        tracing::info!(
            support_interaction_id = %fetch.support_interaction_id,
            bot_chat_id = %fetch.chat_id,
            conversation_id = %fetch.conversation_id,
            messages = chat.messages.len(),
            "support chat handed off to live agent"
        );
        Ok(self.publish(chat))
    }

    fn publish(&self, next: Chat) -> Chat {
        self.state.send_if_modified(|chat| {
            if *chat == next {
                false
            } else {
                *chat = next.clone();
                true
            }
        });
        next
    }

    async fn is_current(&self, interaction_id: SupportInteractionId) -> ChatServiceResult<bool> {
        let current = self
            .interaction_store
            .current_support_interaction()
            .await?;
        Ok(current.is_some_and(|interaction| interaction.uuid == interaction_id))
    }

    fn ledger_guard(&self) -> ChatServiceResult<std::sync::MutexGuard<'_, FetchLedger>> {
        self.ledger
            .lock()
            .map_err(|e| ChatServiceError::StatePoisoned(e.to_string()))
    }
}
