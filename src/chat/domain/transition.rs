//! The pure transition function behind the combined chat.
//!
//! [`reduce`] decides, from the previous chat and one snapshot of inputs,
//! whether the chat is replaced, left alone, or needs a live-agent fetch
//! first. It performs no I/O so it can be exercised without any adapters.

use super::{
    BotChat, BotChatId, Chat, ChatProvider, ChatStatus, LiveAgentConversation,
    LiveAgentConversationId, Message, SupportInteraction, SupportInteractionId,
};

/// Provider ids resolved from an interaction's event log.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResolvedIds {
    /// Whether the interaction carries a non-empty bot event, numeric or not.
    pub bot_event: bool,
    /// First bot chat referenced by the interaction.
    pub bot_chat_id: Option<BotChatId>,
    /// First live-agent conversation referenced by the interaction.
    pub live_agent_conversation_id: Option<LiveAgentConversationId>,
}

impl ResolvedIds {
    /// Resolves both ids from an optional interaction.
    #[must_use]
    pub fn from_interaction(interaction: Option<&SupportInteraction>) -> Self {
        interaction.map_or_else(Self::default, |current| Self {
            bot_event: current.bot_event_id().is_some(),
            bot_chat_id: current.bot_chat_id(),
            live_agent_conversation_id: current.live_agent_conversation_id(),
        })
    }
}

/// One snapshot of everything the transition rule depends on.
#[derive(Debug, Clone, Copy)]
pub struct ChatInputs<'a> {
    /// The active support interaction, if any.
    pub interaction: Option<&'a SupportInteraction>,
    /// Whether live-agent hand-off is honoured.
    pub help_center_experience: bool,
    /// Fetched bot chat; `None` while loading or missing.
    pub bot_chat: Option<&'a BotChat>,
}

impl<'a> ChatInputs<'a> {
    /// Creates inputs with no bot data.
    #[must_use]
    pub const fn new(
        interaction: Option<&'a SupportInteraction>,
        help_center_experience: bool,
    ) -> Self {
        Self {
            interaction,
            help_center_experience,
            bot_chat: None,
        }
    }

    /// Attaches fetched bot data.
    #[must_use]
    pub const fn with_bot_chat(mut self, bot_chat: Option<&'a BotChat>) -> Self {
        self.bot_chat = bot_chat;
        self
    }

    /// Resolves provider ids from the interaction.
    #[must_use]
    pub fn resolve(&self) -> ResolvedIds {
        ResolvedIds::from_interaction(self.interaction)
    }
}

/// A live-agent fetch requested by the transition rule.
///
/// Carries the interaction id active when it was requested so that a result
/// arriving after the user switched interactions can be discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiveAgentFetch {
    /// Bot chat id the live-agent conversation is keyed under.
    pub chat_id: BotChatId,
    /// Live-agent conversation to fetch.
    pub conversation_id: LiveAgentConversationId,
    /// Interaction active when the fetch was requested.
    pub support_interaction_id: SupportInteractionId,
    /// Bot chat whose messages precede the hand-off.
    pub bot_chat: BotChat,
}

impl LiveAgentFetch {
    /// Returns the key used to deduplicate fetches.
    #[must_use]
    pub fn key(&self) -> (BotChatId, LiveAgentConversationId) {
        (self.chat_id, self.conversation_id.clone())
    }

    /// Builds the handed-off chat from the fetched conversation.
    #[must_use]
    pub fn complete(&self, conversation: LiveAgentConversation) -> Chat {
        merge_live_agent(&self.bot_chat, conversation, self.support_interaction_id)
    }
}

/// Outcome of evaluating the transition rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Keep the previous chat.
    Unchanged,
    /// Replace the chat wholesale.
    Replace(Chat),
    /// Fetch the live-agent conversation, then merge it.
    FetchLiveAgent(LiveAgentFetch),
}

impl Transition {
    /// Applies a transition that needs no further I/O.
    ///
    /// Returns `None` for [`Transition::FetchLiveAgent`].
    #[must_use]
    pub fn apply(self, prev: &Chat) -> Option<Chat> {
        match self {
            Self::Unchanged => Some(prev.clone()),
            Self::Replace(chat) => Some(chat),
            Self::FetchLiveAgent(_) => None,
        }
    }
}

/// Evaluates the transition rule.
///
/// Cases are checked in priority order:
///
/// 1. A bot event with no live-agent conversation, or with hand-off disabled,
///    yields a bot-only transcript once bot data is present.
/// 2. A bot event plus a live-agent conversation with hand-off enabled
///    requests a live-agent fetch once bot data is present.
/// 3. Otherwise an active interaction keeps the previous chat, or resets it
///    when the interaction changed, and marks it loaded.
///
/// A bot event whose id is not numeric still selects case 1 or 2; with no
/// bot data to go on, the chat is left unchanged.
///
/// # Examples
///
/// ```
/// use support_chat::chat::domain::{
///     BotChat, BotChatId, Chat, ChatInputs, ChatProvider, InteractionEvent, Message,
///     MessageRole, SupportInteraction, Transition, reduce,
/// };
///
/// let interaction =
///     SupportInteraction::new().with_event(InteractionEvent::bot(BotChatId::new(1)));
/// let bot_chat = BotChat::new(BotChatId::new(1), [Message::new(MessageRole::User, "hi")]);
/// let inputs = ChatInputs::new(Some(&interaction), true).with_bot_chat(Some(&bot_chat));
///
/// let Transition::Replace(chat) = reduce(&Chat::empty(), &inputs) else {
///     panic!("expected a bot-only transcript");
/// };
/// assert_eq!(chat.provider, ChatProvider::Bot);
/// assert_eq!(chat.messages.len(), 1);
/// ```
#[must_use]
pub fn reduce(prev: &Chat, inputs: &ChatInputs<'_>) -> Transition {
    let ids = inputs.resolve();

    match (inputs.interaction, ids.bot_event, ids.live_agent_conversation_id) {
        (Some(interaction), true, conversation_id)
            if conversation_id.is_none() || !inputs.help_center_experience =>
        {
            inputs.bot_chat.map_or(Transition::Unchanged, |bot_chat| {
                Transition::Replace(bot_only(bot_chat, interaction.uuid))
            })
        }
        (Some(interaction), true, Some(conversation_id)) => {
            inputs.bot_chat.map_or(Transition::Unchanged, |bot_chat| {
                Transition::FetchLiveAgent(LiveAgentFetch {
                    chat_id: bot_chat.bot_chat_id,
                    conversation_id,
                    support_interaction_id: interaction.uuid,
                    bot_chat: bot_chat.clone(),
                })
            })
        }
        (Some(interaction), _, _) => Transition::Replace(settle(prev, interaction.uuid)),
        (None, _, _) => Transition::Unchanged,
    }
}

/// Builds a bot-only transcript.
#[must_use]
pub fn bot_only(bot_chat: &BotChat, interaction_id: SupportInteractionId) -> Chat {
    Chat {
        provider: ChatProvider::Bot,
        bot_chat_id: Some(bot_chat.bot_chat_id),
        conversation_id: None,
        support_interaction_id: Some(interaction_id),
        messages: bot_chat.messages.clone(),
        status: ChatStatus::Loaded,
    }
}

/// Builds the handed-off transcript: bot messages, the transfer marker, then
/// the live-agent messages in their given order.
#[must_use]
pub fn merge_live_agent(
    bot_chat: &BotChat,
    conversation: LiveAgentConversation,
    interaction_id: SupportInteractionId,
) -> Chat {
    let LiveAgentConversation { id, messages } = conversation;

    let mut merged = Vec::with_capacity(bot_chat.messages.len() + messages.len() + 1);
    merged.extend(bot_chat.messages.iter().cloned());
    merged.push(Message::transfer_marker());
    merged.extend(messages);

    Chat {
        provider: ChatProvider::LiveAgent,
        bot_chat_id: Some(bot_chat.bot_chat_id),
        conversation_id: Some(id),
        support_interaction_id: Some(interaction_id),
        messages: merged,
        status: ChatStatus::Loaded,
    }
}

/// Keeps the previous chat for the same interaction, or starts over for a
/// different one, and marks it loaded.
fn settle(prev: &Chat, interaction_id: SupportInteractionId) -> Chat {
    let base = if prev.belongs_to(interaction_id) {
        prev.clone()
    } else {
        Chat::empty()
    };

    Chat {
        support_interaction_id: Some(interaction_id),
        status: ChatStatus::Loaded,
        ..base
    }
}
