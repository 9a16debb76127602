//! Support interactions and the provider events that link them to
//! conversations.
//!
//! A support interaction is the umbrella session the user sees. Each provider
//! that takes part in it (the support bot, the live-agent desk) appends an
//! event carrying the id of its own conversation.

use serde::{Deserialize, Serialize};

use super::{BotChatId, LiveAgentConversationId, SupportInteractionId};

/// The provider that emitted an interaction event.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EventSource {
    /// The support bot.
    Odie,
    /// The live-agent help desk.
    Zendesk,
    /// Any other provider tag, preserved verbatim.
    Other(String),
}

impl EventSource {
    /// Returns the wire tag for this source.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Odie => "odie",
            Self::Zendesk => "zendesk",
            Self::Other(tag) => tag,
        }
    }
}

impl From<String> for EventSource {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "odie" => Self::Odie,
            "zendesk" => Self::Zendesk,
            _ => Self::Other(tag),
        }
    }
}

impl From<EventSource> for String {
    fn from(source: EventSource) -> Self {
        match source {
            EventSource::Odie => "odie".to_owned(),
            EventSource::Zendesk => "zendesk".to_owned(),
            EventSource::Other(tag) => tag,
        }
    }
}

impl std::fmt::Display for EventSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A provider event recorded against a support interaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionEvent {
    /// The provider that emitted the event.
    pub event_source: EventSource,
    /// Identifier into the provider's own storage.
    pub event_external_id: String,
}

impl InteractionEvent {
    /// Creates a new interaction event.
    #[must_use]
    pub fn new(event_source: EventSource, event_external_id: impl Into<String>) -> Self {
        Self {
            event_source,
            event_external_id: event_external_id.into(),
        }
    }

    /// Creates a support bot event.
    #[must_use]
    pub fn bot(bot_chat_id: BotChatId) -> Self {
        Self::new(EventSource::Odie, bot_chat_id.to_string())
    }

    /// Creates a live-agent event.
    #[must_use]
    pub fn live_agent(conversation_id: &LiveAgentConversationId) -> Self {
        Self::new(EventSource::Zendesk, conversation_id.as_str())
    }
}

/// The umbrella session linking provider conversations via an ordered event
/// log.
///
/// # Examples
///
/// ```
/// use support_chat::chat::domain::{
///     BotChatId, InteractionEvent, LiveAgentConversationId, SupportInteraction,
/// };
///
/// let interaction = SupportInteraction::new()
///     .with_event(InteractionEvent::bot(BotChatId::new(7)))
///     .with_event(InteractionEvent::live_agent(&LiveAgentConversationId::new("c1")));
///
/// assert_eq!(interaction.bot_chat_id(), Some(BotChatId::new(7)));
/// assert_eq!(
///     interaction.live_agent_conversation_id(),
///     Some(LiveAgentConversationId::new("c1")),
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportInteraction {
    /// Interaction identifier.
    pub uuid: SupportInteractionId,
    /// Provider events in the order they were recorded.
    #[serde(default)]
    pub events: Vec<InteractionEvent>,
}

impl SupportInteraction {
    /// Creates an interaction with a fresh id and no events.
    #[must_use]
    pub fn new() -> Self {
        Self::with_id(SupportInteractionId::new())
    }

    /// Creates an interaction with the given id and no events.
    #[must_use]
    pub const fn with_id(uuid: SupportInteractionId) -> Self {
        Self {
            uuid,
            events: Vec::new(),
        }
    }

    /// Appends an event to the log.
    #[must_use]
    pub fn with_event(mut self, event: InteractionEvent) -> Self {
        self.events.push(event);
        self
    }

    /// Returns the external id of the first event emitted by `source`.
    #[must_use]
    pub fn first_external_id(&self, source: &EventSource) -> Option<&str> {
        self.events
            .iter()
            .find(|event| &event.event_source == source)
            .map(|event| event.event_external_id.as_str())
    }

    /// Returns the external id of the first bot event, if it is non-empty.
    ///
    /// A present id that is not numeric still counts as a bot event; it just
    /// names no bot chat that can be fetched.
    #[must_use]
    pub fn bot_event_id(&self) -> Option<&str> {
        self.first_external_id(&EventSource::Odie)
            .filter(|id| !id.is_empty())
    }

    /// Resolves the current bot chat id.
    ///
    /// Only the first bot event counts. An external id that is not numeric
    /// resolves to no id.
    #[must_use]
    pub fn bot_chat_id(&self) -> Option<BotChatId> {
        self.bot_event_id().and_then(BotChatId::parse)
    }

    /// Resolves the current live-agent conversation id.
    ///
    /// Only the first live-agent event counts. An empty id is absent; any
    /// other id, whitespace included, is used as given.
    #[must_use]
    pub fn live_agent_conversation_id(&self) -> Option<LiveAgentConversationId> {
        self.first_external_id(&EventSource::Zendesk)
            .filter(|id| !id.is_empty())
            .map(LiveAgentConversationId::new)
    }
}

impl Default for SupportInteraction {
    fn default() -> Self {
        Self::new()
    }
}
