//! The combined chat value exposed to consumers.

use serde::{Deserialize, Serialize};

use super::{BotChatId, LiveAgentConversationId, Message, SupportInteractionId};

/// Which system currently owns the transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ChatProvider {
    /// The support bot.
    #[default]
    #[serde(rename = "odie")]
    Bot,
    /// A live agent in the help desk.
    #[serde(rename = "zendesk")]
    LiveAgent,
}

impl ChatProvider {
    /// Returns the provider as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Bot => "odie",
            Self::LiveAgent => "zendesk",
        }
    }
}

impl std::fmt::Display for ChatProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Load status of a combined chat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatStatus {
    /// Nothing has been loaded yet.
    #[default]
    Empty,
    /// A load is in flight.
    Loading,
    /// The chat reflects the current interaction.
    Loaded,
}

impl ChatStatus {
    /// Returns the status as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Loading => "loading",
            Self::Loaded => "loaded",
        }
    }
}

impl std::fmt::Display for ChatStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an invalid chat status string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseChatStatusError(String);

impl std::fmt::Display for ParseChatStatusError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid chat status: '{}'", self.0)
    }
}

impl std::error::Error for ParseChatStatusError {}

impl TryFrom<&str> for ChatStatus {
    type Error = ParseChatStatusError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "empty" => Ok(Self::Empty),
            "loading" => Ok(Self::Loading),
            "loaded" => Ok(Self::Loaded),
            _ => Err(ParseChatStatusError(s.to_owned())),
        }
    }
}

/// One coherent transcript built from the bot and live-agent sources.
///
/// Chats are replaced wholesale; consumers never observe a partially updated
/// value.
///
/// # Examples
///
/// ```
/// use support_chat::chat::domain::{Chat, ChatProvider, ChatStatus};
///
/// let chat = Chat::empty();
/// assert_eq!(chat.provider, ChatProvider::Bot);
/// assert_eq!(chat.status, ChatStatus::Empty);
/// assert!(chat.messages.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chat {
    /// System that owns the transcript.
    pub provider: ChatProvider,
    /// Bot chat the transcript was built from.
    #[serde(default, rename = "odieId", skip_serializing_if = "Option::is_none")]
    pub bot_chat_id: Option<BotChatId>,
    /// Live-agent conversation, once one is attached.
    pub conversation_id: Option<LiveAgentConversationId>,
    /// Interaction this chat belongs to.
    pub support_interaction_id: Option<SupportInteractionId>,
    /// Messages in chronological order.
    #[serde(default)]
    pub messages: Vec<Message>,
    /// Load status.
    pub status: ChatStatus,
}

impl Chat {
    /// Returns the empty chat used before anything is loaded.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            provider: ChatProvider::Bot,
            bot_chat_id: None,
            conversation_id: None,
            support_interaction_id: None,
            messages: Vec::new(),
            status: ChatStatus::Empty,
        }
    }

    /// Returns `true` if this chat was built for `interaction_id`.
    #[must_use]
    pub fn belongs_to(&self, interaction_id: SupportInteractionId) -> bool {
        self.support_interaction_id == Some(interaction_id)
    }

    /// Returns `true` if a live agent owns the transcript.
    #[must_use]
    pub const fn is_handed_off(&self) -> bool {
        matches!(self.provider, ChatProvider::LiveAgent)
    }
}
