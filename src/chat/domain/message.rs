//! Transcript messages and the provider conversations that carry them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{BotChatId, LiveAgentConversationId};

/// Content of the synthetic message inserted at a hand-off point.
pub const TRANSFER_MARKER_CONTENT: &str =
    "Your conversation has been transferred to a support agent.";

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageRole {
    /// The end user.
    User,
    /// The support bot.
    Bot,
    /// A business-side system message.
    Business,
    /// A human support agent.
    Agent,
}

/// What a message represents within the transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    /// Ordinary conversational content.
    #[default]
    Message,
    /// Greeting shown when a conversation opens.
    Introduction,
    /// Negative feedback on a bot answer.
    Dislike,
    /// Error notice surfaced inline.
    Error,
    /// Sentinel marking the bot-to-agent hand-off.
    TransferMarker,
}

/// A single transcript entry.
///
/// The merge protocol treats messages as opaque: ordering comes only from
/// position within the transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Author of the message.
    pub role: MessageRole,
    /// Message body.
    pub content: String,
    /// Message kind.
    #[serde(default, rename = "type")]
    pub kind: MessageKind,
    /// When the provider recorded the message, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Identifier in the originating provider's storage, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
}

impl Message {
    /// Creates an ordinary message.
    #[must_use]
    pub fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            kind: MessageKind::Message,
            created_at: None,
            external_id: None,
        }
    }

    /// Sets the message kind.
    #[must_use]
    pub const fn with_kind(mut self, kind: MessageKind) -> Self {
        self.kind = kind;
        self
    }

    /// Sets the provider timestamp.
    #[must_use]
    pub const fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Sets the provider-side identifier.
    #[must_use]
    pub fn with_external_id(mut self, external_id: impl Into<String>) -> Self {
        self.external_id = Some(external_id.into());
        self
    }

    /// Returns the fixed sentinel inserted where the bot hands over to a live
    /// agent.
    ///
    /// # Examples
    ///
    /// ```
    /// use support_chat::chat::domain::Message;
    ///
    /// assert_eq!(Message::transfer_marker(), Message::transfer_marker());
    /// assert!(Message::transfer_marker().is_transfer_marker());
    /// ```
    #[must_use]
    pub fn transfer_marker() -> Self {
        Self::new(MessageRole::Bot, TRANSFER_MARKER_CONTENT).with_kind(MessageKind::TransferMarker)
    }

    /// Returns `true` if this is the hand-off sentinel.
    #[must_use]
    pub fn is_transfer_marker(&self) -> bool {
        self.kind == MessageKind::TransferMarker
    }
}

/// A conversation fetched from the support bot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotChat {
    /// Bot chat identifier.
    pub bot_chat_id: BotChatId,
    /// Messages in chronological order.
    #[serde(default)]
    pub messages: Vec<Message>,
}

impl BotChat {
    /// Creates a bot chat.
    #[must_use]
    pub fn new(bot_chat_id: BotChatId, messages: impl IntoIterator<Item = Message>) -> Self {
        Self {
            bot_chat_id,
            messages: messages.into_iter().collect(),
        }
    }
}

/// A conversation fetched from the live-agent system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiveAgentConversation {
    /// Conversation identifier.
    pub id: LiveAgentConversationId,
    /// Messages in chronological order.
    #[serde(default)]
    pub messages: Vec<Message>,
}

impl LiveAgentConversation {
    /// Creates a live-agent conversation.
    #[must_use]
    pub fn new(id: LiveAgentConversationId, messages: impl IntoIterator<Item = Message>) -> Self {
        Self {
            id,
            messages: messages.into_iter().collect(),
        }
    }
}
