//! Identifier newtypes for support interactions and provider conversations.
//!
//! Each provider keys its conversations differently: support interactions use
//! UUIDs, the support bot uses numeric chat ids, and the live-agent system uses
//! opaque strings. Wrapping them keeps the three from being mixed up.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a support interaction.
///
/// # Examples
///
/// ```
/// use support_chat::chat::domain::SupportInteractionId;
///
/// let id = SupportInteractionId::new();
/// assert!(!id.as_ref().is_nil());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SupportInteractionId(Uuid);

impl SupportInteractionId {
    /// Creates a new random support interaction identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a support interaction identifier from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID value.
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

/// Note: generates a new random UUID on each call.
impl Default for SupportInteractionId {
    fn default() -> Self {
        Self::new()
    }
}

impl AsRef<Uuid> for SupportInteractionId {
    fn as_ref(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for SupportInteractionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Numeric identifier of a support bot chat.
///
/// # Examples
///
/// ```
/// use support_chat::chat::domain::BotChatId;
///
/// assert_eq!(BotChatId::parse("42"), Some(BotChatId::new(42)));
/// assert_eq!(BotChatId::parse("not-a-number"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BotChatId(u64);

impl BotChatId {
    /// Creates a bot chat identifier.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Parses an external event id into a bot chat identifier.
    ///
    /// Surrounding whitespace is ignored. Returns `None` when the value is
    /// not an unsigned integer.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        raw.trim().parse::<u64>().ok().map(Self)
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for BotChatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a conversation in the live-agent system.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LiveAgentConversationId(String);

impl LiveAgentConversationId {
    /// Creates a live-agent conversation identifier.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for LiveAgentConversationId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LiveAgentConversationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
