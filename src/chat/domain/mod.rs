//! Domain types for the combined support chat.
//!
//! This module contains pure domain types with no infrastructure dependencies,
//! plus the transition function that merges bot and live-agent transcripts.

mod chat;
mod ids;
mod interaction;
mod message;
mod transition;

pub use chat::{Chat, ChatProvider, ChatStatus, ParseChatStatusError};
pub use ids::{BotChatId, LiveAgentConversationId, SupportInteractionId};
pub use interaction::{EventSource, InteractionEvent, SupportInteraction};
pub use message::{
    BotChat, LiveAgentConversation, Message, MessageKind, MessageRole, TRANSFER_MARKER_CONTENT,
};
pub use transition::{
    ChatInputs, LiveAgentFetch, ResolvedIds, Transition, bot_only, merge_live_agent, reduce,
};
