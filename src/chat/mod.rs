//! Combined support chat: merging a bot transcript with a live-agent hand-off.
//!
//! A support interaction can reference a support bot chat and, once the user
//! is handed over, a live-agent conversation. This module keeps exactly one
//! coherent transcript for the active interaction.
//!
//! # Architecture
//!
//! - **Domain**: Pure types and the [`domain::reduce`] transition function
//! - **Ports**: Async traits for the interaction store and both providers
//! - **Adapters**: In-memory implementations ([`adapters::memory`])
//! - **Services**: [`services::CombinedChatService`], the effectful glue
//!
//! # Example
//!
//! ```
//! use support_chat::chat::domain::{
//!     BotChat, BotChatId, Chat, ChatInputs, InteractionEvent, LiveAgentConversation,
//!     LiveAgentConversationId, Message, MessageRole, SupportInteraction, Transition, reduce,
//! };
//!
//! let conversation_id = LiveAgentConversationId::new("c1");
//! let interaction = SupportInteraction::new()
//!     .with_event(InteractionEvent::bot(BotChatId::new(1)))
//!     .with_event(InteractionEvent::live_agent(&conversation_id));
//! let bot_chat = BotChat::new(BotChatId::new(1), [Message::new(MessageRole::User, "help")]);
//!
//! let inputs = ChatInputs::new(Some(&interaction), true).with_bot_chat(Some(&bot_chat));
//! let Transition::FetchLiveAgent(fetch) = reduce(&Chat::empty(), &inputs) else {
//!     panic!("expected a hand-off");
//! };
//!
//! let chat = fetch.complete(LiveAgentConversation::new(
//!     conversation_id,
//!     [Message::new(MessageRole::Agent, "hi, I'm here")],
//! ));
//! assert_eq!(chat.messages.len(), 3);
//! ```

pub mod adapters;
pub mod config;
pub mod domain;
pub mod error;
pub mod ports;
pub mod services;
