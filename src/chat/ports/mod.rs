//! Port trait definitions for the combined chat.
//!
//! Ports define the abstract interfaces the engine requires from the outside
//! world: the interaction store and the two conversation providers. Adapters
//! implement these ports.

pub mod bot_chat;
pub mod interaction_store;
pub mod live_agent;

pub use bot_chat::{BotChatError, BotChatPort, BotChatResult};
pub use interaction_store::{InteractionStore, InteractionStoreError, InteractionStoreResult};
pub use live_agent::{LiveAgentError, LiveAgentPort, LiveAgentResult};
