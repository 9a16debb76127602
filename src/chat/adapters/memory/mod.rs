//! In-memory adapter implementations for testing.
//!
//! These adapters provide simple, thread-safe implementations suitable for
//! unit testing without network dependencies.

mod bot_chat;
mod interaction_store;
mod live_agent;

pub use bot_chat::InMemoryBotChatAdapter;
pub use interaction_store::InMemoryInteractionStore;
pub use live_agent::InMemoryLiveAgentAdapter;
