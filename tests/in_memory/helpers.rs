//! Shared harness for in-memory combined chat integration tests.

use std::sync::Arc;

use rstest::fixture;
use support_chat::chat::{
    adapters::memory::{InMemoryBotChatAdapter, InMemoryInteractionStore, InMemoryLiveAgentAdapter},
    config::CombinedChatConfig,
    domain::{
        BotChat, BotChatId, InteractionEvent, LiveAgentConversation, LiveAgentConversationId,
        Message, MessageRole, SupportInteraction,
    },
    services::CombinedChatService,
};
use tokio::runtime::Runtime;

pub type TestResult<T = ()> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

pub type InMemoryChatService =
    CombinedChatService<InMemoryInteractionStore, InMemoryBotChatAdapter, InMemoryLiveAgentAdapter>;

/// Provides a tokio runtime for async operations in tests.
#[fixture]
pub fn runtime() -> TestResult<Runtime> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    Ok(runtime)
}

/// All adapters plus a service wired to them.
pub struct ChatTestHarness {
    pub interactions: InMemoryInteractionStore,
    pub bot_chats: Arc<InMemoryBotChatAdapter>,
    pub live_agent: Arc<InMemoryLiveAgentAdapter>,
    pub service: InMemoryChatService,
}

impl ChatTestHarness {
    pub fn new(config: CombinedChatConfig) -> Self {
        let interactions = InMemoryInteractionStore::new();
        let bot_chats = Arc::new(InMemoryBotChatAdapter::new());
        let live_agent = Arc::new(InMemoryLiveAgentAdapter::new());

        let service = CombinedChatService::new(
            Arc::new(interactions.clone()),
            Arc::clone(&bot_chats),
            Arc::clone(&live_agent),
            config,
        );

        Self {
            interactions,
            bot_chats,
            live_agent,
            service,
        }
    }
}

#[fixture]
pub fn harness() -> ChatTestHarness {
    ChatTestHarness::new(CombinedChatConfig::default())
}

#[fixture]
pub fn legacy_harness() -> ChatTestHarness {
    ChatTestHarness::new(CombinedChatConfig::legacy())
}

pub const BOT_CHAT: BotChatId = BotChatId::new(101);

pub fn conversation_id() -> LiveAgentConversationId {
    LiveAgentConversationId::new("c1")
}

pub fn msg(role: MessageRole, content: &str) -> Message {
    Message::new(role, content)
}

/// An interaction that only references the bot chat.
pub fn bot_interaction() -> SupportInteraction {
    SupportInteraction::new().with_event(InteractionEvent::bot(BOT_CHAT))
}

/// An interaction that references the bot chat and a live-agent conversation.
pub fn handed_off_interaction() -> SupportInteraction {
    bot_interaction().with_event(InteractionEvent::live_agent(&conversation_id()))
}

pub fn seed_bot_chat(harness: &ChatTestHarness, messages: &[Message]) -> TestResult {
    harness
        .bot_chats
        .insert(BotChat::new(BOT_CHAT, messages.iter().cloned()))?;
    Ok(())
}

pub fn seed_conversation(harness: &ChatTestHarness, messages: &[Message]) -> TestResult {
    harness.live_agent.insert(LiveAgentConversation::new(
        conversation_id(),
        messages.iter().cloned(),
    ))?;
    Ok(())
}
