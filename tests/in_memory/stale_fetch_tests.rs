//! A live-agent result that arrives after the user moved to another
//! interaction must not leak into the new interaction's chat.

use std::sync::Arc;

use super::helpers::{
    TestResult, conversation_id, handed_off_interaction, msg, runtime, seed_bot_chat,
    ChatTestHarness,
};
use async_trait::async_trait;
use rstest::rstest;
use support_chat::chat::{
    adapters::memory::{InMemoryBotChatAdapter, InMemoryInteractionStore},
    config::CombinedChatConfig,
    domain::{
        BotChatId, LiveAgentConversation, LiveAgentConversationId, MessageRole,
        SupportInteraction,
    },
    ports::{LiveAgentPort, LiveAgentResult},
    services::CombinedChatService,
};
use tokio::runtime::Runtime;

/// Live-agent port that switches the active interaction while the request is
/// in flight.
struct SwitchingLiveAgent {
    interactions: InMemoryInteractionStore,
    switch_to: SupportInteraction,
}

#[async_trait]
impl LiveAgentPort for SwitchingLiveAgent {
    async fn fetch_conversation(
        &self,
        _chat_id: BotChatId,
        conversation_id: &LiveAgentConversationId,
    ) -> LiveAgentResult<Option<LiveAgentConversation>> {
        self.interactions
            .set_current(self.switch_to.clone())
            .map_err(support_chat::chat::ports::LiveAgentError::backend)?;
        Ok(Some(LiveAgentConversation::new(
            conversation_id.clone(),
            [msg(MessageRole::Agent, "late reply")],
        )))
    }
}

#[rstest]
fn late_conversation_for_previous_interaction_is_discarded(
    runtime: TestResult<Runtime>,
) -> TestResult {
    let seeding = ChatTestHarness::new(CombinedChatConfig::default());
    seed_bot_chat(&seeding, &[msg(MessageRole::User, "m1")])?;

    let interactions = InMemoryInteractionStore::with_current(handed_off_interaction());
    let next = SupportInteraction::new();
    let live_agent = SwitchingLiveAgent {
        interactions: interactions.clone(),
        switch_to: next.clone(),
    };
    let service = CombinedChatService::new(
        Arc::new(interactions),
        Arc::<InMemoryBotChatAdapter>::clone(&seeding.bot_chats),
        Arc::new(live_agent),
        CombinedChatConfig::default(),
    );

    let runtime = runtime?;
    let discarded = runtime.block_on(service.refresh())?;
    assert!(discarded.messages.is_empty());
    assert_eq!(discarded.conversation_id, None);

    let settled = runtime.block_on(service.refresh())?;
    assert!(settled.messages.is_empty());
    assert_eq!(settled.support_interaction_id, Some(next.uuid));
    assert_ne!(settled.conversation_id, Some(conversation_id()));
    Ok(())
}
