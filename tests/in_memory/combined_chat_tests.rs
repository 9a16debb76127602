//! End-to-end transcript tests against the in-memory adapters.

use super::helpers::{
    BOT_CHAT, ChatTestHarness, TestResult, bot_interaction, conversation_id,
    handed_off_interaction, harness, legacy_harness, msg, runtime, seed_bot_chat,
    seed_conversation,
};
use rstest::rstest;
use support_chat::chat::domain::{
    BotChat, BotChatId, Chat, ChatProvider, ChatStatus, InteractionEvent, Message, MessageRole,
    SupportInteraction,
};
use tokio::runtime::Runtime;

#[rstest]
fn bot_only_transcript(runtime: TestResult<Runtime>, harness: ChatTestHarness) -> TestResult {
    let interaction = bot_interaction();
    harness.interactions.set_current(interaction.clone())?;
    let messages = [msg(MessageRole::User, "m1"), msg(MessageRole::Bot, "m2")];
    seed_bot_chat(&harness, &messages)?;

    let chat = runtime?.block_on(harness.service.refresh())?;

    assert_eq!(chat.provider, ChatProvider::Bot);
    assert_eq!(chat.conversation_id, None);
    assert_eq!(chat.support_interaction_id, Some(interaction.uuid));
    assert_eq!(chat.messages, messages.to_vec());
    assert_eq!(chat.status, ChatStatus::Loaded);
    assert!(harness.live_agent.fetch_log()?.is_empty());
    Ok(())
}

#[rstest]
fn hand_off_transcript(runtime: TestResult<Runtime>, harness: ChatTestHarness) -> TestResult {
    harness.interactions.set_current(handed_off_interaction())?;
    seed_bot_chat(&harness, &[msg(MessageRole::User, "m1")])?;
    seed_conversation(
        &harness,
        &[msg(MessageRole::Agent, "m2"), msg(MessageRole::User, "m3")],
    )?;

    let chat = runtime?.block_on(harness.service.refresh())?;

    assert_eq!(chat.provider, ChatProvider::LiveAgent);
    assert_eq!(chat.conversation_id, Some(conversation_id()));
    assert_eq!(
        chat.messages,
        vec![
            msg(MessageRole::User, "m1"),
            Message::transfer_marker(),
            msg(MessageRole::Agent, "m2"),
            msg(MessageRole::User, "m3"),
        ]
    );
    assert!(chat.is_handed_off());
    assert_eq!(
        harness.live_agent.fetch_log()?,
        vec![(BOT_CHAT, conversation_id())]
    );
    Ok(())
}

#[rstest]
fn disabled_hand_off_stays_bot_only(
    runtime: TestResult<Runtime>,
    legacy_harness: ChatTestHarness,
) -> TestResult {
    let harness = legacy_harness;
    harness.interactions.set_current(handed_off_interaction())?;
    seed_bot_chat(&harness, &[msg(MessageRole::User, "m1")])?;
    seed_conversation(&harness, &[msg(MessageRole::Agent, "m2")])?;

    let chat = runtime?.block_on(harness.service.refresh())?;

    assert_eq!(chat.provider, ChatProvider::Bot);
    assert_eq!(chat.messages, vec![msg(MessageRole::User, "m1")]);
    assert!(harness.live_agent.fetch_log()?.is_empty());
    Ok(())
}

#[rstest]
fn missing_conversation_leaves_chat_unchanged(
    runtime: TestResult<Runtime>,
    harness: ChatTestHarness,
) -> TestResult {
    harness.interactions.set_current(handed_off_interaction())?;
    seed_bot_chat(&harness, &[msg(MessageRole::User, "m1")])?;

    let chat = runtime?.block_on(harness.service.refresh())?;

    assert_eq!(chat, Chat::empty());
    assert_eq!(harness.live_agent.fetch_log()?.len(), 1);
    Ok(())
}

#[rstest]
fn failing_live_agent_is_absorbed(
    runtime: TestResult<Runtime>,
    harness: ChatTestHarness,
) -> TestResult {
    harness.interactions.set_current(handed_off_interaction())?;
    seed_bot_chat(&harness, &[msg(MessageRole::User, "m1")])?;
    harness.live_agent.fail_with("help desk offline")?;

    let chat = runtime?.block_on(harness.service.refresh())?;

    assert_eq!(chat, Chat::empty());
    Ok(())
}

#[rstest]
fn switching_interaction_clears_messages(
    runtime: TestResult<Runtime>,
    harness: ChatTestHarness,
) -> TestResult {
    let runtime = runtime?;
    harness.interactions.set_current(bot_interaction())?;
    seed_bot_chat(&harness, &[msg(MessageRole::User, "m1")])?;
    let first = runtime.block_on(harness.service.refresh())?;
    assert_eq!(first.messages.len(), 1);

    let next = SupportInteraction::new();
    harness.interactions.set_current(next.clone())?;
    let chat = runtime.block_on(harness.service.refresh())?;

    assert!(chat.messages.is_empty());
    assert_eq!(chat.support_interaction_id, Some(next.uuid));
    assert_eq!(chat.status, ChatStatus::Loaded);
    Ok(())
}

#[rstest]
fn repeated_refresh_is_idempotent(
    runtime: TestResult<Runtime>,
    harness: ChatTestHarness,
) -> TestResult {
    let runtime = runtime?;
    harness.interactions.set_current(handed_off_interaction())?;
    seed_bot_chat(&harness, &[msg(MessageRole::User, "m1")])?;
    seed_conversation(&harness, &[msg(MessageRole::Agent, "m2")])?;

    let first = runtime.block_on(harness.service.refresh())?;
    let second = runtime.block_on(harness.service.refresh())?;

    assert_eq!(first, second);
    assert_eq!(harness.live_agent.fetch_log()?.len(), 1);
    assert_eq!(harness.bot_chats.fetch_count()?, 2);
    Ok(())
}

#[rstest]
fn cleared_interaction_keeps_last_chat(
    runtime: TestResult<Runtime>,
    harness: ChatTestHarness,
) -> TestResult {
    let runtime = runtime?;
    harness.interactions.set_current(bot_interaction())?;
    seed_bot_chat(&harness, &[msg(MessageRole::User, "m1")])?;
    let loaded = runtime.block_on(harness.service.refresh())?;

    harness.interactions.clear()?;
    let chat = runtime.block_on(harness.service.refresh())?;

    assert_eq!(chat, loaded);
    Ok(())
}

#[rstest]
fn returning_to_handed_off_interaction_restores_its_transcript(
    runtime: TestResult<Runtime>,
    harness: ChatTestHarness,
) -> TestResult {
    let runtime = runtime?;
    seed_bot_chat(&harness, &[msg(MessageRole::User, "a-bot")])?;
    seed_conversation(&harness, &[msg(MessageRole::Agent, "a-agent")])?;
    let other_bot_chat = BotChatId::new(202);
    harness.bot_chats.insert(BotChat::new(
        other_bot_chat,
        [msg(MessageRole::User, "b-bot")],
    ))?;

    let a = handed_off_interaction();
    let b = SupportInteraction::new().with_event(InteractionEvent::bot(other_bot_chat));

    harness.interactions.set_current(a.clone())?;
    let handed_off = runtime.block_on(harness.service.refresh())?;
    harness.interactions.set_current(b.clone())?;
    let elsewhere = runtime.block_on(harness.service.refresh())?;
    harness.interactions.set_current(a.clone())?;
    let back = runtime.block_on(harness.service.refresh())?;

    assert_eq!(elsewhere.support_interaction_id, Some(b.uuid));
    assert_eq!(elsewhere.messages, vec![msg(MessageRole::User, "b-bot")]);
    assert_eq!(back.support_interaction_id, Some(a.uuid));
    assert_eq!(back.provider, ChatProvider::LiveAgent);
    assert_eq!(back, handed_off);
    assert_eq!(harness.live_agent.fetch_log()?.len(), 1);
    Ok(())
}
