//! Assistant engine behaviour against mock LLM clients.

mod common;

use common::mocks::{MockLLMClient, MockLLMFactory};
use omniroute::assistant::{self, Assistant, SendOutcome};
use omniroute::domain::{prompt, Ignored, Role};
use omniroute::types::AppError;
use rstest::rstest;
use std::sync::Arc;
use std::time::Duration;

fn assistant_with(client: MockLLMClient, role: Role) -> (Arc<Assistant>, Arc<MockLLMFactory>) {
    omniroute::utils::logging::init_test();
    let factory = Arc::new(MockLLMFactory::new(client));
    let assistant = Arc::new(Assistant::new(role, factory.clone()));
    (assistant, factory)
}

/// Spin until the assistant reports a pending request.
async fn wait_until_loading(assistant: &Assistant) {
    for _ in 0..200 {
        if assistant.is_loading() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    panic!("assistant never started loading");
}

#[rstest]
#[case(Role::Landing)]
#[case(Role::Customer)]
#[case(Role::Driver)]
#[case(Role::Partner)]
#[case(Role::Dispatcher)]
#[tokio::test]
async fn test_new_conversation_holds_only_the_greeting(#[case] role: Role) {
    let (assistant, _) = assistant_with(MockLLMClient::new("unused"), role);

    let snapshot = assistant.snapshot();

    assert_eq!(snapshot.messages.len(), 1);
    assert_eq!(snapshot.messages[0].role, "assistant");
    assert_eq!(snapshot.messages[0].content, prompt::greeting(role));
    assert!(!snapshot.loading);
    assert!(!snapshot.open);
}

#[tokio::test]
async fn test_driver_eta_scenario() {
    let client = MockLLMClient::new("Stop 2 is expected at 14:05.");
    let (assistant, _) = assistant_with(client.clone(), Role::Driver);

    let outcome = assistant.send("What is the ETA for stop 2?").await;

    assert_eq!(outcome, SendOutcome::Replied);
    let snapshot = assistant.snapshot();
    let contents: Vec<&str> = snapshot.messages.iter().map(|m| m.content.as_str()).collect();
    assert_eq!(
        contents,
        vec![
            prompt::greeting(Role::Driver).as_str(),
            "What is the ETA for stop 2?",
            "Stop 2 is expected at 14:05.",
        ]
    );
    assert!(!snapshot.loading);

    let calls = client.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, prompt::system_instruction(Role::Driver));
    assert_eq!(calls[0].1, "What is the ETA for stop 2?");
}

#[tokio::test]
async fn test_prompt_is_trimmed() {
    let client = MockLLMClient::new("ok");
    let (assistant, _) = assistant_with(client.clone(), Role::Partner);

    assistant.send("   fleet status?  ").await;

    assert_eq!(client.calls()[0].1, "fleet status?");
    assert_eq!(assistant.snapshot().messages[1].content, "fleet status?");
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("\n\t")]
#[tokio::test]
async fn test_empty_send_is_ignored(#[case] text: &str) {
    let client = MockLLMClient::new("unused");
    let (assistant, factory) = assistant_with(client.clone(), Role::Customer);

    let outcome = assistant.send(text).await;

    assert_eq!(outcome, SendOutcome::Ignored(Ignored::Empty));
    assert_eq!(assistant.snapshot().messages.len(), 1);
    assert_eq!(factory.created(), 0);
    assert_eq!(client.call_count(), 0);
}

#[tokio::test]
async fn test_empty_reply_uses_fallback() {
    let (assistant, _) = assistant_with(MockLLMClient::new("  "), Role::Dispatcher);

    assistant.send("Any alerts?").await;

    let snapshot = assistant.snapshot();
    assert_eq!(snapshot.messages.len(), 3);
    assert_eq!(snapshot.messages[2].content, prompt::EMPTY_REPLY_FALLBACK);
}

#[tokio::test]
async fn test_provider_failure_becomes_error_message() {
    let (assistant, _) = assistant_with(MockLLMClient::failing(), Role::Customer);

    let outcome = assistant.send("Where is CHN-001?").await;

    assert_eq!(outcome, SendOutcome::Replied);
    let snapshot = assistant.snapshot();
    assert_eq!(snapshot.messages.len(), 3);
    assert_eq!(
        snapshot.messages[2].content,
        "Error: Mock LLM failure. Please check the server logs for more details."
    );
    assert!(!snapshot.loading);
}

#[tokio::test]
async fn test_missing_key_is_reported_inline() {
    let factory = Arc::new(MockLLMFactory::missing_key());
    let assistant = Assistant::new(Role::Driver, factory.clone());

    let outcome = assistant.send("hello").await;

    assert_eq!(outcome, SendOutcome::Replied);
    let snapshot = assistant.snapshot();
    assert_eq!(snapshot.messages.len(), 3);
    assert!(snapshot.messages[2].content.starts_with("Error: "));
    assert!(snapshot.messages[2]
        .content
        .contains(prompt::MISSING_KEY_MARKER));
    assert!(!snapshot.loading);
}

#[tokio::test]
async fn test_second_send_while_in_flight_is_busy() {
    let (client, gate) = MockLLMClient::gated("first reply");
    let (assistant, _) = assistant_with(client.clone(), Role::Driver);

    let first = tokio::spawn({
        let assistant = Arc::clone(&assistant);
        async move { assistant.send("first").await }
    });
    wait_until_loading(&assistant).await;

    let second = assistant.send("second").await;
    assert_eq!(second, SendOutcome::Ignored(Ignored::Busy));
    // user message for "first" only
    assert_eq!(assistant.snapshot().messages.len(), 2);

    gate.notify_one();
    assert_eq!(first.await.unwrap(), SendOutcome::Replied);

    let snapshot = assistant.snapshot();
    assert_eq!(snapshot.messages.len(), 3);
    assert_eq!(snapshot.messages[2].content, "first reply");
    assert_eq!(client.call_count(), 1);
}

#[tokio::test]
async fn test_role_change_mid_flight_discards_stale_reply() {
    let (client, gate) = MockLLMClient::gated("customer answer");
    let (assistant, _) = assistant_with(client, Role::Customer);

    let pending = tokio::spawn({
        let assistant = Arc::clone(&assistant);
        async move { assistant.send("Where is my parcel?").await }
    });
    wait_until_loading(&assistant).await;

    assistant.set_role(Role::Dispatcher);
    let during = assistant.snapshot();
    assert_eq!(during.role, "dispatcher");
    assert_eq!(during.messages.len(), 1);
    assert!(during.loading);

    gate.notify_one();
    assert_eq!(pending.await.unwrap(), SendOutcome::Discarded);

    let after = assistant.snapshot();
    assert_eq!(after.messages.len(), 1);
    assert_eq!(after.messages[0].content, prompt::greeting(Role::Dispatcher));
    assert!(!after.loading);
}

#[tokio::test]
async fn test_set_role_mid_conversation_resets_transcript() {
    let (assistant, _) = assistant_with(MockLLMClient::new("ok"), Role::Customer);
    assistant.open();
    assistant.send("Track CHN-001").await;
    assert_eq!(assistant.snapshot().messages.len(), 3);

    assistant.set_role(Role::Dispatcher);

    let snapshot = assistant.snapshot();
    assert_eq!(snapshot.messages.len(), 1);
    assert_eq!(snapshot.messages[0].content, prompt::greeting(Role::Dispatcher));
    assert!(snapshot.open);
}

#[tokio::test]
async fn test_reply_lands_after_caller_goes_away() {
    let (client, gate) = MockLLMClient::gated("Invoice INV-204 is paid.");
    let (assistant, _) = assistant_with(client, Role::Partner);

    let pending = tokio::spawn({
        let assistant = Arc::clone(&assistant);
        async move { assistant.send("Is INV-204 paid?").await }
    });
    wait_until_loading(&assistant).await;

    pending.abort();
    let _ = pending.await;
    assert!(assistant.is_loading());

    gate.notify_one();
    for _ in 0..200 {
        if !assistant.is_loading() {
            break;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }

    let snapshot = assistant.snapshot();
    assert!(!snapshot.loading);
    assert_eq!(snapshot.messages.len(), 3);
    assert_eq!(snapshot.messages[2].role, "assistant");
    assert_eq!(snapshot.messages[2].content, "Invoice INV-204 is paid.");
}

#[tokio::test]
async fn test_stateless_reply() {
    let client = MockLLMClient::new("Cross-docking moves goods straight to outbound.");
    let factory = MockLLMFactory::new(client.clone());

    let reply = assistant::reply(&factory, Role::Partner, " What is cross-docking? ")
        .await
        .unwrap();

    assert_eq!(reply, "Cross-docking moves goods straight to outbound.");
    assert_eq!(client.calls()[0].0, prompt::system_instruction(Role::Partner));
    assert_eq!(client.calls()[0].1, "What is cross-docking?");
}

#[tokio::test]
async fn test_stateless_reply_errors() {
    let factory = MockLLMFactory::new(MockLLMClient::new("unused"));
    assert!(matches!(
        assistant::reply(&factory, Role::Driver, "  ").await,
        Err(AppError::InvalidInput(_))
    ));
    assert_eq!(factory.created(), 0);

    let factory = MockLLMFactory::missing_key();
    assert!(matches!(
        assistant::reply(&factory, Role::Driver, "hi").await,
        Err(AppError::Configuration(_))
    ));

    let factory = MockLLMFactory::new(MockLLMClient::failing());
    assert!(matches!(
        assistant::reply(&factory, Role::Driver, "hi").await,
        Err(AppError::LLM(_))
    ));
}
