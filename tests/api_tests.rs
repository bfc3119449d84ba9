//! HTTP API tests against the full router, with mock LLM clients.

mod common;

use axum::http::{header, HeaderValue, StatusCode};
use axum_test::TestServer;
use common::mocks::{MockLLMClient, MockLLMFactory};
use omniroute::domain::{prompt, Role};
use omniroute::{api, AppState, ConfigManager, OmniRouteConfig};
use rstest::rstest;
use serde_json::{json, Value};
use std::sync::Arc;

// ============= Helpers =============

fn create_test_server_with(factory: MockLLMFactory) -> TestServer {
    let config = Arc::new(ConfigManager::from_config(OmniRouteConfig::default()));
    let state = AppState::new(config, Arc::new(factory));
    TestServer::new(api::build_app(state)).expect("Failed to create test server")
}

fn create_test_server() -> TestServer {
    create_test_server_with(MockLLMFactory::new(MockLLMClient::new(
        "Mock assistant reply",
    )))
}

async fn create_conversation(server: &TestServer, role: &str) -> Value {
    let response = server
        .post("/api/conversations")
        .json(&json!({ "role": role }))
        .await;
    response.assert_status(StatusCode::CREATED);
    response.json()
}

// ============= Catalog =============

#[tokio::test]
async fn test_health() {
    let server = create_test_server();

    let response = server.get("/api/health").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["provider"], "Gemini");
    assert_eq!(body["model"], "mock-model");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_wildcard_cors_origin_allows_any() {
    let config = OmniRouteConfig::parse("[server]\ncors_origins = [\"*\"]\n").unwrap();
    let state = AppState::new(
        Arc::new(ConfigManager::from_config(config)),
        Arc::new(MockLLMFactory::new(MockLLMClient::new("unused"))),
    );
    let server = TestServer::new(api::build_app(state)).expect("Failed to create test server");

    let response = server
        .get("/api/health")
        .add_header(header::ORIGIN, HeaderValue::from_static("https://ops.example.com"))
        .await;

    response.assert_status_ok();
    assert_eq!(response.header(header::ACCESS_CONTROL_ALLOW_ORIGIN), "*");
}

#[tokio::test]
async fn test_list_roles() {
    let server = create_test_server();

    let response = server.get("/api/roles").await;

    response.assert_status_ok();
    let body: Value = response.json();
    let roles: Vec<&str> = body
        .as_array()
        .expect("array")
        .iter()
        .map(|card| card["role"].as_str().unwrap())
        .collect();
    assert_eq!(roles, vec!["customer", "driver", "partner", "dispatcher"]);
    assert_eq!(body[1]["login_title"], Role::Driver.login_title());
}

#[rstest]
#[case("customer", "customer_overview")]
#[case("driver", "driver_dash")]
#[case("partner", "partner_overview")]
#[case("dispatcher", "dispatcher_live")]
#[tokio::test]
async fn test_default_dashboard_is_populated(#[case] role: &str, #[case] kind: &str) {
    let server = create_test_server();

    let response = server.get(&format!("/api/dashboards/{role}")).await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["role"], role);
    assert_eq!(body["active_tab"], body["tabs"][0]);
    assert_eq!(body["panel"]["kind"], kind);
}

#[tokio::test]
async fn test_non_default_tab_is_stub() {
    let server = create_test_server();

    let response = server
        .get("/api/dashboards/dispatcher")
        .add_query_param("tab", "stock")
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["active_tab"], "Stock");
    assert_eq!(body["panel"]["kind"], "not_yet_implemented");
    assert_eq!(body["panel"]["tab"], "Stock");
}

#[tokio::test]
async fn test_dashboard_errors() {
    let server = create_test_server();

    let response = server.get("/api/dashboards/pilot").await;
    response.assert_status_not_found();
    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("pilot"));

    server
        .get("/api/dashboards/driver")
        .add_query_param("tab", "Payroll")
        .await
        .assert_status_not_found();

    server
        .get("/api/dashboards/landing")
        .await
        .assert_status_bad_request();
}

#[tokio::test]
async fn test_openapi_document() {
    let server = create_test_server();

    let response = server.get("/api-docs/openapi.json").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["info"]["title"], "OmniRoute API");
    assert!(body["paths"]["/api/conversations/{id}/messages"].is_object());
}

// ============= Stateless reply =============

#[tokio::test]
async fn test_assistant_reply() {
    let client = MockLLMClient::new("Stop 2 at 14:05");
    let server = create_test_server_with(MockLLMFactory::new(client.clone()));

    let response = server
        .post("/api/assistant/reply")
        .json(&json!({ "role": "driver", "message": "ETA for stop 2?" }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["reply"], "Stop 2 at 14:05");
    assert_eq!(body["model"], "mock-model");
    assert_eq!(client.calls()[0].0, prompt::system_instruction(Role::Driver));
}

#[tokio::test]
async fn test_assistant_reply_rejects_empty_message() {
    let client = MockLLMClient::new("unused");
    let server = create_test_server_with(MockLLMFactory::new(client.clone()));

    server
        .post("/api/assistant/reply")
        .json(&json!({ "role": "driver", "message": "   " }))
        .await
        .assert_status_bad_request();
    assert_eq!(client.call_count(), 0);
}

#[tokio::test]
async fn test_assistant_reply_error_statuses() {
    let server = create_test_server_with(MockLLMFactory::missing_key());
    let response = server
        .post("/api/assistant/reply")
        .json(&json!({ "role": "customer", "message": "hi" }))
        .await;
    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    let body: Value = response.json();
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains(prompt::MISSING_KEY_MARKER));

    let server = create_test_server_with(MockLLMFactory::new(MockLLMClient::failing()));
    server
        .post("/api/assistant/reply")
        .json(&json!({ "role": "customer", "message": "hi" }))
        .await
        .assert_status(StatusCode::BAD_GATEWAY);

    let server = create_test_server();
    server
        .post("/api/assistant/reply")
        .json(&json!({ "role": "pilot", "message": "hi" }))
        .await
        .assert_status_bad_request();
}

// ============= Conversations =============

#[tokio::test]
async fn test_create_conversation_defaults_to_landing() {
    let server = create_test_server();

    let response = server.post("/api/conversations").await;

    response.assert_status(StatusCode::CREATED);
    let body: Value = response.json();
    assert_eq!(body["role"], "landing");
    assert_eq!(body["messages"][0]["content"], prompt::greeting(Role::Landing));
    assert_eq!(body["loading"], false);
}

#[tokio::test]
async fn test_conversation_limit_evicts_least_recent() {
    let config = OmniRouteConfig::parse("[server]\nmax_conversations = 2\n").unwrap();
    let state = AppState::new(
        Arc::new(ConfigManager::from_config(config)),
        Arc::new(MockLLMFactory::new(MockLLMClient::new("unused"))),
    );
    let server = TestServer::new(api::build_app(state)).expect("Failed to create test server");

    let mut ids = Vec::new();
    for role in ["customer", "driver", "partner"] {
        let created = create_conversation(&server, role).await;
        ids.push(created["id"].as_str().unwrap().to_string());
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    }

    server
        .get(&format!("/api/conversations/{}", ids[0]))
        .await
        .assert_status(StatusCode::NOT_FOUND);
    for id in &ids[1..] {
        server
            .get(&format!("/api/conversations/{id}"))
            .await
            .assert_status_ok();
    }
}

#[tokio::test]
async fn test_conversation_lifecycle() {
    let server = create_test_server();
    let created = create_conversation(&server, "driver").await;
    let id = created["id"].as_str().unwrap();

    let response = server
        .post(&format!("/api/conversations/{id}/messages"))
        .json(&json!({ "text": "What is the ETA for stop 2?" }))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["outcome"], "replied");
    let messages = body["conversation"]["messages"].as_array().unwrap();
    assert_eq!(messages.len(), 3);
    assert_eq!(messages[1]["role"], "user");
    assert_eq!(messages[1]["content"], "What is the ETA for stop 2?");
    assert_eq!(messages[2]["role"], "assistant");
    assert_eq!(messages[2]["content"], "Mock assistant reply");

    let fetched: Value = server
        .get(&format!("/api/conversations/{id}"))
        .await
        .json();
    assert_eq!(fetched["messages"].as_array().unwrap().len(), 3);

    server
        .delete(&format!("/api/conversations/{id}"))
        .await
        .assert_status(StatusCode::NO_CONTENT);
    server
        .get(&format!("/api/conversations/{id}"))
        .await
        .assert_status_not_found();
}

#[tokio::test]
async fn test_empty_message_is_ignored() {
    let client = MockLLMClient::new("unused");
    let server = create_test_server_with(MockLLMFactory::new(client.clone()));
    let created = create_conversation(&server, "partner").await;
    let id = created["id"].as_str().unwrap();

    let response = server
        .post(&format!("/api/conversations/{id}/messages"))
        .json(&json!({ "text": "  " }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["outcome"], "ignored_empty");
    assert_eq!(body["conversation"]["messages"].as_array().unwrap().len(), 1);
    assert_eq!(client.call_count(), 0);
}

#[tokio::test]
async fn test_set_role_resets_transcript() {
    let server = create_test_server();
    let created = create_conversation(&server, "customer").await;
    let id = created["id"].as_str().unwrap();
    server
        .post(&format!("/api/conversations/{id}/messages"))
        .json(&json!({ "text": "Track CHN-001" }))
        .await
        .assert_status_ok();

    let response = server
        .put(&format!("/api/conversations/{id}/role"))
        .json(&json!({ "role": "dispatcher" }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["role"], "dispatcher");
    let messages = body["messages"].as_array().unwrap();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0]["content"], prompt::greeting(Role::Dispatcher));
}

#[tokio::test]
async fn test_missing_key_reply_is_inline() {
    let server = create_test_server_with(MockLLMFactory::missing_key());
    let created = create_conversation(&server, "driver").await;
    let id = created["id"].as_str().unwrap();

    let response = server
        .post(&format!("/api/conversations/{id}/messages"))
        .json(&json!({ "text": "hello" }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    let reply = body["conversation"]["messages"][2]["content"].as_str().unwrap();
    assert!(reply.starts_with("Error: "));
    assert!(reply.contains(prompt::MISSING_KEY_MARKER));
}

#[tokio::test]
async fn test_conversation_errors() {
    let server = create_test_server();

    server
        .post("/api/conversations")
        .json(&json!({ "role": "pilot" }))
        .await
        .assert_status_bad_request();

    server
        .get("/api/conversations/does-not-exist")
        .await
        .assert_status_not_found();
    server
        .delete("/api/conversations/does-not-exist")
        .await
        .assert_status_not_found();
    server
        .post("/api/conversations/does-not-exist/messages")
        .json(&json!({ "text": "hi" }))
        .await
        .assert_status_not_found();

    let created = create_conversation(&server, "driver").await;
    let id = created["id"].as_str().unwrap();
    server
        .put(&format!("/api/conversations/{id}/role"))
        .json(&json!({ "role": "pilot" }))
        .await
        .assert_status_bad_request();
}
