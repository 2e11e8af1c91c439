//! Integration tests for the chat HTTP API.
//!
//! These tests drive the fully layered application router with scripted
//! model providers and verify:
//! 1. Routing through the domain gate and the fallback chain
//! 2. Provenance tags on every reply
//! 3. Conversation lifecycle over the REST endpoints

use std::sync::Arc;
use std::time::Duration;

use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use constructbot::adapters::ai::{MockAIProvider, MockError, ProviderSource};
use constructbot::adapters::http::{build_app, ChatAppState};
use constructbot::adapters::memory::{InMemoryConversationRepository, InMemoryPreferenceStore};
use constructbot::application::ChatOrchestrator;
use constructbot::config::AppConfig;
use constructbot::domain::assistant::templates::{
    EXHAUSTED_MESSAGE, PRIMARY_PREAMBLE, SECONDARY_PREAMBLE,
};

// =============================================================================
// Test Infrastructure
// =============================================================================

const PRIMARY_ANSWER: &str = "For a residential slab use M20 concrete and cure it for seven days.";
const SECONDARY_ANSWER: &str = "Per IS 456, provide minimum 20 mm cover for slabs in mild exposure.";

struct TestApp {
    router: Router,
    primary: MockAIProvider,
    secondary: MockAIProvider,
}

fn test_app(primary: MockAIProvider, secondary: MockAIProvider, verbose: bool) -> TestApp {
    let mut config = AppConfig::default();
    config.features.enable_tracing = false;

    let orchestrator = ChatOrchestrator::new(
        Arc::new(ProviderSource::new(primary.clone())),
        Arc::new(ProviderSource::new(secondary.clone())),
    );
    app_with(orchestrator, &config, primary, secondary, verbose)
}

/// Wires the orchestrator timeouts from `config`, the way the binary does.
fn timed_app(primary: MockAIProvider, secondary: MockAIProvider, config: &AppConfig) -> TestApp {
    let orchestrator = ChatOrchestrator::new(
        Arc::new(ProviderSource::new(primary.clone())),
        Arc::new(ProviderSource::new(secondary.clone())),
    )
    .with_step_timeout(Some(config.ai.timeout()))
    .with_deadline(Some(config.reply_deadline()));
    app_with(orchestrator, config, primary, secondary, false)
}

fn app_with(
    orchestrator: ChatOrchestrator,
    config: &AppConfig,
    primary: MockAIProvider,
    secondary: MockAIProvider,
    verbose: bool,
) -> TestApp {
    let state = ChatAppState::new(
        Arc::new(orchestrator),
        Arc::new(InMemoryConversationRepository::new()),
        Arc::new(InMemoryPreferenceStore::new()),
    )
    .with_verbose_errors(verbose);

    TestApp {
        router: build_app(state, config),
        primary,
        secondary,
    }
}

async fn call(router: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = router
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn reply(router: &Router, query: &str) -> Value {
    let (status, body) = call(
        router,
        Method::POST,
        "/api/assistant/reply",
        Some(json!({ "query": query })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body
}

// =============================================================================
// Assistant core
// =============================================================================

#[tokio::test]
async fn primary_answer_is_returned_verbatim() {
    let app = test_app(
        MockAIProvider::new().with_response(PRIMARY_ANSWER),
        MockAIProvider::new(),
        false,
    );

    let body = reply(&app.router, "What concrete grade for a house slab?").await;

    assert_eq!(body["source"], "primary-model");
    assert_eq!(body["content"], PRIMARY_ANSWER);
    assert_eq!(app.secondary.call_count(), 0);

    let prompt = &app.primary.prompts()[0];
    assert!(prompt.starts_with(PRIMARY_PREAMBLE));
    assert!(prompt.ends_with("What concrete grade for a house slab?"));
}

#[tokio::test]
async fn failing_primary_falls_through_to_secondary() {
    let app = test_app(
        MockAIProvider::new().with_error(MockError::Unavailable {
            message: "model not loaded".into(),
        }),
        MockAIProvider::new().with_response(SECONDARY_ANSWER),
        false,
    );

    let body = reply(&app.router, "cover for slab reinforcement").await;

    assert_eq!(body["source"], "secondary-model");
    assert_eq!(body["content"], SECONDARY_ANSWER);
    assert_eq!(app.primary.call_count(), 1);
    assert!(app.secondary.prompts()[0].starts_with(SECONDARY_PREAMBLE));
}

#[tokio::test]
async fn short_primary_answer_is_not_viable() {
    let app = test_app(
        MockAIProvider::new().with_response("Use M20."),
        MockAIProvider::new().with_response(SECONDARY_ANSWER),
        false,
    );

    let body = reply(&app.router, "concrete grade for slab").await;

    assert_eq!(body["source"], "secondary-model");
}

#[tokio::test]
async fn both_sources_failing_returns_exhausted_guidance() {
    let app = test_app(
        MockAIProvider::new().with_error(MockError::Timeout { timeout_secs: 60 }),
        MockAIProvider::new().with_error(MockError::RateLimited {
            retry_after_secs: 30,
        }),
        false,
    );

    let body = reply(&app.router, "brick masonry mortar ratio").await;

    assert_eq!(body["source"], "exhausted-fallback");
    assert!(!body["content"].as_str().unwrap().is_empty());
    assert_eq!(app.primary.call_count(), 1);
    assert_eq!(app.secondary.call_count(), 1);
}

#[tokio::test]
async fn slow_sources_still_get_a_tagged_reply_before_the_request_times_out() {
    let mut config = AppConfig::default();
    config.features.enable_tracing = false;
    config.ai.gemini_api_key = Some("AIza-test".to_string());
    config.ai.timeout_secs = 1;
    config.server.request_timeout_secs = 2;
    assert!(config.validate().is_ok());

    let app = timed_app(
        MockAIProvider::new()
            .with_delay(Duration::from_secs(10))
            .with_response(PRIMARY_ANSWER),
        MockAIProvider::new()
            .with_delay(Duration::from_secs(10))
            .with_response(SECONDARY_ANSWER),
        &config,
    );

    let body = reply(&app.router, "concrete slab curing").await;

    assert_eq!(body["source"], "exhausted-fallback");
    assert_eq!(body["content"], EXHAUSTED_MESSAGE);
    assert_eq!(app.primary.call_count(), 1);
}

#[tokio::test]
async fn out_of_domain_query_never_reaches_a_model() {
    let app = test_app(
        MockAIProvider::new().with_response(PRIMARY_ANSWER),
        MockAIProvider::new().with_response(SECONDARY_ANSWER),
        false,
    );

    for query in ["Who won the cricket match?", "", "   "] {
        let body = reply(&app.router, query).await;
        assert_eq!(body["source"], "domain-rejected", "query: {:?}", query);
    }

    assert_eq!(app.primary.call_count(), 0);
    assert_eq!(app.secondary.call_count(), 0);
}

#[tokio::test]
async fn panic_becomes_internal_error_reply() {
    let quiet = test_app(
        MockAIProvider::new().with_panic("provider exploded"),
        MockAIProvider::new(),
        false,
    );
    let body = reply(&quiet.router, "steel beam sizing").await;
    assert_eq!(body["source"], "internal-error");
    assert!(body.get("diagnostic").is_none());

    let verbose = test_app(
        MockAIProvider::new().with_panic("provider exploded"),
        MockAIProvider::new(),
        true,
    );
    let body = reply(&verbose.router, "steel beam sizing").await;
    assert_eq!(body["source"], "internal-error");
    assert!(body["diagnostic"]
        .as_str()
        .unwrap()
        .contains("provider exploded"));
}

#[tokio::test]
async fn welcome_is_tagged() {
    let app = test_app(MockAIProvider::new(), MockAIProvider::new(), false);

    let (status, body) = call(&app.router, Method::GET, "/api/welcome", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["source"], "welcome");
}

// =============================================================================
// Conversations
// =============================================================================

#[tokio::test]
async fn conversation_lifecycle() {
    let app = test_app(
        MockAIProvider::new()
            .with_response(PRIMARY_ANSWER)
            .with_response(PRIMARY_ANSWER),
        MockAIProvider::new(),
        false,
    );

    let (status, created) = call(
        &app.router,
        Method::POST,
        "/api/chat",
        Some(json!({ "message": "Foundation design for clay soil" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["created"], true);
    assert_eq!(created["assistantMessage"]["source"], "primary-model");
    let id = created["conversationId"].as_str().unwrap().to_string();

    let (status, continued) = call(
        &app.router,
        Method::POST,
        "/api/chat",
        Some(json!({ "message": "And the footing depth?", "conversationId": id })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(continued["created"], false);
    assert_eq!(continued["title"], created["title"]);

    let (status, list) = call(&app.router, Method::GET, "/api/conversations", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.as_array().unwrap().len(), 1);
    assert_eq!(list[0]["messageCount"], 5);

    let uri = format!("/api/conversations/{}", id);
    let (status, conversation) = call(&app.router, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    let messages = conversation["messages"].as_array().unwrap();
    let roles: Vec<&str> = messages.iter().map(|m| m["role"].as_str().unwrap()).collect();
    assert_eq!(roles, ["assistant", "user", "assistant", "user", "assistant"]);
    assert_eq!(messages[0]["source"], "welcome");
    assert!(messages[1].get("source").is_none());

    let (status, _) = call(&app.router, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = call(&app.router, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn off_topic_chat_message_is_recorded_with_rejection_tag() {
    let app = test_app(MockAIProvider::new(), MockAIProvider::new(), false);

    let (status, body) = call(
        &app.router,
        Method::POST,
        "/api/chat",
        Some(json!({ "message": "tell me a joke" })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["assistantMessage"]["source"], "domain-rejected");
    assert_eq!(app.primary.call_count(), 0);
}

#[tokio::test]
async fn blank_chat_message_is_rejected() {
    let app = test_app(MockAIProvider::new(), MockAIProvider::new(), false);

    let (status, body) = call(
        &app.router,
        Method::POST,
        "/api/chat",
        Some(json!({ "message": "  " })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn preferences_persist_between_requests() {
    let app = test_app(MockAIProvider::new(), MockAIProvider::new(), false);

    let (status, _) = call(
        &app.router,
        Method::PUT,
        "/api/preferences/hide_examples",
        Some(json!({ "value": true })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = call(&app.router, Method::GET, "/api/preferences/hide_examples", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "key": "hide_examples", "value": true }));
}
