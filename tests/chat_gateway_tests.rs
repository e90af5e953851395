//! Client-side tests: the HTTP gateway against `wiremock`, and a full round
//! trip through a real server bound to an ephemeral port.

use std::sync::Arc;

use serde_json::json;
use wiremock::{
    matchers::{body_json, method, path},
    Mock, MockServer, ResponseTemplate,
};

use chatty::{
    router, ChatGateway, ChatSession, Container, HttpChatGateway, MockCompletion, ServerConfig,
    SubmitOutcome,
};

#[tokio::test]
async fn test_gateway_posts_prompt_envelope() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .and(body_json(json!({ "prompt": "Tell me a joke" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "response": "Why did..." })))
        .expect(1)
        .mount(&server)
        .await;

    let gateway = HttpChatGateway::new(server.uri());
    let reply = gateway.send_prompt("Tell me a joke").await.unwrap();

    assert!(reply.is_success());
    assert_eq!(reply.envelope.response.as_deref(), Some("Why did..."));
}

#[test]
fn test_gateway_url_joins_chat_route() {
    assert_eq!(
        HttpChatGateway::new("http://127.0.0.1:3000/").url(),
        "http://127.0.0.1:3000/api/chat"
    );
    assert_eq!(
        HttpChatGateway::new("http://chat.local").url(),
        "http://chat.local/api/chat"
    );
}

#[tokio::test]
async fn test_session_shows_upstream_error_and_keeps_history() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({
            "error": "OpenAI API Error: 429",
            "details": "429 Rate limit reached"
        })))
        .mount(&server)
        .await;

    let gateway = HttpChatGateway::new(server.uri());
    let mut session = ChatSession::new();
    session.set_input("Tell me a joke");

    let outcome = session.submit(&gateway).await;

    assert_eq!(outcome, SubmitOutcome::Failed);
    assert_eq!(session.error(), Some("OpenAI API Error: 429"));
    assert!(session.history().is_empty());
    assert!(!session.is_loading());
}

#[tokio::test]
async fn test_non_json_error_body_reports_status() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&server)
        .await;

    let gateway = HttpChatGateway::new(server.uri());
    let mut session = ChatSession::new();
    session.set_input("hi");

    session.submit(&gateway).await;

    assert_eq!(session.error(), Some("API Error: 502"));
}

#[tokio::test]
async fn test_non_json_success_body_is_transport_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
        .mount(&server)
        .await;

    let gateway = HttpChatGateway::new(server.uri());
    let err = gateway.send_prompt("hi").await.unwrap_err();

    assert!(err.to_string().starts_with("Invalid response from chat server"));
}

#[tokio::test]
async fn test_unreachable_server_surfaces_error() {
    let gateway = HttpChatGateway::new("http://127.0.0.1:9");
    let mut session = ChatSession::new();
    session.set_input("hi");

    let outcome = session.submit(&gateway).await;

    assert_eq!(outcome, SubmitOutcome::Failed);
    assert!(session.error().unwrap().starts_with("Could not reach"));
    assert!(!session.is_loading());
}

#[tokio::test]
async fn test_round_trip_through_running_server() {
    let container = Container::with_completion_service(
        Arc::new(MockCompletion::new()),
        ServerConfig::new(Some("sk-test".to_string()), "gpt-3.5-turbo"),
    );
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router(Arc::new(container)))
            .await
            .unwrap();
    });

    let gateway = HttpChatGateway::new(format!("http://{addr}"));
    let mut session = ChatSession::new();

    session.set_input("first");
    assert_eq!(session.submit(&gateway).await, SubmitOutcome::Added);
    session.set_input("second");
    assert_eq!(session.submit(&gateway).await, SubmitOutcome::Added);

    let prompts: Vec<_> = session.history().iter().map(|e| e.prompt()).collect();
    assert_eq!(prompts, vec!["second", "first"]);
    assert!(session
        .history()
        .newest()
        .unwrap()
        .response()
        .contains("second"));
    assert_eq!(session.input(), "");

    session.set_input("   ");
    assert_eq!(session.submit(&gateway).await, SubmitOutcome::Skipped);
    assert_eq!(session.history().len(), 2);

    session.clear();
    assert!(session.history().is_empty());
    assert!(session.error().is_none());
}
