//! Integration tests for `InsightClient` using wiremock HTTP mocks.

use bizlens_insights::{error_fields, InsightClient, InsightError, InsightSettings};
use std::time::{Duration, Instant};

use serde_json::{json, Value};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn settings(server: &MockServer) -> InsightSettings {
    InsightSettings {
        api_url: format!("{}/openai/v1/chat/completions", server.uri()),
        api_key: Some("test-key".to_string()),
        model: "test-model".to_string(),
        temperature: 0.1,
        timeout_secs: 5,
        calls_per_minute: 0,
        include_summary: false,
        keep_empty_fields: false,
    }
}

fn test_client(server: &MockServer) -> InsightClient {
    InsightClient::new(settings(server)).expect("client construction should not fail")
}

fn completion(content: &str) -> Value {
    json!({
        "id": "chatcmpl-1",
        "object": "chat.completion",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }]
    })
}

async fn mount_reply(server: &MockServer, body: Value) {
    Mock::given(method("POST"))
        .and(path("/openai/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn sends_model_single_user_message_and_temperature() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/openai/v1/chat/completions"))
        .and(header("authorization", "Bearer test-key"))
        .and(body_partial_json(json!({
            "model": "test-model",
            "temperature": 0.1
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(&completion("{\"industry\": \"tools\"}")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let fields = client
        .request_insights("https://acme.com", "We sell anvils.")
        .await
        .expect("should parse insights");
    assert_eq!(fields["industry"], json!("tools"));

    let requests = server.received_requests().await.expect("recording enabled");
    let body: Value = serde_json::from_slice(&requests[0].body).unwrap();
    let messages = body["messages"].as_array().unwrap();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0]["role"], "user");
    let prompt = messages[0]["content"].as_str().unwrap();
    assert!(prompt.contains("Website: https://acme.com"));
    assert!(prompt.contains("Content: We sell anvils."));
    assert!(!prompt.contains("company_summary"));
}

#[tokio::test]
async fn padded_reply_is_narrowed_to_json_object() {
    let server = MockServer::start().await;
    mount_reply(
        &server,
        completion("sure, here you go: {\"industry\": \"finance\"} thanks"),
    )
    .await;

    let fields = test_client(&server)
        .request_insights("https://acme.com", "text")
        .await
        .unwrap();
    assert_eq!(Value::Object(fields), json!({"industry": "finance"}));
}

#[tokio::test]
async fn reply_without_braces_is_invalid_ai_json() {
    let server = MockServer::start().await;
    mount_reply(&server, completion("I cannot help with that.")).await;

    let err = test_client(&server)
        .request_insights("https://acme.com", "text")
        .await
        .expect_err("no JSON in reply");
    assert!(matches!(err, InsightError::InvalidJson));
    assert_eq!(
        Value::Object(error_fields(&err)),
        json!({"error": "Invalid AI JSON"})
    );
}

#[tokio::test]
async fn missing_choices_returns_raw_payload() {
    let server = MockServer::start().await;
    let payload = json!({
        "error": { "message": "Invalid API Key", "type": "invalid_request_error" }
    });

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401).set_body_json(&payload))
        .mount(&server)
        .await;

    let err = test_client(&server)
        .request_insights("https://acme.com", "text")
        .await
        .expect_err("401 has no choices");
    match &err {
        InsightError::MissingChoices { payload: got } => assert_eq!(got, &payload),
        other => panic!("expected MissingChoices, got: {other:?}"),
    }
    assert_eq!(error_fields(&err)["error"], payload);
}

#[tokio::test]
async fn non_json_reply_body_is_a_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&server)
        .await;

    let err = test_client(&server)
        .request_insights("https://acme.com", "text")
        .await
        .expect_err("html body is not JSON");
    assert!(matches!(err, InsightError::Decode(_)), "got: {err:?}");
}

#[tokio::test]
async fn empty_choices_is_an_empty_completion() {
    let server = MockServer::start().await;
    mount_reply(&server, json!({"choices": []})).await;

    let err = test_client(&server)
        .request_insights("https://acme.com", "text")
        .await
        .expect_err("no first choice");
    assert!(matches!(err, InsightError::EmptyCompletion), "got: {err:?}");
}

#[tokio::test]
async fn empty_fields_are_stripped_by_default() {
    let server = MockServer::start().await;
    let reply = r#"{"company_name": "Acme", "main_products": [], "industry": "", "ideal_customers": ["OEMs"]}"#;
    mount_reply(&server, completion(reply)).await;

    let fields = test_client(&server)
        .request_insights("https://acme.com", "text")
        .await
        .unwrap();
    assert_eq!(
        Value::Object(fields),
        json!({"company_name": "Acme", "ideal_customers": ["OEMs"]})
    );
}

#[tokio::test]
async fn empty_fields_are_kept_when_configured() {
    let server = MockServer::start().await;
    let reply = r#"{"company_name": "Acme", "main_products": [], "industry": ""}"#;
    mount_reply(&server, completion(reply)).await;

    let mut cfg = settings(&server);
    cfg.keep_empty_fields = true;
    let client = InsightClient::new(cfg).unwrap();

    let fields = client.request_insights("https://acme.com", "text").await.unwrap();
    assert_eq!(fields.len(), 3);
    assert_eq!(fields["main_products"], json!([]));
}

#[tokio::test]
async fn summary_is_requested_when_enabled() {
    let server = MockServer::start().await;
    mount_reply(&server, completion(r#"{"company_summary": "Makes anvils."}"#)).await;

    let mut cfg = settings(&server);
    cfg.include_summary = true;
    let client = InsightClient::new(cfg).unwrap();
    let fields = client.request_insights("https://acme.com", "text").await.unwrap();
    assert_eq!(fields["company_summary"], json!("Makes anvils."));

    let requests = server.received_requests().await.unwrap();
    let body: Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert!(body["messages"][0]["content"]
        .as_str()
        .unwrap()
        .contains("\"company_summary\": \"\""));
}

#[tokio::test]
async fn missing_api_key_sends_no_authorization_header() {
    let server = MockServer::start().await;
    mount_reply(&server, completion("{}")).await;

    let mut cfg = settings(&server);
    cfg.api_key = None;
    let client = InsightClient::new(cfg).unwrap();
    let fields = client.request_insights("acme.com", "text").await.unwrap();
    assert!(fields.is_empty());

    let requests = server.received_requests().await.unwrap();
    assert!(!requests[0].headers.contains_key("authorization"));
}

#[tokio::test]
async fn transport_failure_is_an_http_error() {
    let server = MockServer::start().await;
    let mut cfg = settings(&server);
    cfg.api_url = "http://127.0.0.1:1/chat/completions".to_string();
    let client = InsightClient::new(cfg).unwrap();

    let err = client
        .request_insights("https://acme.com", "text")
        .await
        .expect_err("nothing listens on port 1");
    assert!(matches!(err, InsightError::Http(_)), "got: {err:?}");
}

#[tokio::test]
async fn consecutive_requests_wait_for_the_rate_gate() {
    let server = MockServer::start().await;
    mount_reply(&server, completion("{\"industry\": \"tools\"}")).await;

    let mut cfg = settings(&server);
    cfg.calls_per_minute = 120;
    let client = InsightClient::new(cfg).unwrap();
    assert_eq!(client.min_interval(), Duration::from_millis(500));

    let start = Instant::now();
    client.request_insights("https://acme.com", "text").await.unwrap();
    assert!(
        start.elapsed() < Duration::from_millis(500),
        "first request must not wait, took {:?}",
        start.elapsed()
    );

    client.request_insights("https://globex.com", "text").await.unwrap();
    assert!(
        start.elapsed() >= Duration::from_millis(500),
        "second request must wait for the interval, took {:?}",
        start.elapsed()
    );
    assert_eq!(server.received_requests().await.unwrap().len(), 2);
}

#[tokio::test]
async fn disabled_rate_gate_has_zero_interval() {
    let server = MockServer::start().await;
    let client = test_client(&server);
    assert_eq!(client.min_interval(), Duration::ZERO);
}
