use chat_relay::services::openai::{MODEL, OpenAiClient};
use chat_relay::services::provider::{CompletionProvider, ProviderError};

use axum::{
    Json, Router,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::post,
};
use serde_json::{Value, json};

/// Serve `app` on an ephemeral port and return its base URL.
async fn spawn(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}/v1")
}

async fn echo_completion(headers: HeaderMap, Json(body): Json<Value>) -> impl IntoResponse {
    let auth = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    if auth != "Bearer sk-test" {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({"error": {"message": "Incorrect API key provided"}})),
        );
    }

    let messages = body["messages"].as_array().cloned().unwrap_or_default();
    let summary = format!(
        "model={} roles={} system={} user={}",
        body["model"].as_str().unwrap_or_default(),
        messages
            .iter()
            .map(|m| m["role"].as_str().unwrap_or_default())
            .collect::<Vec<_>>()
            .join(","),
        messages[0]["content"].as_str().unwrap_or_default(),
        messages[1]["content"].as_str().unwrap_or_default(),
    );
    (
        StatusCode::OK,
        Json(json!({
            "id": "chatcmpl-1",
            "object": "chat.completion",
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": summary}, "finish_reason": "stop"},
                {"index": 1, "message": {"role": "assistant", "content": "ignored"}, "finish_reason": "stop"}
            ]
        })),
    )
}

#[tokio::test]
async fn test_generate_sends_persona_and_message() {
    let base = spawn(Router::new().route("/v1/chat/completions", post(echo_completion))).await;
    let client = OpenAiClient::new("sk-test", &base);

    let text = client
        .generate("You are a test persona.", "ping")
        .await
        .unwrap();

    assert_eq!(
        text,
        format!("model={MODEL} roles=system,user system=You are a test persona. user=ping")
    );
}

#[tokio::test]
async fn test_auth_failure_is_status_error() {
    let base = spawn(Router::new().route("/v1/chat/completions", post(echo_completion))).await;
    let client = OpenAiClient::new("sk-wrong", &base);

    let err = client.generate("persona", "ping").await.unwrap_err();
    match err {
        ProviderError::Status { status, body } => {
            assert_eq!(status, 401);
            assert!(body.contains("Incorrect API key"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_empty_choices_is_error() {
    let app = Router::new().route(
        "/v1/chat/completions",
        post(|| async { Json(json!({"choices": []})) }),
    );
    let base = spawn(app).await;
    let client = OpenAiClient::new("sk-test", &base);

    let err = client.generate("persona", "ping").await.unwrap_err();
    assert!(matches!(err, ProviderError::EmptyCompletion));
}

#[tokio::test]
async fn test_unreachable_provider_is_request_error() {
    // Bind then drop to get a port nothing listens on.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = OpenAiClient::new("sk-test", &format!("http://{addr}/v1"));
    let err = client.generate("persona", "ping").await.unwrap_err();
    assert!(matches!(err, ProviderError::Request(_)));
}
