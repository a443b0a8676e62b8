//! HTTP-level tests for the OpenAI driver against a mock server.

use bookwright_error::CompletionErrorKind;
use bookwright_models::{CompletionClient, CompletionRequest, OpenAIClient};
use mockito::Matcher;
use serde_json::json;

const ENDPOINT: &str = "/v1/chat/completions";

fn endpoint(server: &mockito::ServerGuard) -> String {
    format!("{}{}", server.url(), ENDPOINT)
}

#[tokio::test]
async fn test_posts_wire_body_and_reads_first_choice() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", ENDPOINT)
        .match_header("authorization", "Bearer test-key")
        .match_body(Matcher::PartialJson(json!({
            "model": "gpt-3.5-turbo",
            "messages": [
                {"role": "system", "content": "sys"},
                {"role": "user", "content": "hello"}
            ],
            "temperature": 0.5,
            "presence_penalty": 0.0
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "id": "chatcmpl-1",
                "object": "chat.completion",
                "choices": [{"index": 0, "message": {"role": "assistant", "content": "{\"bt\": \"T\"}"}, "finish_reason": "stop"}],
                "usage": {"prompt_tokens": 5, "completion_tokens": 3, "total_tokens": 8}
            })
            .to_string(),
        )
        .expect(1)
        .create_async()
        .await;

    let client = CompletionClient::new(OpenAIClient::with_base_url("test-key", endpoint(&server)));
    let request = CompletionRequest::builder()
        .prompt("hello")
        .system_message("sys")
        .build()
        .unwrap();

    let text = client.complete(&request).await.unwrap();
    assert_eq!(text, "{\"bt\": \"T\"}");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_api_error_status_is_reported() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", ENDPOINT)
        .with_status(401)
        .with_body("{\"error\": {\"message\": \"Incorrect API key provided\"}}")
        .expect(1)
        .create_async()
        .await;

    let client = CompletionClient::new(OpenAIClient::with_base_url("bad", endpoint(&server)));
    let err = client
        .complete(&CompletionRequest::from_prompt("hello"))
        .await
        .unwrap_err();

    match err.kind {
        CompletionErrorKind::Api { status, message } => {
            assert_eq!(status, 401);
            assert!(message.contains("Incorrect API key"));
        }
        other => panic!("unexpected error kind: {other}"),
    }
    mock.assert_async().await;
}

#[tokio::test]
async fn test_undecodable_body_is_parse_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", ENDPOINT)
        .with_status(200)
        .with_body("not json")
        .create_async()
        .await;

    let client = CompletionClient::new(OpenAIClient::with_base_url("k", endpoint(&server)));
    let err = client
        .complete(&CompletionRequest::from_prompt("hello"))
        .await
        .unwrap_err();
    assert!(matches!(err.kind, CompletionErrorKind::ResponseParsing(_)));
}

#[tokio::test]
async fn test_invalid_arguments_never_hit_the_network() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", ENDPOINT)
        .expect(0)
        .create_async()
        .await;

    let client = CompletionClient::new(OpenAIClient::with_base_url("k", endpoint(&server)));
    let request = CompletionRequest::builder()
        .prompt("hello")
        .temperature(3.0)
        .build()
        .unwrap();

    let err = client.complete(&request).await.unwrap_err();
    assert!(matches!(err.kind, CompletionErrorKind::InvalidArgument(_)));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_unreachable_host_is_http_error() {
    // Port 9 (discard) on localhost is not expected to accept HTTP.
    let client = CompletionClient::new(OpenAIClient::with_base_url(
        "k",
        "http://127.0.0.1:9/v1/chat/completions",
    ));
    let err = client
        .complete(&CompletionRequest::from_prompt("hello"))
        .await
        .unwrap_err();
    assert!(matches!(err.kind, CompletionErrorKind::Http(_)));
}
