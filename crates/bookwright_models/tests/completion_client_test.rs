//! Tests for CompletionClient against a stubbed driver.

use async_trait::async_trait;
use bookwright_core::Role;
use bookwright_error::{CompletionError, CompletionErrorKind};
use bookwright_models::openai::{ChatChoice, ChatRequest, ChatResponse, ChoiceMessage};
use bookwright_models::{
    CompletionClient, CompletionDriver, CompletionRequest, build_messages, validate_sampling,
};
use std::sync::{Arc, Mutex};

/// Records every request and answers with a canned result.
#[derive(Clone)]
struct StubDriver {
    requests: Arc<Mutex<Vec<ChatRequest>>>,
    reply: Result<Vec<Option<String>>, CompletionErrorKind>,
}

impl StubDriver {
    fn answering(text: &str) -> Self {
        Self {
            requests: Arc::default(),
            reply: Ok(vec![Some(text.to_string())]),
        }
    }

    fn with_choices(choices: Vec<Option<String>>) -> Self {
        Self {
            requests: Arc::default(),
            reply: Ok(choices),
        }
    }

    fn failing(kind: CompletionErrorKind) -> Self {
        Self {
            requests: Arc::default(),
            reply: Err(kind),
        }
    }

    fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    fn last_request(&self) -> ChatRequest {
        self.requests.lock().unwrap().last().cloned().unwrap()
    }
}

#[async_trait]
impl CompletionDriver for StubDriver {
    fn provider_name(&self) -> &'static str {
        "stub"
    }

    async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse, CompletionError> {
        self.requests.lock().unwrap().push(request.clone());
        match &self.reply {
            Ok(choices) => Ok(ChatResponse {
                choices: choices
                    .iter()
                    .map(|content| ChatChoice {
                        message: ChoiceMessage {
                            role: Some("assistant".to_string()),
                            content: content.clone(),
                        },
                        finish_reason: Some("stop".to_string()),
                    })
                    .collect(),
                usage: None,
            }),
            Err(kind) => Err(CompletionError::new(kind.clone())),
        }
    }
}

fn request(temperature: f32, presence_penalty: f32) -> CompletionRequest {
    CompletionRequest::builder()
        .prompt("Outline a book")
        .temperature(temperature)
        .presence_penalty(presence_penalty)
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_temperature_upper_bound() {
    let driver = StubDriver::answering("ok");
    let client = CompletionClient::new(driver.clone());

    let err = client.complete(&request(2.1, 0.0)).await.unwrap_err();
    assert!(matches!(err.kind, CompletionErrorKind::InvalidArgument(_)));
    assert_eq!(driver.calls(), 0, "no request may be sent for invalid input");

    assert_eq!(client.complete(&request(2.0, 0.0)).await.unwrap(), "ok");
    assert_eq!(driver.calls(), 1);
}

#[tokio::test]
async fn test_presence_penalty_lower_bound() {
    let driver = StubDriver::answering("ok");
    let client = CompletionClient::new(driver.clone());

    let err = client.complete(&request(0.5, -2.1)).await.unwrap_err();
    assert!(matches!(err.kind, CompletionErrorKind::InvalidArgument(_)));
    assert_eq!(driver.calls(), 0);

    assert!(client.complete(&request(0.5, -2.0)).await.is_ok());
    assert_eq!(driver.calls(), 1);
}

#[tokio::test]
async fn test_request_carries_messages_and_parameters() {
    let driver = StubDriver::answering("ok");
    let client = CompletionClient::new(driver.clone());

    let request = CompletionRequest::builder()
        .prompt("the prompt")
        .system_message("the system")
        .model("gpt-4o-mini")
        .temperature(1.5)
        .presence_penalty(-1.0)
        .build()
        .unwrap();
    client.complete(&request).await.unwrap();

    let sent = driver.last_request();
    assert_eq!(sent.model(), "gpt-4o-mini");
    assert_eq!(*sent.temperature(), 1.5);
    assert_eq!(*sent.presence_penalty(), -1.0);
    let roles: Vec<_> = sent.messages().iter().map(|m| m.role).collect();
    assert_eq!(roles, vec![Role::System, Role::User]);
    assert_eq!(sent.messages()[1].content, "the prompt");
}

#[tokio::test]
async fn test_returns_first_choice() {
    let driver = StubDriver::with_choices(vec![Some("first".into()), Some("second".into())]);
    let client = CompletionClient::new(driver);

    let text = client
        .complete(&CompletionRequest::from_prompt("p"))
        .await
        .unwrap();
    assert_eq!(text, "first");
}

#[tokio::test]
async fn test_empty_choices_is_parse_error() {
    let client = CompletionClient::new(StubDriver::with_choices(vec![]));
    let err = client
        .complete(&CompletionRequest::from_prompt("p"))
        .await
        .unwrap_err();
    assert!(matches!(err.kind, CompletionErrorKind::ResponseParsing(_)));
}

#[tokio::test]
async fn test_null_content_is_parse_error() {
    let client = CompletionClient::new(StubDriver::with_choices(vec![None]));
    let err = client
        .complete(&CompletionRequest::from_prompt("p"))
        .await
        .unwrap_err();
    assert!(matches!(err.kind, CompletionErrorKind::ResponseParsing(_)));
}

#[tokio::test]
async fn test_transport_failure_propagates_unchanged() {
    let driver = StubDriver::failing(CompletionErrorKind::Http("connection reset".into()));
    let client = CompletionClient::new(driver.clone());

    let err = client
        .complete(&CompletionRequest::from_prompt("p"))
        .await
        .unwrap_err();
    assert_eq!(
        err.kind,
        CompletionErrorKind::Http("connection reset".into())
    );
    assert_eq!(driver.calls(), 1, "failures are not retried");
}

#[test]
fn test_system_message_goes_first() {
    let messages = build_messages("prompt", Some("system"));
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].role, Role::System);
    assert_eq!(messages[1].role, Role::User);
    assert_eq!(messages[1].content, "prompt");
}

#[test]
fn test_blank_system_message_is_dropped() {
    assert_eq!(build_messages("prompt", Some("  ")).len(), 1);
    assert_eq!(build_messages("prompt", None).len(), 1);
}

fn is_invalid(result: Result<(), CompletionError>) -> bool {
    matches!(
        result.map_err(|e| e.kind),
        Err(CompletionErrorKind::InvalidArgument(_))
    )
}

#[test]
fn test_temperature_bounds() {
    assert!(validate_sampling(0.0, 0.0).is_ok());
    assert!(validate_sampling(2.0, 0.0).is_ok());
    assert!(is_invalid(validate_sampling(2.1, 0.0)));
    assert!(is_invalid(validate_sampling(-0.1, 0.0)));
    assert!(is_invalid(validate_sampling(f32::NAN, 0.0)));
}

#[test]
fn test_presence_penalty_bounds() {
    assert!(validate_sampling(0.5, -2.0).is_ok());
    assert!(validate_sampling(0.5, 2.0).is_ok());
    assert!(is_invalid(validate_sampling(0.5, -2.1)));
    assert!(is_invalid(validate_sampling(0.5, 2.1)));
}

#[test]
fn test_builder_defaults_match_from_prompt() {
    let built = CompletionRequest::builder().prompt("p").build().unwrap();
    assert_eq!(built, CompletionRequest::from_prompt("p"));
}
