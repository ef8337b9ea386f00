//! OpenAI-compatible strategy generator.
//! Most LLM backends follow the same `/chat/completions` format, so a
//! single implementation covers direct OpenAI, OpenRouter, and friends.

use super::scrub::api_error;
use super::traits::StrategyGenerator;
use crate::error::GenerationError;
use crate::intake::IntakeRecord;
use crate::strategy::{parse, prompt, Strategy};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub struct OpenAiGenerator {
    /// Pre-computed `"Bearer <key>"` header value (avoids `format!` per request).
    cached_auth_header: Option<String>,
    /// Pre-computed chat completions URL.
    cached_chat_url: String,
    model: String,
    temperature: f64,
    client: Client,
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<Message>,
    temperature: f64,
}

#[derive(Debug, Serialize)]
struct Message {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

impl OpenAiGenerator {
    pub fn new(
        api_key: Option<&str>,
        api_base: &str,
        model: impl Into<String>,
        temperature: f64,
    ) -> Self {
        let base = api_base.trim_end_matches('/');
        Self {
            cached_auth_header: api_key.map(|k| format!("Bearer {k}")),
            cached_chat_url: format!("{base}/chat/completions"),
            model: model.into(),
            temperature,
            client: Client::builder()
                .timeout(Duration::from_secs(30))
                .connect_timeout(Duration::from_secs(10))
                .build()
                .unwrap_or_else(|_| Client::new()),
        }
    }

    fn build_request(&self, record: &IntakeRecord) -> ChatRequest {
        ChatRequest {
            model: self.model.clone(),
            messages: vec![
                Message {
                    role: "system",
                    content: prompt::system_prompt().to_string(),
                },
                Message {
                    role: "user",
                    content: prompt::user_prompt(record),
                },
            ],
            temperature: self.temperature,
        }
    }

    async fn call_api(&self, request: &ChatRequest) -> Result<ChatResponse, GenerationError> {
        let auth_header = self
            .cached_auth_header
            .as_ref()
            .ok_or(GenerationError::MissingApiKey)?;

        let response = self
            .client
            .post(&self.cached_chat_url)
            .header("Authorization", auth_header)
            .json(request)
            .send()
            .await
            .map_err(|e| GenerationError::Request(e.to_string()))?;

        if !response.status().is_success() {
            return Err(api_error(response).await);
        }

        response
            .json()
            .await
            .map_err(|e| GenerationError::Request(format!("response decode failed: {e}")))
    }

    fn extract_text(chat_response: ChatResponse) -> Result<String, GenerationError> {
        chat_response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or(GenerationError::EmptyResponse)
    }
}

#[async_trait]
impl StrategyGenerator for OpenAiGenerator {
    async fn generate_strategy(
        &self,
        record: &IntakeRecord,
    ) -> Result<Strategy, GenerationError> {
        let request = self.build_request(record);
        let chat_response = self.call_api(&request).await?;
        let text = Self::extract_text(chat_response)?;
        parse::parse(&text).map_err(|e| GenerationError::Malformed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::model::sample_strategy;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn generator(base: &str, key: Option<&str>) -> OpenAiGenerator {
        OpenAiGenerator::new(key, base, "gpt-4o-mini", 0.7)
    }

    fn fenced_strategy_body() -> serde_json::Value {
        let strategy_json = serde_json::to_string_pretty(&sample_strategy()).unwrap();
        serde_json::json!({
            "choices": [{
                "message": {
                    "content": format!("Here you go:\n```json\n{strategy_json}\n```")
                }
            }]
        })
    }

    #[test]
    fn creates_with_key() {
        let g = generator("https://api.openai.com/v1", Some("sk-test"));
        assert_eq!(g.cached_auth_header.as_deref(), Some("Bearer sk-test"));
        assert_eq!(
            g.cached_chat_url,
            "https://api.openai.com/v1/chat/completions"
        );
    }

    #[test]
    fn strips_trailing_slash() {
        let g = generator("https://api.openai.com/v1/", None);
        assert_eq!(
            g.cached_chat_url,
            "https://api.openai.com/v1/chat/completions"
        );
    }

    #[test]
    fn request_embeds_schema_and_intake() {
        let mut record = IntakeRecord::default();
        record.apply(crate::intake::IntakePatch::Business(
            crate::intake::BusinessPatch {
                name: Some("Acme".into()),
                ..Default::default()
            },
        ));

        let g = generator("https://api.openai.com/v1", Some("sk-test"));
        let request = g.build_request(&record);
        let json = serde_json::to_string(&request).unwrap();

        assert!(json.contains("\"role\":\"system\""));
        assert!(json.contains("\"role\":\"user\""));
        assert!(json.contains("Name: Acme"));
        assert!(json.contains("gpt-4o-mini"));
    }

    #[tokio::test]
    async fn fails_without_key() {
        let g = generator("https://api.openai.com/v1", None);
        let err = g
            .generate_strategy(&IntakeRecord::default())
            .await
            .unwrap_err();
        assert!(matches!(err, GenerationError::MissingApiKey));
    }

    #[tokio::test]
    async fn parses_fenced_strategy_payload() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(fenced_strategy_body()))
            .mount(&server)
            .await;

        let g = generator(&server.uri(), Some("sk-test"));
        let strategy = g.generate_strategy(&IntakeRecord::default()).await.unwrap();

        assert_eq!(strategy, sample_strategy());
    }

    #[tokio::test]
    async fn api_failure_maps_to_api_error_with_sanitized_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(429).set_body_string(
                "{\"error\":\"rate limited, key sk-live-raw123 rejected\"}",
            ))
            .mount(&server)
            .await;

        let g = generator(&server.uri(), Some("sk-test"));
        let err = g
            .generate_strategy(&IntakeRecord::default())
            .await
            .unwrap_err();

        match err {
            GenerationError::Api { status, message } => {
                assert_eq!(status, 429);
                assert!(message.contains("rate limited"));
                assert!(!message.contains("raw123"));
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn non_json_content_maps_to_malformed() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "choices": [{"message": {"content": "sorry, no strategy today"}}]
            })))
            .mount(&server)
            .await;

        let g = generator(&server.uri(), Some("sk-test"));
        let err = g
            .generate_strategy(&IntakeRecord::default())
            .await
            .unwrap_err();

        assert!(matches!(err, GenerationError::Malformed(_)));
    }

    #[tokio::test]
    async fn empty_choices_maps_to_empty_response() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"choices": []})),
            )
            .mount(&server)
            .await;

        let g = generator(&server.uri(), Some("sk-test"));
        let err = g
            .generate_strategy(&IntakeRecord::default())
            .await
            .unwrap_err();

        assert!(matches!(err, GenerationError::EmptyResponse));
    }

    #[tokio::test]
    async fn unreachable_host_maps_to_request_error() {
        // Port 1 is never listening.
        let g = generator("http://127.0.0.1:1", Some("sk-test"));
        let err = g
            .generate_strategy(&IntakeRecord::default())
            .await
            .unwrap_err();

        assert!(matches!(err, GenerationError::Request(_)));
    }
}
