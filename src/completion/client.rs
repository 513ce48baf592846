//! HTTP client for OpenAI-compatible chat completion endpoints
//!
//! Sends one role-tagged instruction message plus the user prompt to
//! `{api_base_url}/chat/completions` and returns the text of the first choice.

use super::{CompletionClient, TransportError};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info};

/// Default API base (the `/chat/completions` path is appended)
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
/// Default model identifier
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
/// Upper bound on reply length
pub const DEFAULT_MAX_TOKENS: u32 = 60;
/// Moderate sampling randomness
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

const INSTRUCTION: &str = "You are an expert in second-hand clothing prices.";
const USER_AGENT: &str = concat!("resale-tui/", env!("CARGO_PKG_VERSION"));

/// Longest error body kept in a [`TransportError::Status`]
const MAX_ERROR_BODY: usize = 200;

/// Fixed request configuration for every completion
#[derive(Clone, PartialEq)]
pub struct CompletionSettings {
    pub api_key: Option<String>,
    pub model: String,
    pub api_base_url: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl Default for CompletionSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            api_base_url: DEFAULT_BASE_URL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

// The key never ends up in logs.
impl fmt::Debug for CompletionSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompletionSettings")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("api_base_url", &self.api_base_url)
            .field("max_tokens", &self.max_tokens)
            .field("temperature", &self.temperature)
            .finish()
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    max_tokens: u32,
    temperature: f32,
    n: u8,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Debug, Deserialize)]
struct ChatReply {
    #[serde(default)]
    content: Option<String>,
}

/// Client for an OpenAI-compatible chat completions endpoint
pub struct OpenAiClient {
    http: Client,
    settings: CompletionSettings,
}

impl OpenAiClient {
    /// Create a new client; no network traffic happens until the first request
    pub fn new(settings: CompletionSettings) -> Result<Self, TransportError> {
        let http = Client::builder().user_agent(USER_AGENT).build()?;
        info!(
            model = %settings.model,
            base_url = %settings.api_base_url,
            has_api_key = settings.api_key.is_some(),
            "Completion client ready"
        );
        Ok(Self { http, settings })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/chat/completions",
            self.settings.api_base_url.trim_end_matches('/')
        )
    }

    fn request_body<'a>(&'a self, prompt: &'a str) -> ChatRequest<'a> {
        ChatRequest {
            model: &self.settings.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: INSTRUCTION,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            max_tokens: self.settings.max_tokens,
            temperature: self.settings.temperature,
            n: 1,
        }
    }
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    async fn get_completion(&self, prompt: &str) -> Result<String, TransportError> {
        let api_key = self
            .settings
            .api_key
            .as_deref()
            .ok_or(TransportError::MissingApiKey)?;

        let url = self.endpoint();
        debug!(%url, model = %self.settings.model, "Sending completion request");

        let response = self
            .http
            .post(&url)
            .bearer_auth(api_key)
            .json(&self.request_body(prompt))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(TransportError::Status {
                status: status.as_u16(),
                body: truncate(&body, MAX_ERROR_BODY),
            });
        }

        parse_reply(&body)
    }
}

/// Pull the text of the first choice out of a chat completion body
fn parse_reply(body: &str) -> Result<String, TransportError> {
    let response: ChatResponse = serde_json::from_str(body)
        .map_err(|e| TransportError::MalformedResponse(e.to_string()))?;

    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or_else(|| {
            TransportError::MalformedResponse("response contained no completion text".to_string())
        })
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let cut: String = s.chars().take(max_chars).collect();
        format!("{cut}...")
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn client_with(settings: CompletionSettings) -> OpenAiClient {
        OpenAiClient::new(settings).unwrap()
    }

    mod request {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_body_carries_fixed_configuration() {
            let client = client_with(CompletionSettings::default());
            let body = serde_json::to_value(client.request_body("How much?")).unwrap();

            assert_eq!(
                body,
                json!({
                    "model": "gpt-3.5-turbo",
                    "messages": [
                        {"role": "system", "content": INSTRUCTION},
                        {"role": "user", "content": "How much?"}
                    ],
                    "max_tokens": 60,
                    "temperature": 0.7f32,
                    "n": 1
                })
            );
        }

        #[test]
        fn test_body_uses_configured_model() {
            let client = client_with(CompletionSettings {
                model: "gpt-4o-mini".to_string(),
                max_tokens: 20,
                ..Default::default()
            });
            let body = serde_json::to_value(client.request_body("x")).unwrap();
            assert_eq!(body["model"], "gpt-4o-mini");
            assert_eq!(body["max_tokens"], 20);
        }

        #[test]
        fn test_endpoint_appends_path() {
            let client = client_with(CompletionSettings::default());
            assert_eq!(
                client.endpoint(),
                "https://api.openai.com/v1/chat/completions"
            );
        }

        #[test]
        fn test_endpoint_trims_trailing_slash() {
            let client = client_with(CompletionSettings {
                api_base_url: "http://localhost:8080/v1/".to_string(),
                ..Default::default()
            });
            assert_eq!(client.endpoint(), "http://localhost:8080/v1/chat/completions");
        }
    }

    mod reply {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_parse_first_choice() {
            let body = r#"{"choices":[{"message":{"role":"assistant","content":"32"}},{"message":{"content":"99"}}]}"#;
            assert_eq!(parse_reply(body).unwrap(), "32");
        }

        #[test]
        fn test_parse_ignores_extra_fields() {
            let body = r#"{"id":"cmpl-1","object":"chat.completion","choices":[{"index":0,"message":{"role":"assistant","content":"$45.00"},"finish_reason":"stop"}],"usage":{"total_tokens":12}}"#;
            assert_eq!(parse_reply(body).unwrap(), "$45.00");
        }

        #[test]
        fn test_parse_empty_choices_is_malformed() {
            let err = parse_reply(r#"{"choices":[]}"#).unwrap_err();
            assert!(matches!(err, TransportError::MalformedResponse(_)));
        }

        #[test]
        fn test_parse_null_content_is_malformed() {
            let err = parse_reply(r#"{"choices":[{"message":{"content":null}}]}"#).unwrap_err();
            assert!(matches!(err, TransportError::MalformedResponse(_)));
        }

        #[test]
        fn test_parse_invalid_json_is_malformed() {
            let err = parse_reply("<html>bad gateway</html>").unwrap_err();
            assert!(matches!(err, TransportError::MalformedResponse(_)));
        }
    }

    #[test]
    fn test_truncate_long_body() {
        let long = "a".repeat(300);
        let cut = truncate(&long, MAX_ERROR_BODY);
        assert_eq!(cut.len(), MAX_ERROR_BODY + 3);
        assert!(cut.ends_with("..."));
    }

    #[test]
    fn test_truncate_short_body_unchanged() {
        assert_eq!(truncate("short", MAX_ERROR_BODY), "short");
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let settings = CompletionSettings {
            api_key: Some("sk-secret".to_string()),
            ..Default::default()
        };
        let debug_str = format!("{:?}", settings);
        assert!(debug_str.contains("<redacted>"));
        assert!(!debug_str.contains("sk-secret"));
    }

    #[tokio::test]
    async fn test_missing_api_key_fails_without_network() {
        let client = client_with(CompletionSettings {
            api_base_url: "http://127.0.0.1:9".to_string(),
            ..Default::default()
        });
        let err = client.get_completion("anything").await.unwrap_err();
        assert!(matches!(err, TransportError::MissingApiKey));
    }
}
