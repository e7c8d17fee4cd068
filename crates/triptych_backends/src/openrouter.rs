//! OpenRouter chat-completions client.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use triptych_core::{Role, Turn};
use triptych_error::{GenerationError, GenerationErrorKind, TriptychResult};
use triptych_interface::TextGenerator;
use tracing::{debug, instrument};

/// Environment variable holding the OpenRouter API key.
pub const OPENROUTER_API_KEY: &str = "OPENROUTER_API_KEY";

const DEFAULT_ENDPOINT: &str = "https://openrouter.ai/api/v1/chat/completions";

/// OpenAI-compatible chat-completions request body.
#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: Role,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    content: String,
}

/// OpenRouter chat-completions API client.
///
/// The model identifier travels with each request, so one client serves
/// both the document model and the status-message model.
#[derive(Debug, Clone)]
pub struct OpenRouterClient {
    client: reqwest::Client,
    api_key: String,
    endpoint: String,
}

impl OpenRouterClient {
    /// Creates a new OpenRouter client.
    ///
    /// Reads the API token from the `OPENROUTER_API_KEY` environment
    /// variable.
    ///
    /// # Errors
    ///
    /// Returns an error if the API token is not set.
    #[instrument(skip_all)]
    pub fn new() -> TriptychResult<Self> {
        let api_key = std::env::var(OPENROUTER_API_KEY).map_err(|_| {
            GenerationError::new(GenerationErrorKind::MissingApiKey(
                OPENROUTER_API_KEY.to_string(),
            ))
        })?;

        Ok(Self::with_api_key(api_key))
    }

    /// Creates a new OpenRouter client with an explicit API key.
    pub fn with_api_key(api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }

    /// Overrides the chat-completions endpoint (for proxies and tests).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

#[async_trait]
impl TextGenerator for OpenRouterClient {
    #[instrument(skip(self, turns), fields(provider = "openrouter", model = %model, turn_count = turns.len()))]
    async fn complete(&self, turns: &[Turn], model: &str) -> TriptychResult<String> {
        let request = ChatRequest {
            model,
            messages: turns
                .iter()
                .map(|turn| ChatMessage {
                    role: turn.role,
                    content: &turn.content,
                })
                .collect(),
        };

        debug!(endpoint = %self.endpoint, "Sending chat-completions request");

        let response = self
            .client
            .post(&self.endpoint)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                GenerationError::new(GenerationErrorKind::Request(format!(
                    "Request failed: {}",
                    e
                )))
            })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(GenerationError::new(GenerationErrorKind::Api { status, message }).into());
        }

        let chat: ChatResponse = response.json().await.map_err(|e| {
            GenerationError::new(GenerationErrorKind::ResponseParsing(format!(
                "Failed to parse response: {}",
                e
            )))
        })?;

        let completion = chat
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| GenerationError::new(GenerationErrorKind::EmptyCompletion))?;

        debug!(completion_len = completion.len(), "Received completion");
        Ok(completion)
    }

    fn provider_name(&self) -> &'static str {
        "openrouter"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_lowercase_roles() {
        let turns = vec![
            Turn::system("You write apps."),
            Turn::user("App idea: todo list"),
        ];
        let request = ChatRequest {
            model: "anthropic/claude-3.5-sonnet",
            messages: turns
                .iter()
                .map(|turn| ChatMessage {
                    role: turn.role,
                    content: &turn.content,
                })
                .collect(),
        };

        let json = serde_json::to_value(&request).expect("serializes");
        assert_eq!(json["model"], "anthropic/claude-3.5-sonnet");
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["role"], "user");
        assert_eq!(json["messages"][1]["content"], "App idea: todo list");
    }

    #[test]
    fn response_parses_first_choice() {
        let body = r#"{"choices":[{"message":{"role":"assistant","content":"hello"}}]}"#;
        let parsed: ChatResponse = serde_json::from_str(body).expect("parses");
        assert_eq!(parsed.choices[0].message.content, "hello");
    }
}
