//! HTTP client for the remote text-generation backend.
//!
//! Speaks the OpenAI-compatible chat-completions wire format. The client is
//! blocking; async callers go through `tokio::task::spawn_blocking`.

use serde::{Deserialize, Serialize};

/// Errors from the text-generation backend.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("Generation backend is not reachable at {0}")]
    Connection(String),
    #[error("Generation backend returned error (status {status}): {body}")]
    Backend { status: u16, body: String },
    #[error("HTTP client error: {0}")]
    HttpClient(String),
    #[error("Malformed backend response: {0}")]
    ResponseParsing(String),
}

/// Text-generation abstraction (allows mocking).
pub trait TextGenerator: Send + Sync {
    fn generate(&self, system: &str, prompt: &str) -> Result<String, GenerationError>;
}

/// Client for an OpenAI-compatible chat-completions endpoint.
pub struct GptClient {
    base_url: String,
    model: String,
    api_key: Option<String>,
    client: reqwest::blocking::Client,
    timeout_secs: u64,
}

impl GptClient {
    pub fn new(base_url: &str, model: &str, api_key: Option<String>, timeout_secs: u64) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
            api_key,
            client,
            timeout_secs,
        }
    }

    /// Build a client from the environment.
    ///
    /// `CHARTSCRIBE_GPT_URL` selects the backend (absent → `None`, the
    /// service falls back to local drafts). `CHARTSCRIBE_GPT_MODEL` and
    /// `CHARTSCRIBE_GPT_KEY` are optional.
    pub fn from_env() -> Option<Self> {
        let base_url = std::env::var("CHARTSCRIBE_GPT_URL").ok()?;
        let model = std::env::var("CHARTSCRIBE_GPT_MODEL")
            .unwrap_or_else(|_| "gpt-4o-mini".to_string());
        let api_key = std::env::var("CHARTSCRIBE_GPT_KEY").ok();
        Some(Self::new(&base_url, &model, api_key, 120))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

/// Request body for /v1/chat/completions
#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// Response body from /v1/chat/completions
#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Deserialize)]
struct ChatResponseMessage {
    content: String,
}

impl TextGenerator for GptClient {
    fn generate(&self, system: &str, prompt: &str) -> Result<String, GenerationError> {
        let url = format!("{}/v1/chat/completions", self.base_url);
        let body = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
        };

        let mut request = self.client.post(&url).json(&body);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().map_err(|e| {
            if e.is_connect() {
                GenerationError::Connection(self.base_url.clone())
            } else if e.is_timeout() {
                GenerationError::HttpClient(format!(
                    "Request timed out after {}s",
                    self.timeout_secs
                ))
            } else {
                GenerationError::HttpClient(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(GenerationError::Backend {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatResponse = response
            .json()
            .map_err(|e| GenerationError::ResponseParsing(e.to_string()))?;

        let choice = parsed
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| GenerationError::ResponseParsing("empty choices array".into()))?;

        Ok(choice.message.content.trim().to_string())
    }
}

/// Mock generator for testing — returns a configurable response or error.
pub struct MockGenerator {
    response: Result<String, String>,
}

impl MockGenerator {
    pub fn new(response: &str) -> Self {
        Self {
            response: Ok(response.to_string()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            response: Err(message.to_string()),
        }
    }
}

impl TextGenerator for MockGenerator {
    fn generate(&self, _system: &str, _prompt: &str) -> Result<String, GenerationError> {
        match &self.response {
            Ok(text) => Ok(text.clone()),
            Err(msg) => Err(GenerationError::Backend {
                status: 500,
                body: msg.clone(),
            }),
        }
    }
}
