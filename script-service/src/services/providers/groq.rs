//! Groq provider implementation.
//!
//! Chat completions against Groq's OpenAI-compatible API. Streaming mode
//! delivers `data:` SSE events with delta fragments, terminated by
//! `data: [DONE]`.

use super::{GenerationParams, ProviderError, ProviderStream, TextProvider};
use async_trait::async_trait;
use futures::StreamExt;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;

/// Groq chat completions endpoint.
const GROQ_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";

/// Groq provider configuration.
#[derive(Debug, Clone)]
pub struct GroqConfig {
    pub api_key: String,
    pub model: String,
}

/// Groq text provider.
pub struct GroqProvider {
    config: GroqConfig,
    client: Client,
}

impl GroqProvider {
    pub fn new(config: GroqConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(120))
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    fn build_request(
        &self,
        prompt: &str,
        params: &GenerationParams,
        stream: bool,
    ) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: self.config.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
            max_completion_tokens: params.max_tokens,
            temperature: params.temperature,
            stream,
        }
    }

    async fn send(&self, request: &ChatCompletionRequest) -> Result<reqwest::Response, ProviderError> {
        let response = self
            .client
            .post(GROQ_API_URL)
            .bearer_auth(&self.config.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| ProviderError::NetworkError(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();

            if status.as_u16() == 429 {
                return Err(ProviderError::RateLimited);
            }

            return Err(ProviderError::ApiError(format!(
                "Groq API error {}: {}",
                status, error_text
            )));
        }

        Ok(response)
    }
}

#[async_trait]
impl TextProvider for GroqProvider {
    async fn generate(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<String, ProviderError> {
        let request = self.build_request(prompt, params, false);

        tracing::debug!(
            model = %self.config.model,
            prompt_len = prompt.len(),
            "Sending request to Groq API"
        );

        let response = self.send(&request).await?;

        let api_response: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::ApiError(format!("Failed to parse response: {}", e)))?;

        api_response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message)
            .and_then(|m| m.content)
            .ok_or(ProviderError::Empty)
    }

    async fn generate_stream(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<ProviderStream, ProviderError> {
        let request = self.build_request(prompt, params, true);

        tracing::debug!(
            model = %self.config.model,
            prompt_len = prompt.len(),
            "Starting streaming request to Groq API"
        );

        let response = self.send(&request).await?;

        let (tx, rx) = mpsc::channel(32);

        // Consume the SSE byte stream, forwarding each delta fragment until
        // the [DONE] sentinel.
        tokio::spawn(async move {
            let mut stream = response.bytes_stream();
            let mut buffer = String::new();

            while let Some(chunk_result) = stream.next().await {
                match chunk_result {
                    Ok(chunk) => {
                        buffer.push_str(&String::from_utf8_lossy(&chunk));

                        while let Some(line_end) = buffer.find('\n') {
                            let line = buffer[..line_end].trim().to_string();
                            buffer = buffer[line_end + 1..].to_string();

                            match parse_stream_line(&line) {
                                Some(StreamEvent::Done) => return,
                                Some(StreamEvent::Fragment(fragment)) => {
                                    if tx.send(Ok(fragment)).await.is_err() {
                                        return;
                                    }
                                }
                                None => {}
                            }
                        }
                    }
                    Err(e) => {
                        let _ = tx
                            .send(Err(ProviderError::NetworkError(e.to_string())))
                            .await;
                        return;
                    }
                }
            }
        });

        Ok(Box::pin(ReceiverStream::new(rx)) as ProviderStream)
    }

    async fn health_check(&self) -> Result<(), ProviderError> {
        if self.config.api_key.is_empty() {
            return Err(ProviderError::NotConfigured(
                "Groq API key not configured".to_string(),
            ));
        }

        Ok(())
    }
}

/// What one SSE line contributes to the stream.
#[derive(Debug, PartialEq)]
enum StreamEvent {
    Fragment(String),
    Done,
}

/// Parse one SSE line.
///
/// Non-`data:` lines, malformed payloads, deltas without content (such as
/// the initial role-only delta), and empty fragments all yield nothing;
/// `data: [DONE]` terminates the stream.
fn parse_stream_line(line: &str) -> Option<StreamEvent> {
    let data = line.strip_prefix("data: ")?;

    if data == "[DONE]" {
        return Some(StreamEvent::Done);
    }

    let chunk: ChatCompletionChunk = serde_json::from_str(data).ok()?;
    let fragment = chunk.choices.into_iter().next()?.delta?.content?;

    if fragment.is_empty() {
        None
    } else {
        Some(StreamEvent::Fragment(fragment))
    }
}

// ============================================================================
// Groq API Request/Response Types (OpenAI-compatible)
// ============================================================================

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_completion_tokens: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    stream: bool,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Option<ResponseMessage>,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionChunk {
    #[serde(default)]
    choices: Vec<ChunkChoice>,
}

#[derive(Debug, Deserialize)]
struct ChunkChoice {
    delta: Option<Delta>,
}

#[derive(Debug, Deserialize)]
struct Delta {
    content: Option<String>,
}
