//! Mock provider implementations for testing.

use super::{GenerationParams, ProviderError, ProviderStream, TextProvider};
use async_trait::async_trait;

/// Mock text provider that replays canned output.
pub struct MockTextProvider {
    reply: Option<String>,
    fragments: Vec<String>,
    fail: bool,
    fail_mid_stream: bool,
}

impl MockTextProvider {
    /// Provider whose `generate` returns the given blob and whose
    /// `generate_stream` yields it as a single fragment.
    pub fn with_reply(reply: impl Into<String>) -> Self {
        let reply = reply.into();
        Self {
            fragments: vec![reply.clone()],
            reply: Some(reply),
            fail: false,
            fail_mid_stream: false,
        }
    }

    /// Provider whose `generate_stream` yields the given fragments in order
    /// and whose `generate` returns their concatenation.
    pub fn with_fragments(fragments: Vec<&str>) -> Self {
        let fragments: Vec<String> = fragments.into_iter().map(String::from).collect();
        Self {
            reply: Some(fragments.concat()),
            fragments,
            fail: false,
            fail_mid_stream: false,
        }
    }

    /// Provider whose `generate_stream` yields the given fragments and then
    /// a network error.
    pub fn with_fragments_then_error(fragments: Vec<&str>) -> Self {
        let fragments: Vec<String> = fragments.into_iter().map(String::from).collect();
        Self {
            reply: Some(fragments.concat()),
            fragments,
            fail: false,
            fail_mid_stream: true,
        }
    }

    /// Provider where every call fails with an API error.
    pub fn failing() -> Self {
        Self {
            reply: None,
            fragments: Vec::new(),
            fail: true,
            fail_mid_stream: false,
        }
    }
}

#[async_trait]
impl TextProvider for MockTextProvider {
    async fn generate(
        &self,
        _prompt: &str,
        _params: &GenerationParams,
    ) -> Result<String, ProviderError> {
        if self.fail {
            return Err(ProviderError::ApiError("mock provider failure".to_string()));
        }

        self.reply.clone().ok_or(ProviderError::Empty)
    }

    async fn generate_stream(
        &self,
        _prompt: &str,
        _params: &GenerationParams,
    ) -> Result<ProviderStream, ProviderError> {
        if self.fail {
            return Err(ProviderError::ApiError("mock provider failure".to_string()));
        }

        let mut chunks: Vec<Result<String, ProviderError>> =
            self.fragments.iter().cloned().map(Ok).collect();

        if self.fail_mid_stream {
            chunks.push(Err(ProviderError::NetworkError(
                "mock stream interrupted".to_string(),
            )));
        }

        Ok(Box::pin(tokio_stream::iter(chunks)))
    }

    async fn health_check(&self) -> Result<(), ProviderError> {
        if self.fail {
            Err(ProviderError::NotConfigured(
                "mock provider failure".to_string(),
            ))
        } else {
            Ok(())
        }
    }
}
