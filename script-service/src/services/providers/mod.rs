//! Generative-text provider abstractions and implementations.
//!
//! A trait-based seam over the two backends (Gemini for idea batches, Groq
//! for scripts) so handlers and tests can swap in mocks.

pub mod gemini;
pub mod groq;
pub mod mock;

use async_trait::async_trait;
use std::pin::Pin;
use thiserror::Error;
use tokio_stream::Stream;

/// Error type for provider operations.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Rate limited")]
    RateLimited,

    #[error("Provider returned no content")]
    Empty,

    #[error("Network error: {0}")]
    NetworkError(String),
}

/// Type alias for provider streams: a sequential, finite source of text
/// fragments in delivery order.
pub type ProviderStream = Pin<Box<dyn Stream<Item = Result<String, ProviderError>> + Send>>;

/// Sampling and length parameters for a generation request.
#[derive(Debug, Clone, Default)]
pub struct GenerationParams {
    /// Temperature (0.0 - 2.0).
    pub temperature: Option<f32>,

    /// Maximum output tokens.
    pub max_tokens: Option<i32>,
}

/// Trait for text generation providers.
#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Generate a single text blob.
    async fn generate(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<String, ProviderError>;

    /// Generate text incrementally.
    async fn generate_stream(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<ProviderStream, ProviderError>;

    /// Health check.
    ///
    /// Not consulted by the request path; the service's `/health` endpoint
    /// is a liveness probe and must not fan out to provider APIs. Exposed
    /// for operator tooling and tests to verify provider configuration.
    async fn health_check(&self) -> Result<(), ProviderError>;
}
