//! Text-generation provider abstraction.
//!
//! The remote endpoint is an opaque dependency: it may be slow, unreachable,
//! or answer with either plain text or a JSON-wrapped message.

pub mod mock;
pub mod pollinations;

use async_trait::async_trait;
use service_core::error::AppError;
use thiserror::Error;

/// Error type for provider operations.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("request timed out")]
    Timeout,

    #[error("connection failed: {0}")]
    Unreachable(String),

    #[error("upstream returned status {0}")]
    UpstreamStatus(u16),

    #[error("network error: {0}")]
    Network(String),
}

impl From<ProviderError> for AppError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::Timeout => AppError::UpstreamTimeout,
            ProviderError::Unreachable(reason) => {
                tracing::error!("Upstream unreachable: {}", reason);
                AppError::UpstreamUnavailable
            }
            // The status code is logged, never surfaced to the caller.
            ProviderError::UpstreamStatus(status) => {
                tracing::error!(status, "Pollinations API error");
                AppError::UpstreamError
            }
            ProviderError::Network(reason) => AppError::InternalError(anyhow::anyhow!(reason)),
        }
    }
}

/// Trait for text-generation providers.
#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Send the prompt and return the generated brief text.
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError>;
}
