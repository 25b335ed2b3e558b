//! Mock provider for testing.

use super::{ProviderError, TextProvider};
use async_trait::async_trait;
use std::sync::Mutex;

/// Outcome the mock provider answers with.
#[derive(Debug, Clone)]
pub enum MockOutcome {
    Text(String),
    Timeout,
    Unreachable,
    UpstreamStatus(u16),
}

/// Mock text provider. Records every prompt it receives and answers with a
/// canned outcome.
pub struct MockTextProvider {
    outcome: MockOutcome,
    prompts: Mutex<Vec<String>>,
}

impl MockTextProvider {
    pub fn new(outcome: MockOutcome) -> Self {
        Self {
            outcome,
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Prompts received so far, in call order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().expect("prompt log poisoned").clone()
    }

    pub fn call_count(&self) -> usize {
        self.prompts.lock().expect("prompt log poisoned").len()
    }
}

#[async_trait]
impl TextProvider for MockTextProvider {
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError> {
        self.prompts
            .lock()
            .expect("prompt log poisoned")
            .push(prompt.to_string());

        match &self.outcome {
            MockOutcome::Text(text) => Ok(text.clone()),
            MockOutcome::Timeout => Err(ProviderError::Timeout),
            MockOutcome::Unreachable => {
                Err(ProviderError::Unreachable("connection refused".to_string()))
            }
            MockOutcome::UpstreamStatus(status) => Err(ProviderError::UpstreamStatus(*status)),
        }
    }
}
