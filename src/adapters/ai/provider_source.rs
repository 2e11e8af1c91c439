//! Provider Source - adapts a fallible `AIProvider` to the `SourceAdapter` contract.

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::ports::{AIProvider, CompletionRequest, FinishReason, SourceAdapter};

/// Wraps an [`AIProvider`] so every failure becomes `None`.
///
/// The typed error is logged here, next to where it happened, and never
/// reaches the orchestrator.
pub struct ProviderSource<P: AIProvider> {
    provider: P,
    label: String,
    max_tokens: Option<u32>,
    temperature: Option<f32>,
}

impl<P: AIProvider> ProviderSource<P> {
    /// Creates a source labelled with the provider's name.
    pub fn new(provider: P) -> Self {
        let label = provider.provider_info().name;
        Self {
            provider,
            label,
            max_tokens: None,
            temperature: None,
        }
    }

    /// Caps the length of generated answers.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Sets the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Returns the wrapped provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }
}

#[async_trait]
impl<P: AIProvider + 'static> SourceAdapter for ProviderSource<P> {
    async fn generate(&self, prompt: &str) -> Option<String> {
        let mut request = CompletionRequest::new(prompt);
        if let Some(max) = self.max_tokens {
            request = request.with_max_tokens(max);
        }
        if let Some(temperature) = self.temperature {
            request = request.with_temperature(temperature);
        }

        match self.provider.complete(request).await {
            Ok(response) => {
                if response.finish_reason == FinishReason::Length {
                    warn!(source = %self.label, "completion truncated at the token limit");
                }
                debug!(
                    source = %self.label,
                    model = %response.model,
                    chars = response.content.chars().count(),
                    "provider returned completion"
                );
                Some(response.content)
            }
            Err(err) => {
                warn!(source = %self.label, error = %err, "provider failed, treating as no result");
                None
            }
        }
    }

    fn name(&self) -> &str {
        &self.label
    }
}
