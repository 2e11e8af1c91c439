//! AI provider configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use super::server::MAX_TIMEOUT_SECS;

/// AI provider configuration
///
/// The Gemini model backs the secondary step of the fallback chain. The
/// primary step talks to a local Ollama server when `primary_base_url` is
/// set and declines every request otherwise.
#[derive(Clone, Deserialize)]
pub struct AiConfig {
    /// Gemini API key
    pub gemini_api_key: Option<String>,

    /// Gemini model identifier
    #[serde(default = "default_gemini_model")]
    pub gemini_model: String,

    /// Gemini API root
    #[serde(default = "default_gemini_base_url")]
    pub gemini_base_url: String,

    /// Local model server root, e.g. http://localhost:11434
    pub primary_base_url: Option<String>,

    /// Local model tag
    #[serde(default = "default_primary_model")]
    pub primary_model: String,

    /// Per-source timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Cap on generated tokens; unset lets each model use its own limit
    pub max_output_tokens: Option<u32>,

    /// Sampling temperature; unset keeps the model default
    pub temperature: Option<f32>,
}

impl AiConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Check if Gemini is configured
    pub fn has_gemini(&self) -> bool {
        self.gemini_api_key.as_ref().is_some_and(|k| !k.is_empty())
    }

    /// Check if a local primary model is configured
    pub fn has_primary(&self) -> bool {
        self.primary_base_url.as_ref().is_some_and(|u| !u.is_empty())
    }

    /// Validate AI configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.has_gemini() && !self.has_primary() {
            return Err(ValidationError::NoAiProviderConfigured);
        }
        if self.timeout_secs == 0 || self.timeout_secs > MAX_TIMEOUT_SECS {
            return Err(ValidationError::InvalidTimeout(
                "ai.timeout_secs must be between 1 and 300",
            ));
        }
        if !is_http_url(&self.gemini_base_url) {
            return Err(ValidationError::InvalidUrl("ai.gemini_base_url"));
        }
        if self.max_output_tokens == Some(0) {
            return Err(ValidationError::InvalidGenerationOption(
                "ai.max_output_tokens must be at least 1",
            ));
        }
        if let Some(temperature) = self.temperature {
            if !(0.0..=2.0).contains(&temperature) {
                return Err(ValidationError::InvalidGenerationOption(
                    "ai.temperature must be between 0.0 and 2.0",
                ));
            }
        }
        if let Some(url) = self.primary_base_url.as_deref().filter(|u| !u.is_empty()) {
            if !is_http_url(url) {
                return Err(ValidationError::InvalidUrl("ai.primary_base_url"));
            }
        }
        Ok(())
    }
}

impl std::fmt::Debug for AiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AiConfig")
            .field(
                "gemini_api_key",
                &self.gemini_api_key.as_ref().map(|_| "[REDACTED]"),
            )
            .field("gemini_model", &self.gemini_model)
            .field("gemini_base_url", &self.gemini_base_url)
            .field("primary_base_url", &self.primary_base_url)
            .field("primary_model", &self.primary_model)
            .field("timeout_secs", &self.timeout_secs)
            .field("max_output_tokens", &self.max_output_tokens)
            .field("temperature", &self.temperature)
            .finish()
    }
}

fn is_http_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            gemini_api_key: None,
            gemini_model: default_gemini_model(),
            gemini_base_url: default_gemini_base_url(),
            primary_base_url: None,
            primary_model: default_primary_model(),
            timeout_secs: default_timeout(),
            max_output_tokens: None,
            temperature: None,
        }
    }
}

fn default_gemini_model() -> String {
    "gemini-1.5-flash-latest".to_string()
}

fn default_gemini_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_primary_model() -> String {
    "llama3".to_string()
}

fn default_timeout() -> u64 {
    60
}
