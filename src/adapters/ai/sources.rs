//! Builds the two model slots of the fallback chain from configuration.

use std::sync::Arc;

use crate::config::AiConfig;
use crate::ports::{AIError, AIProvider, SourceAdapter};

use super::{
    GeminiConfig, GeminiProvider, OllamaConfig, OllamaProvider, ProviderSource,
    UnconfiguredSource,
};

/// The local model, or a declining placeholder when none is configured.
pub fn primary_source(config: &AiConfig) -> Result<Arc<dyn SourceAdapter>, AIError> {
    let Some(base_url) = config.primary_base_url.as_deref().filter(|u| !u.is_empty()) else {
        return Ok(Arc::new(UnconfiguredSource::new("primary")));
    };

    let provider = OllamaProvider::new(
        OllamaConfig::new(base_url)
            .with_model(&config.primary_model)
            .with_timeout(config.timeout()),
    )?;
    Ok(wrap(provider, config))
}

/// Gemini, or a declining placeholder when no key is configured.
pub fn secondary_source(config: &AiConfig) -> Result<Arc<dyn SourceAdapter>, AIError> {
    let Some(api_key) = config.gemini_api_key.as_deref().filter(|k| !k.is_empty()) else {
        return Ok(Arc::new(UnconfiguredSource::new("secondary")));
    };

    let provider = GeminiProvider::new(
        GeminiConfig::new(api_key)
            .with_model(&config.gemini_model)
            .with_base_url(&config.gemini_base_url)
            .with_timeout(config.timeout()),
    )?;
    Ok(wrap(provider, config))
}

/// Generation options are only sent when configured.
fn wrap<P: AIProvider + 'static>(provider: P, config: &AiConfig) -> Arc<dyn SourceAdapter> {
    let mut source = ProviderSource::new(provider);
    if let Some(max) = config.max_output_tokens {
        source = source.with_max_tokens(max);
    }
    if let Some(temperature) = config.temperature {
        source = source.with_temperature(temperature);
    }
    Arc::new(source)
}
