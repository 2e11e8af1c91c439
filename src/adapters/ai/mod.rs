//! AI Provider Adapters.
//!
//! Implementations of the AIProvider and SourceAdapter ports.
//!
//! ## Available Adapters
//!
//! - `GeminiProvider` - Google Gemini models over the Generative Language API
//! - `OllamaProvider` - Locally hosted open-source model
//! - `MockAIProvider` - Configurable mock for testing
//! - `ProviderSource` - Turns any provider into a chain link that never fails
//! - `UnconfiguredSource` - Chain link for a backend that is not set up
//!
//! `primary_source` and `secondary_source` pick between them from `AiConfig`.

mod gemini_provider;
mod mock_provider;
mod ollama_provider;
mod provider_source;
mod sources;
mod unconfigured_source;

pub use gemini_provider::{
    GeminiConfig, GeminiProvider, DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL,
};
pub use mock_provider::{MockAIProvider, MockError, MockResponse};
pub use ollama_provider::{OllamaConfig, OllamaProvider};
pub use provider_source::ProviderSource;
pub use sources::{primary_source, secondary_source};
pub use unconfigured_source::UnconfiguredSource;
