//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Generation Ports
//!
//! - `AIProvider` - Typed, fallible access to a remote model
//! - `SourceAdapter` - Infallible `generate(prompt) -> Option<String>` link of the fallback chain
//!
//! ## Storage Ports
//!
//! - `ConversationRepository` - Conversation history for the chat API
//! - `PreferenceStore` - Display-surface preferences

mod ai_provider;
mod conversation_repository;
mod preference_store;
mod source_adapter;

pub use ai_provider::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, ProviderInfo,
};
pub use conversation_repository::ConversationRepository;
pub use preference_store::{is_valid_preference_key, PreferenceStore, MAX_PREFERENCE_KEY_LEN};
pub use source_adapter::SourceAdapter;
