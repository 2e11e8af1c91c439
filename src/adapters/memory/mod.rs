//! In-memory storage adapters.
//!
//! Conversation history and preferences live for the lifetime of the process.

mod conversation_repository;
mod preference_store;

pub use conversation_repository::InMemoryConversationRepository;
pub use preference_store::InMemoryPreferenceStore;
