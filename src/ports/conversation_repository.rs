//! Conversation Repository Port - storage for chat threads.

use async_trait::async_trait;

use crate::domain::assistant::ChatMessage;
use crate::domain::conversation::{Conversation, ConversationSummary};
use crate::domain::foundation::{ConversationId, DomainError};

/// Port for conversation storage.
///
/// The assistant core never touches this port; application handlers use it
/// to record exchanges produced by the core.
#[async_trait]
pub trait ConversationRepository: Send + Sync {
    /// Stores a newly started conversation.
    async fn insert(&self, conversation: Conversation) -> Result<(), DomainError>;

    /// Appends one exchange to an existing conversation.
    ///
    /// Must be atomic with respect to other appends on the same conversation.
    /// Returns the updated conversation.
    ///
    /// # Errors
    ///
    /// `ConversationNotFound` if the conversation does not exist.
    async fn append_exchange(
        &self,
        id: &ConversationId,
        user: ChatMessage,
        assistant: ChatMessage,
    ) -> Result<Conversation, DomainError>;

    /// Finds a conversation by ID.
    async fn find_by_id(&self, id: &ConversationId) -> Result<Option<Conversation>, DomainError>;

    /// Lists conversations, most recently created first.
    async fn list(&self) -> Result<Vec<ConversationSummary>, DomainError>;

    /// Discards a conversation.
    ///
    /// Returns false if no conversation had that ID.
    async fn delete(&self, id: &ConversationId) -> Result<bool, DomainError>;
}
