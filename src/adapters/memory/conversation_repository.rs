//! In-Memory Conversation Repository
//!
//! Holds conversations in a process-local map. History is lost on restart.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::assistant::ChatMessage;
use crate::domain::conversation::{Conversation, ConversationSummary};
use crate::domain::foundation::{ConversationId, DomainError, ErrorCode};
use crate::ports::ConversationRepository;

/// In-memory conversation storage.
#[derive(Debug, Clone, Default)]
pub struct InMemoryConversationRepository {
    conversations: Arc<RwLock<HashMap<ConversationId, Conversation>>>,
}

impl InMemoryConversationRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored conversations
    pub async fn len(&self) -> usize {
        self.conversations.read().await.len()
    }

    /// True if nothing is stored
    pub async fn is_empty(&self) -> bool {
        self.conversations.read().await.is_empty()
    }
}

#[async_trait]
impl ConversationRepository for InMemoryConversationRepository {
    async fn insert(&self, conversation: Conversation) -> Result<(), DomainError> {
        let mut conversations = self.conversations.write().await;
        conversations.insert(conversation.id(), conversation);
        Ok(())
    }

    async fn append_exchange(
        &self,
        id: &ConversationId,
        user: ChatMessage,
        assistant: ChatMessage,
    ) -> Result<Conversation, DomainError> {
        // Held across the whole append so both messages land together.
        let mut conversations = self.conversations.write().await;
        let conversation = conversations.get_mut(id).ok_or_else(|| {
            DomainError::new(ErrorCode::ConversationNotFound, "Conversation not found")
                .with_detail("conversation_id", id.to_string())
        })?;

        conversation.append_exchange(user, assistant);
        Ok(conversation.clone())
    }

    async fn find_by_id(&self, id: &ConversationId) -> Result<Option<Conversation>, DomainError> {
        let conversations = self.conversations.read().await;
        Ok(conversations.get(id).cloned())
    }

    async fn list(&self) -> Result<Vec<ConversationSummary>, DomainError> {
        let conversations = self.conversations.read().await;
        let mut summaries: Vec<ConversationSummary> =
            conversations.values().map(Conversation::summary).collect();
        summaries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(summaries)
    }

    async fn delete(&self, id: &ConversationId) -> Result<bool, DomainError> {
        let mut conversations = self.conversations.write().await;
        Ok(conversations.remove(id).is_some())
    }
}
