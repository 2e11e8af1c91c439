//! GetConversationHandler - Query handler for one conversation.

use std::sync::Arc;

use crate::domain::conversation::Conversation;
use crate::domain::foundation::{ConversationId, DomainError, ErrorCode};
use crate::ports::ConversationRepository;

/// Query to get a conversation.
#[derive(Debug, Clone)]
pub struct GetConversationQuery {
    pub conversation_id: ConversationId,
}

/// Handler for getting conversations.
pub struct GetConversationHandler {
    repository: Arc<dyn ConversationRepository>,
}

impl GetConversationHandler {
    pub fn new(repository: Arc<dyn ConversationRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetConversationQuery) -> Result<Conversation, DomainError> {
        match self.repository.find_by_id(&query.conversation_id).await? {
            Some(conversation) => Ok(conversation),
            None => Err(DomainError::new(
                ErrorCode::ConversationNotFound,
                format!("Conversation not found: {}", query.conversation_id),
            )
            .with_detail("conversation_id", query.conversation_id.to_string())),
        }
    }
}
