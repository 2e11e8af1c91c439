//! DeleteConversationHandler - discards a conversation and its history.

use std::sync::Arc;

use crate::domain::foundation::{ConversationId, DomainError, ErrorCode};
use crate::ports::ConversationRepository;

/// Command to discard a conversation.
#[derive(Debug, Clone)]
pub struct DeleteConversationCommand {
    pub conversation_id: ConversationId,
}

/// Handler for deleting conversations.
pub struct DeleteConversationHandler {
    repository: Arc<dyn ConversationRepository>,
}

impl DeleteConversationHandler {
    pub fn new(repository: Arc<dyn ConversationRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: DeleteConversationCommand) -> Result<(), DomainError> {
        if self.repository.delete(&cmd.conversation_id).await? {
            tracing::info!(conversation_id = %cmd.conversation_id, "conversation discarded");
            Ok(())
        } else {
            Err(DomainError::new(
                ErrorCode::ConversationNotFound,
                format!("Conversation not found: {}", cmd.conversation_id),
            )
            .with_detail("conversation_id", cmd.conversation_id.to_string()))
        }
    }
}
