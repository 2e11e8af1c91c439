//! ListConversationsHandler - Query handler for the conversation sidebar.

use std::sync::Arc;

use crate::domain::conversation::ConversationSummary;
use crate::domain::foundation::DomainError;
use crate::ports::ConversationRepository;

/// Handler for listing conversations, newest first.
pub struct ListConversationsHandler {
    repository: Arc<dyn ConversationRepository>,
}

impl ListConversationsHandler {
    pub fn new(repository: Arc<dyn ConversationRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self) -> Result<Vec<ConversationSummary>, DomainError> {
        self.repository.list().await
    }
}
