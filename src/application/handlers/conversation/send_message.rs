//! SendMessage command handler.
//!
//! Runs one user message through the assistant core and records the exchange,
//! starting a new conversation when no conversation id is given.

use std::sync::Arc;
use thiserror::Error;

use crate::application::ChatOrchestrator;
use crate::domain::assistant::{AssistantReply, ChatMessage};
use crate::domain::conversation::Conversation;
use crate::domain::foundation::{ConversationId, DomainError, ErrorCode};
use crate::ports::ConversationRepository;

/// Command to send a message.
#[derive(Debug, Clone)]
pub struct SendMessageCommand {
    /// Conversation to continue; `None` starts a new one.
    pub conversation_id: Option<ConversationId>,
    /// The message content.
    pub content: String,
}

impl SendMessageCommand {
    /// Starts a new conversation with `content`.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            conversation_id: None,
            content: content.into(),
        }
    }

    /// Continues an existing conversation.
    pub fn in_conversation(mut self, id: ConversationId) -> Self {
        self.conversation_id = Some(id);
        self
    }
}

/// Errors that can occur when sending a message.
#[derive(Debug, Clone, Error)]
pub enum SendMessageError {
    /// Message content is empty or whitespace only.
    #[error("Validation error: message content cannot be empty")]
    EmptyContent,

    /// The conversation to continue does not exist.
    #[error("Conversation not found: {0}")]
    ConversationNotFound(ConversationId),

    /// Repository error during persistence.
    #[error("Repository error: {0}")]
    Repository(String),
}

impl From<DomainError> for SendMessageError {
    fn from(err: DomainError) -> Self {
        SendMessageError::Repository(err.to_string())
    }
}

/// Result of sending a message.
#[derive(Debug, Clone)]
pub struct SendMessageResult {
    pub conversation_id: ConversationId,
    pub title: String,
    /// True if this exchange started the conversation.
    pub created: bool,
    pub user_message: ChatMessage,
    pub assistant_message: ChatMessage,
    /// The core's reply, including any operator diagnostic.
    pub reply: AssistantReply,
}

/// Handler for SendMessage commands.
pub struct SendMessageHandler {
    orchestrator: Arc<ChatOrchestrator>,
    repository: Arc<dyn ConversationRepository>,
}

impl SendMessageHandler {
    pub fn new(
        orchestrator: Arc<ChatOrchestrator>,
        repository: Arc<dyn ConversationRepository>,
    ) -> Self {
        Self {
            orchestrator,
            repository,
        }
    }

    /// Handles a send message command.
    ///
    /// The conversation is checked before the core runs so an unknown id
    /// never costs a model call.
    pub async fn handle(
        &self,
        cmd: SendMessageCommand,
    ) -> Result<SendMessageResult, SendMessageError> {
        if cmd.content.trim().is_empty() {
            return Err(SendMessageError::EmptyContent);
        }
        let content = cmd.content.as_str();

        if let Some(id) = cmd.conversation_id {
            if self.repository.find_by_id(&id).await?.is_none() {
                return Err(SendMessageError::ConversationNotFound(id));
            }
        }

        let reply = self.orchestrator.handle(content).await;
        let user_message = ChatMessage::user(content);
        let assistant_message = ChatMessage::assistant(&reply);

        let (conversation, created) = match cmd.conversation_id {
            Some(id) => {
                let updated = self
                    .repository
                    .append_exchange(&id, user_message.clone(), assistant_message.clone())
                    .await
                    .map_err(|e| match e.code() {
                        // Discarded while the core was answering.
                        ErrorCode::ConversationNotFound => {
                            SendMessageError::ConversationNotFound(id)
                        }
                        _ => e.into(),
                    })?;
                (updated, false)
            }
            None => {
                let conversation = Conversation::start(
                    &ChatOrchestrator::welcome(),
                    user_message.clone(),
                    assistant_message.clone(),
                );
                self.repository.insert(conversation.clone()).await?;
                (conversation, true)
            }
        };

        tracing::debug!(
            conversation_id = %conversation.id(),
            created,
            source = %reply.source,
            "exchange recorded"
        );

        Ok(SendMessageResult {
            conversation_id: conversation.id(),
            title: conversation.title().to_string(),
            created,
            user_message,
            assistant_message,
            reply,
        })
    }
}
