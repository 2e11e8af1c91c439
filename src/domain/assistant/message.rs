//! Chat messages and assistant replies.

use serde::{Deserialize, Serialize};

use super::ResponseSource;
use crate::domain::foundation::{MessageId, Timestamp};

/// Role of a message author.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// Person asking the question.
    User,
    /// The consultation assistant.
    Assistant,
}

/// Result of a single `handle` or `welcome` call.
///
/// `diagnostic` carries failure detail for operators only; it is never
/// part of `content`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssistantReply {
    pub content: String,
    pub source: ResponseSource,
    pub timestamp: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diagnostic: Option<String>,
}

impl AssistantReply {
    /// Creates a reply stamped with the current time.
    pub fn new(content: impl Into<String>, source: ResponseSource) -> Self {
        Self {
            content: content.into(),
            source,
            timestamp: Timestamp::now(),
            diagnostic: None,
        }
    }

    /// Attaches operator-facing failure detail.
    pub fn with_diagnostic(mut self, diagnostic: impl Into<String>) -> Self {
        self.diagnostic = Some(diagnostic.into());
        self
    }
}

/// An immutable message in a conversation.
///
/// Assistant messages always carry a source tag; user messages never do.
/// The fields are private so the invariant can only be established through
/// [`ChatMessage::user`] and [`ChatMessage::assistant`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    id: MessageId,
    role: MessageRole,
    content: String,
    source: Option<ResponseSource>,
    timestamp: Timestamp,
}

impl ChatMessage {
    /// Creates a user message stamped now.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            id: MessageId::new(),
            role: MessageRole::User,
            content: content.into(),
            source: None,
            timestamp: Timestamp::now(),
        }
    }

    /// Creates an assistant message from a reply, keeping its timestamp.
    pub fn assistant(reply: &AssistantReply) -> Self {
        Self {
            id: MessageId::new(),
            role: MessageRole::Assistant,
            content: reply.content.clone(),
            source: Some(reply.source),
            timestamp: reply.timestamp,
        }
    }

    pub fn id(&self) -> MessageId {
        self.id
    }

    pub fn role(&self) -> MessageRole {
        self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn source(&self) -> Option<ResponseSource> {
        self.source
    }

    pub fn timestamp(&self) -> Timestamp {
        self.timestamp
    }
}
