//! HTTP DTOs for the chat API.
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::assistant::{AssistantReply, ChatMessage, MessageRole, ResponseSource};
use crate::domain::conversation::{Conversation, ConversationSummary};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Body of `POST /api/assistant/reply`.
///
/// `query` is kept as raw JSON so that a missing or non-string value can be
/// routed as empty text instead of failing deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReplyRequest {
    #[serde(default)]
    pub query: Value,
}

impl ReplyRequest {
    /// The query text; anything but a JSON string reads as empty.
    pub fn query_text(&self) -> &str {
        self.query.as_str().unwrap_or("")
    }
}

/// Body of `POST /api/chat`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageRequest {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub conversation_id: Option<String>,
}

/// Body of `PUT /api/preferences/:key`.
#[derive(Debug, Clone, Deserialize)]
pub struct SetPreferenceRequest {
    pub value: Value,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Liveness check body.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// A reply from the assistant core.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplyView {
    pub content: String,
    pub source: ResponseSource,
    pub timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnostic: Option<String>,
}

impl ReplyView {
    /// Builds the view; `diagnostic` is only copied when `verbose` is set.
    pub fn from_reply(reply: &AssistantReply, verbose: bool) -> Self {
        Self {
            content: reply.content.clone(),
            source: reply.source,
            timestamp: reply.timestamp.to_rfc3339(),
            diagnostic: if verbose {
                reply.diagnostic.clone()
            } else {
                None
            },
        }
    }
}

/// View of a message for API responses.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageView {
    pub id: String,
    pub role: MessageRole,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<ResponseSource>,
    pub timestamp: String,
}

impl From<&ChatMessage> for MessageView {
    fn from(message: &ChatMessage) -> Self {
        Self {
            id: message.id().to_string(),
            role: message.role(),
            content: message.content().to_string(),
            source: message.source(),
            timestamp: message.timestamp().to_rfc3339(),
        }
    }
}

/// Response of `POST /api/chat`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageResponse {
    pub conversation_id: String,
    pub title: String,
    pub created: bool,
    pub user_message: MessageView,
    pub assistant_message: MessageView,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnostic: Option<String>,
}

/// Sidebar entry.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationSummaryView {
    pub id: String,
    pub title: String,
    pub message_count: usize,
    pub created_at: String,
    pub last_activity: String,
}

impl From<&ConversationSummary> for ConversationSummaryView {
    fn from(summary: &ConversationSummary) -> Self {
        Self {
            id: summary.id.to_string(),
            title: summary.title.clone(),
            message_count: summary.message_count,
            created_at: summary.created_at.to_rfc3339(),
            last_activity: summary.last_activity.to_rfc3339(),
        }
    }
}

/// Full conversation with its messages in order.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationView {
    pub id: String,
    pub title: String,
    pub created_at: String,
    pub last_activity: String,
    pub messages: Vec<MessageView>,
}

impl From<&Conversation> for ConversationView {
    fn from(conversation: &Conversation) -> Self {
        Self {
            id: conversation.id().to_string(),
            title: conversation.title().to_string(),
            created_at: conversation.created_at().to_rfc3339(),
            last_activity: conversation.last_activity().to_rfc3339(),
            messages: conversation.messages().iter().map(MessageView::from).collect(),
        }
    }
}

/// A stored preference.
#[derive(Debug, Clone, Serialize)]
pub struct PreferenceView {
    pub key: String,
    pub value: Value,
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Response
// ════════════════════════════════════════════════════════════════════════════════

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
        }
    }

    pub fn not_found(resource_type: &str, id: &str) -> Self {
        Self {
            code: "NOT_FOUND".to_string(),
            message: format!("{} not found: {}", resource_type, id),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
        }
    }
}
