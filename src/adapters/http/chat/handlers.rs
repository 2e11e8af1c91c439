//! HTTP handlers for the chat API.
//!
//! These handlers connect Axum routes to the assistant core and the
//! conversation handlers of the application layer.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::{
    ChatOrchestrator, DeleteConversationCommand, DeleteConversationHandler,
    GetConversationHandler, GetConversationQuery, ListConversationsHandler, SendMessageCommand,
    SendMessageError, SendMessageHandler,
};
use crate::domain::foundation::{ConversationId, DomainError, ErrorCode};
use crate::ports::{ConversationRepository, PreferenceStore};

use super::dto::{
    ConversationSummaryView, ConversationView, ErrorResponse, HealthResponse, MessageView,
    PreferenceView, ReplyRequest, ReplyView, SendMessageRequest, SendMessageResponse,
    SetPreferenceRequest,
};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state for chat handlers.
#[derive(Clone)]
pub struct ChatAppState {
    pub orchestrator: Arc<ChatOrchestrator>,
    pub conversations: Arc<dyn ConversationRepository>,
    pub preferences: Arc<dyn PreferenceStore>,
    /// Copy panic diagnostics into responses.
    pub verbose_errors: bool,
}

impl ChatAppState {
    /// Creates a new ChatAppState.
    pub fn new(
        orchestrator: Arc<ChatOrchestrator>,
        conversations: Arc<dyn ConversationRepository>,
        preferences: Arc<dyn PreferenceStore>,
    ) -> Self {
        Self {
            orchestrator,
            conversations,
            preferences,
            verbose_errors: false,
        }
    }

    /// Enables diagnostics in error replies.
    pub fn with_verbose_errors(mut self, verbose: bool) -> Self {
        self.verbose_errors = verbose;
        self
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Assistant core
// ════════════════════════════════════════════════════════════════════════════════

/// GET /health - Liveness check.
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse { status: "ok" })
}

/// GET /api/welcome - The fixed greeting shown on a fresh session.
pub async fn welcome(State(state): State<ChatAppState>) -> impl IntoResponse {
    Json(ReplyView::from_reply(
        &ChatOrchestrator::welcome(),
        state.verbose_errors,
    ))
}

/// POST /api/assistant/reply - Stateless single-query reply.
///
/// Always answers 200 once the body parses; the `source` field says which
/// path produced the text.
///
/// # Errors
/// - 400 Bad Request: Body is not a JSON object
pub async fn assistant_reply(
    State(state): State<ChatAppState>,
    body: Result<Json<ReplyRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ChatApiError> {
    let Json(request) = body.map_err(|e| ChatApiError::BadRequest(e.body_text()))?;

    let reply = state.orchestrator.handle(request.query_text()).await;
    Ok(Json(ReplyView::from_reply(&reply, state.verbose_errors)))
}

// ════════════════════════════════════════════════════════════════════════════════
// Conversations
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/chat - Send a message, optionally continuing a conversation.
///
/// Returns 201 when the message started a new conversation, 200 otherwise.
///
/// # Errors
/// - 400 Bad Request: Empty message or malformed conversation ID
/// - 404 Not Found: Conversation does not exist
pub async fn send_message(
    State(state): State<ChatAppState>,
    body: Result<Json<SendMessageRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ChatApiError> {
    let Json(request) = body.map_err(|e| ChatApiError::BadRequest(e.body_text()))?;

    let mut cmd = SendMessageCommand::new(request.message);
    if let Some(raw) = request.conversation_id.as_deref() {
        cmd = cmd.in_conversation(parse_conversation_id(raw)?);
    }

    let handler = SendMessageHandler::new(state.orchestrator.clone(), state.conversations.clone());
    let result = handler.handle(cmd).await.map_err(|e| match e {
        SendMessageError::EmptyContent => ChatApiError::BadRequest(e.to_string()),
        SendMessageError::ConversationNotFound(id) => {
            ChatApiError::NotFound("Conversation".to_string(), id.to_string())
        }
        SendMessageError::Repository(msg) => ChatApiError::Internal(msg),
    })?;

    let status = if result.created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    let response = SendMessageResponse {
        conversation_id: result.conversation_id.to_string(),
        title: result.title,
        created: result.created,
        user_message: MessageView::from(&result.user_message),
        assistant_message: MessageView::from(&result.assistant_message),
        diagnostic: if state.verbose_errors {
            result.reply.diagnostic
        } else {
            None
        },
    };

    Ok((status, Json(response)))
}

/// GET /api/conversations - Sidebar list, newest first.
pub async fn list_conversations(
    State(state): State<ChatAppState>,
) -> Result<impl IntoResponse, ChatApiError> {
    let summaries = ListConversationsHandler::new(state.conversations.clone())
        .handle()
        .await?;

    let views: Vec<ConversationSummaryView> =
        summaries.iter().map(ConversationSummaryView::from).collect();
    Ok(Json(views))
}

/// GET /api/conversations/:id - Full message history.
///
/// # Errors
/// - 400 Bad Request: Malformed conversation ID
/// - 404 Not Found: Conversation does not exist
pub async fn get_conversation(
    State(state): State<ChatAppState>,
    Path(conversation_id): Path<String>,
) -> Result<impl IntoResponse, ChatApiError> {
    let conversation_id = parse_conversation_id(&conversation_id)?;

    let conversation = GetConversationHandler::new(state.conversations.clone())
        .handle(GetConversationQuery { conversation_id })
        .await?;

    Ok(Json(ConversationView::from(&conversation)))
}

/// DELETE /api/conversations/:id - Discard a conversation.
///
/// # Errors
/// - 400 Bad Request: Malformed conversation ID
/// - 404 Not Found: Conversation does not exist
pub async fn delete_conversation(
    State(state): State<ChatAppState>,
    Path(conversation_id): Path<String>,
) -> Result<impl IntoResponse, ChatApiError> {
    let conversation_id = parse_conversation_id(&conversation_id)?;

    DeleteConversationHandler::new(state.conversations.clone())
        .handle(DeleteConversationCommand { conversation_id })
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

// ════════════════════════════════════════════════════════════════════════════════
// Preferences
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/preferences/:key
///
/// # Errors
/// - 400 Bad Request: Invalid key
/// - 404 Not Found: Key was never set
pub async fn get_preference(
    State(state): State<ChatAppState>,
    Path(key): Path<String>,
) -> Result<impl IntoResponse, ChatApiError> {
    let value = state
        .preferences
        .get(&key)
        .await?
        .ok_or_else(|| ChatApiError::NotFound("Preference".to_string(), key.clone()))?;

    Ok(Json(PreferenceView { key, value }))
}

/// PUT /api/preferences/:key
///
/// # Errors
/// - 400 Bad Request: Invalid key or body
pub async fn put_preference(
    State(state): State<ChatAppState>,
    Path(key): Path<String>,
    body: Result<Json<SetPreferenceRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ChatApiError> {
    let Json(request) = body.map_err(|e| ChatApiError::BadRequest(e.body_text()))?;

    state.preferences.set(&key, request.value.clone()).await?;

    Ok(Json(PreferenceView {
        key,
        value: request.value,
    }))
}

fn parse_conversation_id(raw: &str) -> Result<ConversationId, ChatApiError> {
    raw.parse()
        .map_err(|_| ChatApiError::BadRequest("Invalid conversation ID format".to_string()))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type for chat endpoints.
#[derive(Debug)]
pub enum ChatApiError {
    BadRequest(String),
    NotFound(String, String),
    Internal(String),
}

impl From<DomainError> for ChatApiError {
    fn from(err: DomainError) -> Self {
        match err.code() {
            ErrorCode::ValidationFailed | ErrorCode::EmptyField | ErrorCode::InvalidFormat => {
                ChatApiError::BadRequest(err.message.clone())
            }
            ErrorCode::ConversationNotFound => ChatApiError::NotFound(
                "Conversation".to_string(),
                err.details.get("conversation_id").cloned().unwrap_or_default(),
            ),
            ErrorCode::PreferenceNotFound => ChatApiError::NotFound(
                "Preference".to_string(),
                err.details.get("key").cloned().unwrap_or_default(),
            ),
            _ => ChatApiError::Internal(err.to_string()),
        }
    }
}

impl IntoResponse for ChatApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            ChatApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ErrorResponse::bad_request(msg))
            }
            ChatApiError::NotFound(resource, id) => {
                (StatusCode::NOT_FOUND, ErrorResponse::not_found(&resource, &id))
            }
            ChatApiError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::internal("An internal error occurred"),
                )
            }
        };

        (status, Json(error)).into_response()
    }
}
