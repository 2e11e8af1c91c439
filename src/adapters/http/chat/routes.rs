//! Axum routes for the chat API.
//!
//! Defines the routing table for every endpoint the chat front end calls.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{
    assistant_reply, delete_conversation, get_conversation, get_preference, health,
    list_conversations, put_preference, send_message, welcome, ChatAppState,
};

/// Creates routes for the chat API.
///
/// REST Endpoints:
/// - GET /api/welcome - Fixed greeting
/// - POST /api/assistant/reply - Stateless single-query reply
/// - POST /api/chat - Send a message, starting or continuing a conversation
/// - GET /api/conversations - Conversation list, newest first
/// - GET /api/conversations/:id - Full conversation
/// - DELETE /api/conversations/:id - Discard a conversation
/// - GET, PUT /api/preferences/:key - Client preferences
pub fn chat_routes() -> Router<ChatAppState> {
    Router::new()
        .route("/welcome", get(welcome))
        .route("/assistant/reply", post(assistant_reply))
        .route("/chat", post(send_message))
        .route("/conversations", get(list_conversations))
        .route(
            "/conversations/:id",
            get(get_conversation).delete(delete_conversation),
        )
        .route("/preferences/:key", get(get_preference).put(put_preference))
}

/// Combined router: `/health` plus every chat route under `/api`.
pub fn chat_router() -> Router<ChatAppState> {
    Router::new()
        .route("/health", get(health))
        .nest("/api", chat_routes())
}
