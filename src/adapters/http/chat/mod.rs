//! HTTP adapter for the chat API.
//!
//! Exposes the assistant core, conversation history and client preferences
//! as JSON endpoints.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::{ChatApiError, ChatAppState};
pub use routes::{chat_router, chat_routes};
