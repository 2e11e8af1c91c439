//! Application layer - the assistant core and the handlers around it.
//!
//! `ChatOrchestrator` answers single queries; the handlers record those
//! answers in the conversation store.

pub mod handlers;
mod orchestrator;

pub use handlers::{
    DeleteConversationCommand, DeleteConversationHandler, GetConversationHandler,
    GetConversationQuery, ListConversationsHandler, SendMessageCommand, SendMessageError,
    SendMessageHandler, SendMessageResult,
};
pub use orchestrator::{ChatOrchestrator, FallbackStep, DEFAULT_STEP_TIMEOUT};
