//! Application handlers.
//!
//! Command and query handlers that drive the conversation store around the
//! assistant core.

pub mod conversation;

pub use conversation::{
    DeleteConversationCommand, DeleteConversationHandler, GetConversationHandler,
    GetConversationQuery, ListConversationsHandler, SendMessageCommand, SendMessageError,
    SendMessageHandler, SendMessageResult,
};
