//! Conversation command and query handlers.

mod delete_conversation;
mod get_conversation;
mod list_conversations;
mod send_message;

pub use delete_conversation::{DeleteConversationCommand, DeleteConversationHandler};
pub use get_conversation::{GetConversationHandler, GetConversationQuery};
pub use list_conversations::ListConversationsHandler;
pub use send_message::{
    SendMessageCommand, SendMessageError, SendMessageHandler, SendMessageResult,
};
