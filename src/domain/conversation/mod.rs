//! Conversation module - chat threads held by the conversation store.

mod conversation;

pub use conversation::{derive_title, Conversation, ConversationSummary, DEFAULT_TITLE};
