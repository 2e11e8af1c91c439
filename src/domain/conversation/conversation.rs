//! Conversation entity - ordered exchange history for one chat thread.

use serde::Serialize;

use crate::domain::assistant::{AssistantReply, ChatMessage};
use crate::domain::foundation::{ConversationId, Timestamp};

/// Title used when the first message gives nothing to work with.
pub const DEFAULT_TITLE: &str = "New Conversation";

const MAX_TITLE_CHARS: usize = 50;
const MAX_TITLE_WORDS: usize = 4;

/// Words that always earn a place in a title regardless of length.
const TITLE_TERMS: &[&str] = &[
    "concrete",
    "steel",
    "construction",
    "building",
    "project",
    "safety",
    "materials",
    "cost",
    "design",
    "engineering",
];

/// Conversation entity.
///
/// Created on the first completed exchange of a fresh session; afterwards
/// only appended to. Messages are never edited or removed individually.
#[derive(Debug, Clone, Serialize)]
pub struct Conversation {
    id: ConversationId,
    title: String,
    messages: Vec<ChatMessage>,
    created_at: Timestamp,
    last_activity: Timestamp,
}

impl Conversation {
    /// Starts a conversation from its opening welcome and first exchange.
    pub fn start(welcome: &AssistantReply, user: ChatMessage, assistant: ChatMessage) -> Self {
        let now = Timestamp::now();
        Self {
            id: ConversationId::new(),
            title: derive_title(user.content()),
            messages: vec![ChatMessage::assistant(welcome), user, assistant],
            created_at: now,
            last_activity: now,
        }
    }

    /// Appends a user/assistant exchange and bumps `last_activity`.
    pub fn append_exchange(&mut self, user: ChatMessage, assistant: ChatMessage) {
        self.messages.push(user);
        self.messages.push(assistant);
        self.last_activity = Timestamp::now();
    }

    // === Accessors ===

    pub fn id(&self) -> ConversationId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    pub fn last_activity(&self) -> Timestamp {
        self.last_activity
    }

    /// Lightweight listing view.
    pub fn summary(&self) -> ConversationSummary {
        ConversationSummary {
            id: self.id,
            title: self.title.clone(),
            message_count: self.messages.len(),
            created_at: self.created_at,
            last_activity: self.last_activity,
        }
    }
}

/// Listing view of a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversationSummary {
    pub id: ConversationId,
    pub title: String,
    pub message_count: usize,
    pub created_at: Timestamp,
    pub last_activity: Timestamp,
}

/// Derives a short title from the first user message.
///
/// Keeps up to four words that either mention a construction term or are
/// longer than four characters, cut to fifty characters. Falls back to the
/// head of the message, then to [`DEFAULT_TITLE`].
pub fn derive_title(first_message: &str) -> String {
    if first_message.trim().is_empty() {
        return DEFAULT_TITLE.to_string();
    }

    let lowered = first_message.to_lowercase();
    let relevant: Vec<&str> = lowered
        .split(' ')
        .filter(|word| {
            TITLE_TERMS.iter().any(|term| word.contains(term)) || word.chars().count() > 4
        })
        .take(MAX_TITLE_WORDS)
        .collect();

    if relevant.is_empty() {
        return first_message.chars().take(MAX_TITLE_CHARS).collect();
    }

    relevant.join(" ").chars().take(MAX_TITLE_CHARS).collect()
}
