//! Assistant core - domain gating, prompts, provenance tags and replies.
//!
//! Everything here is pure: the classifier and prompt builder work over
//! process-wide constants and hold no state between calls.

mod classifier;
mod message;
mod prompt;
mod source;
pub mod templates;

pub use classifier::{classify, STEM_PATTERNS, VOCABULARY};
pub use message::{AssistantReply, ChatMessage, MessageRole};
pub use prompt::{build_prompt, PromptTarget};
pub use source::ResponseSource;

/// Generated text must be longer than this many characters to be used.
pub const VIABILITY_THRESHOLD: usize = 20;

/// Returns true if generated text is long enough to show the user.
pub fn is_viable(text: &str) -> bool {
    text.chars().count() > VIABILITY_THRESHOLD
}
