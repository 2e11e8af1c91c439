//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors)
//! - `assistant` - Domain gate, prompt builder, source tags and replies
//! - `conversation` - Conversation entity and title derivation

pub mod assistant;
pub mod conversation;
pub mod foundation;
