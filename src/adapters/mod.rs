//! Adapters - Implementations of port interfaces.
//!
//! - `ai` - Model providers and the source adapters wrapping them
//! - `http` - Axum REST API
//! - `memory` - Process-local conversation and preference stores

pub mod ai;
pub mod http;
pub mod memory;
