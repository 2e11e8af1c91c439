//! ConstructBot - Construction consultation assistant
//!
//! This crate answers construction-industry questions through a chain of
//! language model sources, refusing anything outside that domain and
//! tagging every reply with the path that produced it.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
