//! Provenance tags for assistant-authored messages.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which routing path produced an assistant message.
///
/// Exactly one tag is attached to every assistant reply. The display surface
/// uses it to pick a rendering treatment; the orchestrator uses it to record
/// which branch of the fallback chain terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResponseSource {
    /// Answer generated by the primary model.
    PrimaryModel,
    /// Answer generated by the secondary model after the primary declined.
    SecondaryModel,
    /// Query classified as outside the construction domain.
    DomainRejected,
    /// Every model declined; static refinement guidance returned.
    ExhaustedFallback,
    /// Session/conversation opener.
    Welcome,
    /// Unexpected failure caught at the orchestrator boundary.
    InternalError,
}

impl ResponseSource {
    /// Wire name of the tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseSource::PrimaryModel => "primary-model",
            ResponseSource::SecondaryModel => "secondary-model",
            ResponseSource::DomainRejected => "domain-rejected",
            ResponseSource::ExhaustedFallback => "exhausted-fallback",
            ResponseSource::Welcome => "welcome",
            ResponseSource::InternalError => "internal-error",
        }
    }
}

impl fmt::Display for ResponseSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
