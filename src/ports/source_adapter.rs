//! Source Adapter Port - one link of the response fallback chain.

use async_trait::async_trait;

/// A response source the orchestrator can ask for an answer.
///
/// `None` is the normal "try the next source" outcome, not an error.
/// Implementations must absorb transport and remote-service failures and
/// resolve to `None` instead of surfacing them.
#[async_trait]
pub trait SourceAdapter: Send + Sync {
    /// Generate text for a fully built prompt.
    async fn generate(&self, prompt: &str) -> Option<String>;

    /// Short label used in logs.
    fn name(&self) -> &str;
}
