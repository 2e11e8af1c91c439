//! Placeholder source for a backend that is not wired up.

use async_trait::async_trait;

use crate::ports::SourceAdapter;

/// A source that always declines.
///
/// Used for the primary slot when no local generation backend is configured,
/// so the chain still runs its primary step and falls through.
#[derive(Debug, Clone)]
pub struct UnconfiguredSource {
    label: String,
}

impl UnconfiguredSource {
    /// Creates a declining source with the given log label.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

#[async_trait]
impl SourceAdapter for UnconfiguredSource {
    async fn generate(&self, _prompt: &str) -> Option<String> {
        tracing::debug!(source = %self.label, "no backend configured");
        None
    }

    fn name(&self) -> &str {
        &self.label
    }
}
