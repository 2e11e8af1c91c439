//! Preference Store Port - display-surface key/value preferences.
//!
//! Holds presentation flags such as `hide_examples`. Nothing here feeds
//! back into query routing.

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::foundation::DomainError;

/// Maximum length of a preference key.
pub const MAX_PREFERENCE_KEY_LEN: usize = 64;

/// Port for preference storage.
#[async_trait]
pub trait PreferenceStore: Send + Sync {
    /// Reads a preference.
    async fn get(&self, key: &str) -> Result<Option<Value>, DomainError>;

    /// Writes a preference, replacing any previous value.
    async fn set(&self, key: &str, value: Value) -> Result<(), DomainError>;
}

/// Returns true if `key` is 1-64 characters of `[A-Za-z0-9_.-]`.
pub fn is_valid_preference_key(key: &str) -> bool {
    !key.is_empty()
        && key.len() <= MAX_PREFERENCE_KEY_LEN
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
}
