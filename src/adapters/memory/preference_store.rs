//! In-Memory Preference Store

use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::DomainError;
use crate::ports::{is_valid_preference_key, PreferenceStore, MAX_PREFERENCE_KEY_LEN};

/// Process-local preference map.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPreferenceStore {
    values: Arc<RwLock<HashMap<String, Value>>>,
}

impl InMemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn check_key(key: &str) -> Result<(), DomainError> {
    if is_valid_preference_key(key) {
        Ok(())
    } else {
        Err(DomainError::validation(
            "key",
            format!(
                "Preference keys are 1-{} characters of letters, digits, '_', '.' or '-'",
                MAX_PREFERENCE_KEY_LEN
            ),
        ))
    }
}

#[async_trait]
impl PreferenceStore for InMemoryPreferenceStore {
    async fn get(&self, key: &str) -> Result<Option<Value>, DomainError> {
        check_key(key)?;
        Ok(self.values.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: Value) -> Result<(), DomainError> {
        check_key(key)?;
        self.values.write().await.insert(key.to_string(), value);
        Ok(())
    }
}
