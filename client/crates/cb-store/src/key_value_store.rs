use crate::{StoreError, StoreResult};

use async_trait::async_trait;

/// Durable string-to-string storage, one value per key.
///
/// Every operation is an atomic replace of a single key; there are no
/// guarantees across keys. Removing a missing key succeeds.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get_item(&self, key: &str) -> StoreResult<Option<String>>;

    async fn set_item(&self, key: &str, value: &str) -> StoreResult<()>;

    async fn remove_item(&self, key: &str) -> StoreResult<()>;
}

/// Keys are non-empty, use only `[A-Za-z0-9_.-]` and do not start with `.`.
#[track_caller]
pub fn validate_key(key: &str) -> StoreResult<()> {
    let valid = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'));

    if valid {
        Ok(())
    } else {
        Err(StoreError::invalid_key(key))
    }
}
