use crate::{ConfigError, ConfigErrorResult, DEFAULT_SESSION_KEY, DEFAULT_STORE_DIR};

use cb_store::validate_key;
use serde::Deserialize;

/// Where the persisted session and saved recipe lists live.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Store directory, relative to the config directory
    pub store_dir: String,
    /// Store key holding the serialized session record
    pub key: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            store_dir: String::from(DEFAULT_STORE_DIR),
            key: String::from(DEFAULT_SESSION_KEY),
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let dir = std::path::Path::new(&self.store_dir);
        if self.store_dir.is_empty() || dir.is_absolute() || self.store_dir.contains("..") {
            return Err(ConfigError::session(
                "session.store_dir must be relative and cannot contain '..'",
            ));
        }

        if validate_key(&self.key).is_err() {
            return Err(ConfigError::session(format!(
                "session.key must be non-empty and use only [A-Za-z0-9_.-], got '{}'",
                self.key
            )));
        }

        Ok(())
    }
}
