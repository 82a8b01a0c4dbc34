use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

/// Backend location
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the recipe backend, e.g. `http://10.0.2.2:8080`
    pub base_url: Option<String>,
}

impl ApiConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if let Some(url) = &self.base_url
            && !(url.starts_with("http://") || url.starts_with("https://"))
        {
            return Err(ConfigError::api(format!(
                "api.base_url must start with http:// or https://, got '{url}'"
            )));
        }
        Ok(())
    }

    /// Base URL without a trailing slash, if one is configured.
    pub fn base_url(&self) -> Option<&str> {
        self.base_url
            .as_deref()
            .map(|u| u.trim_end_matches('/'))
            .filter(|u| !u.is_empty())
    }
}
