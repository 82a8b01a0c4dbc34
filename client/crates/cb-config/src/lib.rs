mod api_config;
mod config;
mod error;
mod log_level;
mod logging_config;
mod session_config;

#[cfg(test)]
mod tests;

pub use api_config::ApiConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use session_config::SessionConfig;

pub const CONFIG_DIR_ENV: &str = "CB_CONFIG_DIR";
pub const DEFAULT_CONFIG_DIR: &str = ".cookbook";
pub const CONFIG_FILE_NAME: &str = "config.toml";

const DEFAULT_STORE_DIR: &str = "store";
const DEFAULT_SESSION_KEY: &str = "user";
const DEFAULT_LOG_LEVEL_STRING: &str = "warn";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Warn;
const DEFAULT_LOG_COLORED: bool = true;
