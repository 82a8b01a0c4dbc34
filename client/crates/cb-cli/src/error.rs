use cb_api::ClientError;
use cb_config::ConfigError;
use cb_session::SessionError;
use cb_store::StoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    #[error("API error: {0}")]
    Client(#[from] ClientError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Output error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid input: {message}")]
    Input { message: String },

    #[error("Logger error: {message}")]
    Logger { message: String },
}

impl CliError {
    pub fn input<S: Into<String>>(message: S) -> Self {
        CliError::Input {
            message: message.into(),
        }
    }

    /// Text printed to the user; the full error goes to the log.
    pub fn message(&self) -> String {
        match self {
            CliError::Session(e) => e.message(),
            CliError::Client(e) => e.message(),
            CliError::Input { message } | CliError::Logger { message } => message.clone(),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
