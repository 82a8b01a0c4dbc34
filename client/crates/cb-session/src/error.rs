use std::panic::Location;

use cb_store::StoreError;
use error_location::ErrorLocation;
use thiserror::Error;

/// Errors raised by session operations.
///
/// Every variant carries a human-readable message (see [`SessionError::message`]):
/// the backend's own message when it sent one, a generic fallback otherwise.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Configuration error: {message} {location}")]
    Config {
        message: String,
        location: ErrorLocation,
    },

    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("Backend error: {message} (status: {status}) {location}")]
    Backend {
        status: u16,
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid response: {message} {location}")]
    InvalidResponse {
        message: String,
        location: ErrorLocation,
    },

    #[error("Session store error: {source}")]
    Store {
        #[from]
        source: StoreError,
    },

    #[error("Another session operation is in progress {location}")]
    Busy { location: ErrorLocation },
}

impl SessionError {
    /// Message for the end user, without source locations.
    pub fn message(&self) -> String {
        match self {
            Self::Config { message, .. }
            | Self::Http { message, .. }
            | Self::Backend { message, .. }
            | Self::InvalidResponse { message, .. } => message.clone(),
            Self::Store { .. } => "Could not save your session on this device".to_string(),
            Self::Busy { .. } => "Please wait for the current request to finish".to_string(),
        }
    }

    #[track_caller]
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn backend<S: Into<String>>(status: u16, message: S) -> Self {
        Self::Backend {
            status,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_response<S: Into<String>>(message: S) -> Self {
        Self::InvalidResponse {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn busy() -> Self {
        Self::Busy {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        Self::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }
}

impl From<reqwest::Error> for SessionError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        SessionError::from_reqwest(err)
    }
}

pub type Result<T> = std::result::Result<T, SessionError>;
