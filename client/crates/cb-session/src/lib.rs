//! Session state for the cookbook client.
//!
//! [`SessionManager`] owns the signed-in user's [`cb_core::UserSession`],
//! mirrors it into a persisted [`cb_store::KeyValueStore`] and performs the
//! login/register calls against the backend.

pub(crate) mod auth_request;
pub(crate) mod auth_state;
pub(crate) mod error;
pub(crate) mod session_manager;


pub use auth_state::AuthState;
pub use error::{Result as SessionResult, SessionError};
pub use session_manager::{LOGIN_PATH, REGISTER_PATH, SessionManager};
