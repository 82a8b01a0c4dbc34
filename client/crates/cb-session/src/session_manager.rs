use crate::auth_request::{LoginRequest, RegisterRequest};
use crate::{AuthState, SessionError, SessionResult};

use std::sync::Arc;

use cb_config::Config;
use cb_core::{ApiMessage, LoginResponse, UserSession};
use cb_store::KeyValueStore;
use log::{debug, info, warn};
use serde_json::Value;
use tokio::sync::{Mutex, MutexGuard, watch};

pub const LOGIN_PATH: &str = "/api/users/login";
pub const REGISTER_PATH: &str = "/api/users/register";

const LOGIN_FAILED: &str = "Login failed";
const REGISTRATION_FAILED: &str = "Registration failed";
const MALFORMED_RESPONSE: &str = "Malformed response from API";
const MISSING_BASE_URL: &str = "API base URL is not defined. Check your configuration.";

/// Holder of the current session record.
///
/// The in-memory record is authoritative; the store under `key` mirrors it.
/// Login and register are rejected with [`SessionError::Busy`] while another
/// session operation runs. Logout waits its turn instead.
pub struct SessionManager {
    base_url: Option<String>,
    http: reqwest::Client,
    store: Arc<dyn KeyValueStore>,
    key: String,
    state: watch::Sender<AuthState>,
    op_guard: Mutex<()>,
}

impl SessionManager {
    /// Create a session holder with no session and `loading` set.
    ///
    /// # Arguments
    /// * `base_url` - Backend URL (e.g., "http://127.0.0.1:8080"), if configured
    /// * `store` - Persisted store mirroring the session record
    /// * `key` - Store key holding the serialized record
    pub fn new(
        base_url: Option<&str>,
        store: Arc<dyn KeyValueStore>,
        key: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url
                .map(|u| u.trim_end_matches('/').to_string())
                .filter(|u| !u.is_empty()),
            http: reqwest::Client::new(),
            store,
            key: key.into(),
            state: watch::Sender::new(AuthState::default()),
            op_guard: Mutex::new(()),
        }
    }

    pub fn from_config(config: &Config, store: Arc<dyn KeyValueStore>) -> Self {
        Self::new(config.api.base_url(), store, config.session.key.clone())
    }

    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    /// The persisted store, shared with other device-local data.
    pub fn store(&self) -> Arc<dyn KeyValueStore> {
        Arc::clone(&self.store)
    }

    /// Receiver that observes every session change.
    pub fn subscribe(&self) -> watch::Receiver<AuthState> {
        self.state.subscribe()
    }

    pub fn state(&self) -> AuthState {
        self.state.borrow().clone()
    }

    pub fn current(&self) -> Option<UserSession> {
        self.state.borrow().user.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state.borrow().loading
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.borrow().is_authenticated()
    }

    pub fn is_admin(&self) -> bool {
        self.state.borrow().is_admin()
    }

    pub fn bearer_token(&self) -> Option<String> {
        self.state.borrow().user.as_ref().map(|u| u.token.clone())
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Restore the persisted session, if it is valid.
    ///
    /// Anything unreadable or invalid is removed from the store and the
    /// holder starts signed out. `loading` is cleared in every case.
    pub async fn init(&self) -> Option<UserSession> {
        let _guard = self.op_guard.lock().await;

        let user = match self.store.get_item(&self.key).await {
            Ok(Some(raw)) => match UserSession::from_persisted(&raw) {
                Ok(user) => {
                    info!("Restored session for user {} ({})", user.id, user.role);
                    Some(user)
                }
                Err(e) => {
                    warn!("Discarding invalid persisted session: {}", e.message());
                    self.discard_persisted().await;
                    None
                }
            },
            Ok(None) => {
                debug!("No persisted session under '{}'", self.key);
                None
            }
            Err(e) => {
                warn!("Failed to read persisted session: {e}");
                self.discard_persisted().await;
                None
            }
        };

        self.state.send_replace(AuthState {
            user: user.clone(),
            loading: false,
        });

        user
    }

    /// Sign in and adopt the returned session.
    ///
    /// On any failure the previous session, in memory and in the store, is
    /// left as it was.
    pub async fn login(&self, email: &str, password: &str) -> SessionResult<UserSession> {
        let _guard = self.try_begin()?;
        let url = self.endpoint(LOGIN_PATH)?;

        debug!("POST {url}");
        let response = self
            .http
            .post(&url)
            .json(&LoginRequest { email, password })
            .send()
            .await?;
        let status = response.status();
        let body = parse_body(&response.text().await?);

        if !status.is_success() {
            let message = body
                .as_ref()
                .map(ApiMessage::from_body)
                .unwrap_or_default()
                .or(LOGIN_FAILED);
            warn!("Login rejected with status {status}");
            return Err(SessionError::backend(status.as_u16(), message));
        }

        let body = body.ok_or_else(|| SessionError::invalid_response(MALFORMED_RESPONSE))?;
        let user = serde_json::from_value::<LoginResponse>(body)
            .map_err(|e| SessionError::invalid_response(format!("{MALFORMED_RESPONSE}: {e}")))?
            .into_session()
            .map_err(|e| SessionError::invalid_response(e.message()))?;

        let persisted = user
            .to_persisted()
            .map_err(|e| SessionError::invalid_response(e.message()))?;
        self.store.set_item(&self.key, &persisted).await?;

        self.state.send_modify(|state| {
            state.user = Some(user.clone());
            state.loading = false;
        });

        info!("Signed in as user {} ({})", user.id, user.role);
        Ok(user)
    }

    /// Create an account. No session is adopted; sign in separately.
    pub async fn register(&self, username: &str, email: &str, password: &str) -> SessionResult<()> {
        let _guard = self.try_begin()?;
        let url = self.endpoint(REGISTER_PATH)?;

        debug!("POST {url}");
        let response = self
            .http
            .post(&url)
            .json(&RegisterRequest {
                username,
                email,
                password,
            })
            .send()
            .await?;
        let status = response.status();
        let body = parse_body(&response.text().await?);

        if !status.is_success() {
            let message = body
                .as_ref()
                .map(ApiMessage::from_body)
                .unwrap_or_default()
                .or(REGISTRATION_FAILED);
            warn!("Registration rejected with status {status}");
            return Err(SessionError::backend(status.as_u16(), message));
        }

        info!("Registered account for {email}");
        Ok(())
    }

    /// Sign out locally. The backend is not contacted.
    ///
    /// The in-memory session is cleared even if removing the stored copy fails.
    pub async fn logout(&self) -> SessionResult<()> {
        let _guard = self.op_guard.lock().await;
        info!("Signing out");
        self.clear().await
    }

    /// Drop a session the backend no longer accepts.
    pub async fn invalidate(&self) -> SessionResult<()> {
        let _guard = self.op_guard.lock().await;
        warn!("Session rejected by backend; signing out");
        self.clear().await
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    #[track_caller]
    fn try_begin(&self) -> SessionResult<MutexGuard<'_, ()>> {
        self.op_guard.try_lock().map_err(|_| SessionError::busy())
    }

    #[track_caller]
    fn endpoint(&self, path: &str) -> SessionResult<String> {
        match &self.base_url {
            Some(base) => Ok(format!("{base}{path}")),
            None => Err(SessionError::config(MISSING_BASE_URL)),
        }
    }

    async fn clear(&self) -> SessionResult<()> {
        self.state.send_modify(|state| {
            state.user = None;
            state.loading = false;
        });
        self.store.remove_item(&self.key).await?;
        Ok(())
    }

    async fn discard_persisted(&self) {
        if let Err(e) = self.store.remove_item(&self.key).await {
            warn!("Failed to remove persisted session: {e}");
        }
    }
}

/// Empty bodies read as `{}`; unparseable bodies as `None`.
fn parse_body(text: &str) -> Option<Value> {
    if text.trim().is_empty() {
        return Some(Value::Object(Default::default()));
    }
    serde_json::from_str(text).ok()
}
