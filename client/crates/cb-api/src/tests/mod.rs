
use cb_core::{Role, UserSession};
use cb_session::SessionManager;
use cb_store::{KeyValueStore, MemoryStore};

use std::sync::Arc;

pub(crate) const TEST_BASE_URL: &str = "http://localhost:8080";

/// Session holder restored from a stored record with `role`, or signed out.
pub(crate) async fn session_as(role: Option<Role>) -> Arc<SessionManager> {
    let store = MemoryStore::new();
    if let Some(role) = role {
        let user = UserSession {
            id: "u1".into(),
            username: "tester".into(),
            email: "tester@example.com".into(),
            role,
            token: "jwt".into(),
        };
        store
            .set_item("user", &user.to_persisted().unwrap())
            .await
            .unwrap();
    }

    let session = SessionManager::new(Some(TEST_BASE_URL), Arc::new(store), "user");
    session.init().await;
    Arc::new(session)
}
