use carelink_client::{CredentialStore, Session};
use dioxus::prelude::*;
use shared_types::Claims;
use std::sync::{Arc, RwLock};

/// Global authentication state, derived from the persisted credential.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AuthState {
    /// Claims of the active session. `None` when signed out or expired.
    pub claims: Signal<Option<Claims>>,
    /// False until browser storage has been read once.
    pub ready: Signal<bool>,
}

impl AuthState {
    pub fn new() -> Self {
        Self {
            claims: Signal::new(None),
            ready: Signal::new(false),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.claims.read().is_some()
    }

    /// Re-derive claims from the session's stored credential.
    pub fn refresh(&mut self, session: &Session) {
        self.claims.set(session.active_claims_now());
    }

    pub fn clear(&mut self) {
        self.claims.set(None);
    }
}

/// Hook to access auth state.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}

/// Credential store backed by `localStorage`.
///
/// Storage is only reachable asynchronously through the webview, so reads are
/// served from an in-memory copy that [`LocalStorageStore::hydrate`] fills at
/// startup. Writes go to both.
#[derive(Debug, Clone)]
pub struct LocalStorageStore {
    key: String,
    cache: Arc<RwLock<Option<String>>>,
}

impl LocalStorageStore {
    pub fn new(key: &str) -> Self {
        Self {
            key: key.to_string(),
            cache: Arc::default(),
        }
    }

    fn set_cached(&self, token: Option<String>) {
        if let Ok(mut slot) = self.cache.write() {
            *slot = token;
        }
    }

    /// Pull the persisted credential into memory.
    pub async fn hydrate(&self) {
        let mut eval = document::eval(&get_item_script(&self.key));
        match eval.recv::<Option<String>>().await {
            Ok(token) => {
                tracing::debug!(found = token.is_some(), "session storage read");
                self.set_cached(token);
            }
            Err(e) => tracing::warn!(error = ?e, "could not read session storage"),
        }
    }
}

impl CredentialStore for LocalStorageStore {
    fn load(&self) -> Option<String> {
        self.cache.read().ok().and_then(|t| t.clone())
    }

    fn save(&self, token: &str) {
        self.set_cached(Some(token.to_string()));
        document::eval(&set_item_script(&self.key, token));
    }

    fn clear(&self) {
        self.set_cached(None);
        document::eval(&remove_item_script(&self.key));
    }
}

fn js_string(s: &str) -> String {
    serde_json::Value::from(s).to_string()
}

fn get_item_script(key: &str) -> String {
    format!("dioxus.send(window.localStorage.getItem({}));", js_string(key))
}

fn set_item_script(key: &str, value: &str) -> String {
    format!(
        "window.localStorage.setItem({}, {});",
        js_string(key),
        js_string(value)
    )
}

fn remove_item_script(key: &str) -> String {
    format!("window.localStorage.removeItem({});", js_string(key))
}
