use crate::token::{decode_claims, DecodeError};
use shared_types::Claims;
use std::sync::{Arc, RwLock};

/// Backing storage for the bearer credential.
///
/// Reads must be synchronous: the HTTP client consults the store on every
/// request.
pub trait CredentialStore: Send + Sync {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
    fn clear(&self);
}

/// Process-local store. Used by tests and by platforms without browser storage.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    token: RwLock<Option<String>>,
}

impl MemoryCredentialStore {
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(Some(token.into())),
        }
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn load(&self) -> Option<String> {
        self.token.read().ok().and_then(|t| t.clone())
    }

    fn save(&self, token: &str) {
        if let Ok(mut slot) = self.token.write() {
            *slot = Some(token.to_string());
        }
    }

    fn clear(&self) {
        if let Ok(mut slot) = self.token.write() {
            *slot = None;
        }
    }
}

/// The signed-in session, passed explicitly to everything that issues
/// authenticated calls. Cloning shares the same underlying store.
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn CredentialStore>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("has_token", &self.token().is_some())
            .finish()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl Session {
    pub fn new(store: impl CredentialStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    pub fn in_memory() -> Self {
        Self::new(MemoryCredentialStore::default())
    }

    /// Current bearer token, if any. Blank values count as absent.
    pub fn token(&self) -> Option<String> {
        self.store.load().filter(|t| !t.trim().is_empty())
    }

    pub fn sign_in(&self, token: &str) {
        self.store.save(token.trim());
    }

    pub fn sign_out(&self) {
        self.store.clear();
    }

    /// Structural decode of the stored credential.
    pub fn claims(&self) -> Result<Claims, DecodeError> {
        let token = self.token().ok_or(DecodeError::Empty)?;
        decode_claims(&token)
    }

    /// Claims of a usable session: present, well-formed and not expired.
    /// Anything else is "no session".
    pub fn active_claims(&self, now_unix: i64) -> Option<Claims> {
        match self.claims() {
            Ok(claims) if !claims.is_expired(now_unix) => Some(claims),
            Ok(_) => {
                tracing::debug!("stored credential has expired");
                None
            }
            Err(DecodeError::Empty) => None,
            Err(e) => {
                tracing::debug!(error = %e, "stored credential could not be decoded");
                None
            }
        }
    }

    pub fn active_claims_now(&self) -> Option<Claims> {
        self.active_claims(chrono::Utc::now().timestamp())
    }
}
