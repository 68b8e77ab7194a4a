use crate::Role;
use serde::{Deserialize, Serialize};

/// Read-only projection of a session credential's payload.
///
/// Produced by the client's token decoder; never persisted on its own.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Claims {
    pub subject: String,
    pub role: Role,
    /// Unix seconds.
    pub issued_at: Option<i64>,
    /// Unix seconds.
    pub expires_at: Option<i64>,
    pub username: Option<String>,
    pub email: Option<String>,
}

impl Claims {
    /// A credential without `exp` never expires client-side.
    pub fn is_expired(&self, now_unix: i64) -> bool {
        self.expires_at.is_some_and(|exp| exp <= now_unix)
    }

    /// Best available name for the top bar.
    pub fn display_name(&self) -> &str {
        self.username
            .as_deref()
            .or(self.email.as_deref())
            .unwrap_or(&self.subject)
    }

    /// Up to two initials for the avatar fallback.
    pub fn initials(&self) -> String {
        self.display_name()
            .split(|c: char| c.is_whitespace() || c == '.' || c == '@')
            .filter_map(|w| w.chars().next())
            .take(2)
            .collect::<String>()
            .to_uppercase()
    }
}
