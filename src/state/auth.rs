#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use serde::{Deserialize, Serialize};

/// The authenticated operator.
///
/// Created on successful login and replaced wholesale on every login.
/// `AuthSession` is the sole writer; the UI and the request gateway only
/// read copies. The serialized form of this struct is the session record
/// persisted to tab storage.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    /// Opaque bearer token, attached to every outbound request.
    pub token: String,
    /// Epoch milliseconds after which the token should no longer be used
    /// (real expiry minus a one-minute margin). `None` when the token
    /// carries no readable `exp` claim.
    pub expires_at: Option<i64>,
}

impl Identity {
    /// Whether the token has passed its client-side expiry instant.
    /// Always `false` when no expiry is known.
    #[must_use]
    pub fn is_expired(&self, now_ms: i64) -> bool {
        self.expires_at.is_some_and(|at| now_ms >= at)
    }
}

/// Authentication state shared with the UI.
///
/// Kept as a plain struct and mirrored into an `RwSignal` by the session's
/// observer so the pure state machine stays testable without a browser.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub identity: Option<Identity>,
    /// True while a login/reset call is in flight. Submit actions are
    /// disabled while set so overlapping auth calls cannot start.
    pub loading: bool,
}

impl AuthState {
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    /// The current bearer token, if any.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.identity.as_ref().map(|identity| identity.token.clone())
    }
}
