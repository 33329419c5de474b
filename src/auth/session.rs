//! The authentication session state machine.
//!
//! ARCHITECTURE
//! ============
//! `AuthSession` is the single writer of the current [`Identity`]. It owns
//! the in-memory [`AuthState`], mirrors every change to the
//! [`SessionStore`], and notifies one observer (the UI layer) after each
//! transition. The request gateway never sees the session itself, only a
//! token-source closure reading the same state.
//!
//! Failure reporting is deliberately asymmetric, mirroring the API's
//! observed contract: `login` and `send_reset_code` report failure as
//! data ([`LoginOutcome`] / [`OpOutcome`]) so forms can render inline
//! messages, while `confirm_reset` returns a `Result` whose error the
//! caller must handle.
//!
//! The `loading` flag is managed by an RAII guard: every public operation
//! sets it on entry and the guard's `Drop` clears it on every exit path,
//! so no outcome can leave the UI stuck in a loading state.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::RefCell;
use std::rc::Rc;

use serde_json::Value;

use crate::auth::store::SessionStore;
use crate::auth::token;
use crate::net::api;
use crate::net::gateway::{ApiError, Gateway, TokenSource, Transport};
use crate::net::types::{LoginRequest, ResetRequest, VerifyOtpRequest};
use crate::state::auth::{AuthState, Identity};

const MISSING_USER_TOKEN: &str = "login response missing user or token";
const RESET_CODE_FAILED: &str = "could not send a reset code to that email";
const RESET_FAILED: &str = "reset failed, the OTP or email may be invalid";
const RESET_DONE: &str = "password reset successfully";
const CODE_SENT: &str = "reset code sent";

/// Result of a login attempt, reported as data rather than an error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginOutcome {
    Authenticated(Identity),
    Rejected { message: String },
}

impl LoginOutcome {
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }
}

/// Result of a reset-code request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OpOutcome {
    pub ok: bool,
    pub message: String,
}

pub struct AuthSession<T: Transport> {
    state: Rc<RefCell<AuthState>>,
    gateway: Rc<Gateway<T>>,
    store: Rc<dyn SessionStore>,
    observer: RefCell<Option<Box<dyn Fn(&AuthState)>>>,
}

impl<T: Transport> AuthSession<T> {
    /// Build a session and its gateway. The gateway's token source reads
    /// this session's state, so requests made after a login automatically
    /// carry the new bearer token.
    pub fn new(base_url: impl Into<String>, transport: T, store: Rc<dyn SessionStore>) -> Self {
        let state = Rc::new(RefCell::new(AuthState::default()));

        let token_state = Rc::clone(&state);
        let token_source: TokenSource =
            Rc::new(move || token_state.borrow().identity.as_ref().map(|i| i.token.clone()));

        let gateway = Rc::new(Gateway::new(base_url, transport, token_source));
        Self {
            state,
            gateway,
            store,
            observer: RefCell::new(None),
        }
    }

    /// The shared gateway, for callers issuing domain requests.
    #[must_use]
    pub fn gateway(&self) -> Rc<Gateway<T>> {
        Rc::clone(&self.gateway)
    }

    /// Snapshot of the current state.
    #[must_use]
    pub fn state(&self) -> AuthState {
        self.state.borrow().clone()
    }

    /// Register the single observer notified after every transition.
    /// Called immediately with the current state so the mirror starts in
    /// sync.
    pub fn set_observer(&self, observer: impl Fn(&AuthState) + 'static) {
        observer(&self.state.borrow());
        *self.observer.borrow_mut() = Some(Box::new(observer));
    }

    fn notify(&self) {
        let snapshot = self.state.borrow().clone();
        if let Some(observer) = self.observer.borrow().as_ref() {
            observer(&snapshot);
        }
    }

    /// Read the persisted session record into memory. Called once at
    /// startup; an expired record is discarded and cleared.
    pub fn rehydrate(&self, now_ms: i64) {
        let Some(identity) = self.store.load() else {
            return;
        };
        if identity.is_expired(now_ms) {
            self.store.clear();
            return;
        }
        self.state.borrow_mut().identity = Some(identity);
        self.notify();
    }

    /// Attempt to log in. On success the identity is persisted and the
    /// session becomes authenticated; on any failure the state is left
    /// untouched and the reason is returned as data.
    pub async fn login(&self, email: &str, password: &str) -> LoginOutcome {
        let _loading = LoadingGuard::begin(self);

        let body = LoginRequest {
            email: email.to_owned(),
            password: password.to_owned(),
        };
        let payload = match api::login_admin(self.gateway.as_ref(), &body).await {
            Ok(payload) => payload,
            Err(error) => return LoginOutcome::Rejected { message: error.to_string() },
        };

        match identity_from_login(&payload) {
            Some(identity) => {
                self.store.save(Some(&identity));
                self.state.borrow_mut().identity = Some(identity.clone());
                LoginOutcome::Authenticated(identity)
            }
            None => {
                let message = login_failure_message(&payload);
                leptos::logging::warn!("login rejected: {message}");
                LoginOutcome::Rejected { message }
            }
        }
    }

    /// Drop the current identity and its persisted record. Never fails;
    /// the route guard reacts to the state change by returning the UI to
    /// the login screen.
    pub fn logout(&self) {
        self.store.clear();
        {
            let mut state = self.state.borrow_mut();
            state.identity = None;
            state.loading = false;
        }
        self.notify();
    }

    /// Ask the server to email a one-time reset code. Always returns a
    /// structured outcome, including on transport failure.
    pub async fn send_reset_code(&self, email: &str) -> OpOutcome {
        let _loading = LoadingGuard::begin(self);

        let body = ResetRequest { email: email.to_owned() };
        match api::request_reset(self.gateway.as_ref(), &body).await {
            Ok(payload) => {
                let ok = payload.get("success").and_then(Value::as_bool).unwrap_or(false);
                let message = payload
                    .get("message")
                    .and_then(Value::as_str)
                    .map(ToOwned::to_owned)
                    .unwrap_or_else(|| {
                        if ok { CODE_SENT.to_owned() } else { RESET_CODE_FAILED.to_owned() }
                    });
                OpOutcome { ok, message }
            }
            Err(error) => OpOutcome { ok: false, message: error.to_string() },
        }
    }

    /// Submit the one-time code and new password. Unlike the other
    /// operations, failure is an `Err` the caller must handle.
    ///
    /// # Errors
    ///
    /// Returns the server's rejection message, or a generic reset-failed
    /// message when the server offered none.
    pub async fn confirm_reset(
        &self,
        email: &str,
        otp: &str,
        new_password: &str,
    ) -> Result<String, ApiError> {
        let _loading = LoadingGuard::begin(self);

        let body = VerifyOtpRequest {
            email: email.to_owned(),
            otp: otp.to_owned(),
            new_password: new_password.to_owned(),
        };
        match api::verify_otp(self.gateway.as_ref(), &body).await {
            Ok(payload) => Ok(payload
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or(RESET_DONE)
                .to_owned()),
            Err(ApiError::Rejected { status, message }) => Err(ApiError::Rejected {
                status,
                message: message.or_else(|| Some(RESET_FAILED.to_owned())),
            }),
            Err(other) => Err(other),
        }
    }
}

/// Scoped loading flag: set on entry, cleared exactly once on drop, so
/// every exit path of an operation restores `loading = false`.
struct LoadingGuard<'a, T: Transport> {
    session: &'a AuthSession<T>,
}

impl<'a, T: Transport> LoadingGuard<'a, T> {
    fn begin(session: &'a AuthSession<T>) -> Self {
        session.state.borrow_mut().loading = true;
        session.notify();
        Self { session }
    }
}

impl<T: Transport> Drop for LoadingGuard<'_, T> {
    fn drop(&mut self) {
        self.session.state.borrow_mut().loading = false;
        self.session.notify();
    }
}

fn json_id(value: &Value) -> String {
    match value {
        Value::String(id) => id.clone(),
        Value::Number(id) => id.to_string(),
        _ => String::new(),
    }
}

/// Build an [`Identity`] from a login payload. Requires both a `user`
/// object and a non-empty `token`; expiry comes from the token's claims
/// when they are readable.
fn identity_from_login(payload: &Value) -> Option<Identity> {
    let user = payload.get("user")?;
    let token = payload.get("token").and_then(Value::as_str)?;
    if token.is_empty() {
        return None;
    }

    let field = |key: &str| {
        user.get(key)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_owned()
    };

    Some(Identity {
        id: user.get("id").or_else(|| user.get("_id")).map(json_id).unwrap_or_default(),
        name: field("name"),
        email: field("email"),
        role: field("role"),
        token: token.to_owned(),
        expires_at: token::token_expiry(token),
    })
}

/// Server-provided failure message for a login payload that lacked a
/// user or token, falling back to a generic description.
fn login_failure_message(payload: &Value) -> String {
    ["message", "msg", "error"]
        .iter()
        .find_map(|key| payload.get(key).and_then(Value::as_str))
        .unwrap_or(MISSING_USER_TOKEN)
        .to_owned()
}
