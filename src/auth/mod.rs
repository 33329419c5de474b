//! Session and authentication lifecycle.
//!
//! DESIGN
//! ======
//! Split by responsibility: `token` reads claims out of bearer tokens,
//! `store` persists the session record to tab storage, and `session`
//! orchestrates the login/logout/reset state machine over the request
//! gateway. The session is the only writer of the current identity.

pub mod session;
pub mod store;
pub mod token;

use std::rc::Rc;

use leptos::prelude::{LocalStorage, StoredValue, expect_context};

pub use session::{AuthSession, LoginOutcome, OpOutcome};
pub use store::{MemorySessionStore, SessionStore, WebSessionStore};

use crate::net::ClientTransport;

/// The session type used by the running application.
pub type AppSession = AuthSession<ClientTransport>;

/// Context handle for the shared session. Stored thread-locally since
/// the session is single-threaded by construction.
pub type SessionHandle = StoredValue<Rc<AppSession>, LocalStorage>;

/// Grab the shared session from context.
///
/// # Panics
///
/// Panics when called outside the component tree set up by `App`.
#[must_use]
pub fn use_session() -> SessionHandle {
    expect_context()
}
