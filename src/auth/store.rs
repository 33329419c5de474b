//! Session persistence.
//!
//! The current identity is mirrored to `sessionStorage` under a single
//! well-known key so a page reload does not force a re-login. Session
//! storage is tab-scoped on purpose: one browser tab is one session, and
//! closing the tab ends it.
//!
//! ERROR HANDLING
//! ==============
//! Storage access and record decoding never fail loudly. Missing,
//! corrupted, or non-JSON content loads as "no session"; write errors
//! (quota, disabled storage) are dropped so persistence can degrade
//! without taking the session down with it.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::cell::RefCell;

use crate::state::auth::Identity;

/// Storage key for the single session record.
const STORAGE_KEY: &str = "fleetdesk_session";

/// Durable mirror of the current identity.
///
/// The in-memory copy owned by `AuthSession` always wins on conflict; the
/// store is only read once, at startup, to rehydrate it.
pub trait SessionStore {
    /// Read the persisted identity, or `None` when absent or unreadable.
    fn load(&self) -> Option<Identity>;

    /// Persist the identity. `None` clears the record.
    fn save(&self, identity: Option<&Identity>);

    /// Remove the record.
    fn clear(&self);
}

/// Decode a raw stored record, tolerating any malformed content.
///
/// A record with an empty token is treated as absent: an identity without
/// a token cannot authorize anything.
fn decode_record(raw: &str) -> Option<Identity> {
    serde_json::from_str::<Identity>(raw)
        .ok()
        .filter(|identity| !identity.token.is_empty())
}

fn encode_record(identity: &Identity) -> Option<String> {
    serde_json::to_string(identity).ok()
}

/// Browser-backed store over `window.sessionStorage`.
///
/// Off-browser (SSR and native tests) every operation is an inert no-op,
/// mirroring how the rest of the crate degrades outside hydration.
#[derive(Clone, Copy, Debug, Default)]
pub struct WebSessionStore;

#[cfg(feature = "hydrate")]
fn session_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.session_storage().ok().flatten()
}

impl SessionStore for WebSessionStore {
    fn load(&self) -> Option<Identity> {
        #[cfg(feature = "hydrate")]
        {
            let raw = session_storage()?.get_item(STORAGE_KEY).ok().flatten()?;
            decode_record(&raw)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn save(&self, identity: Option<&Identity>) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = session_storage() else {
                return;
            };
            match identity.and_then(encode_record) {
                Some(record) => {
                    let _ = storage.set_item(STORAGE_KEY, &record);
                }
                None => {
                    let _ = storage.remove_item(STORAGE_KEY);
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = identity;
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = session_storage() {
                let _ = storage.remove_item(STORAGE_KEY);
            }
        }
    }
}

/// In-memory store holding the raw record text.
///
/// Used by tests, which also inject corrupted content through
/// [`MemorySessionStore::set_raw`] to prove `load` tolerance.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    record: RefCell<Option<String>>,
}

impl MemorySessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the stored record with arbitrary raw text.
    pub fn set_raw(&self, raw: impl Into<String>) {
        *self.record.borrow_mut() = Some(raw.into());
    }

    /// The raw record text, if any.
    #[must_use]
    pub fn raw(&self) -> Option<String> {
        self.record.borrow().clone()
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Option<Identity> {
        self.record.borrow().as_deref().and_then(decode_record)
    }

    fn save(&self, identity: Option<&Identity>) {
        *self.record.borrow_mut() = identity.and_then(encode_record);
    }

    fn clear(&self) {
        *self.record.borrow_mut() = None;
    }
}
