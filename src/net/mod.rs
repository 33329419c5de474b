//! Networking: the request gateway, the browser transport, wire types,
//! and typed API calls.
//!
//! DESIGN
//! ======
//! All outbound traffic funnels through one [`Gateway`] instance owned by
//! the app shell and shared via context, so authorization headers and
//! error handling have a single home.

pub mod api;
pub mod browser;
pub mod gateway;
#[cfg(test)]
pub mod testing;
pub mod types;

use std::rc::Rc;

use leptos::prelude::{LocalStorage, StoredValue, expect_context};

pub use browser::ClientTransport;
pub use gateway::{ApiError, Gateway};

/// The gateway type used by the running application.
pub type AppGateway = Gateway<ClientTransport>;

/// Context handle for the shared gateway. Stored thread-locally since the
/// gateway is single-threaded by construction.
pub type GatewayHandle = StoredValue<Rc<AppGateway>, LocalStorage>;

/// Grab the shared gateway from context.
///
/// # Panics
///
/// Panics when called outside the component tree set up by `App`.
#[must_use]
pub fn use_gateway() -> GatewayHandle {
    expect_context()
}
