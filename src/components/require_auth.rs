//! Route guard for authenticated pages.

#[cfg(test)]
#[path = "require_auth_test.rs"]
mod require_auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;

/// Whether the current state allows entering a protected route. Pure:
/// authenticated means yes, anything else means no.
#[must_use]
pub fn can_enter(state: &AuthState) -> bool {
    state.is_authenticated()
}

/// Wrapper for protected pages.
///
/// Re-evaluated on every navigation and auth transition; children render
/// only while the session is authenticated, and an anonymous session is
/// sent back to the login screen. Holds no state of its own.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    // Redirect once the session settles anonymous. The loading check
    // avoids bouncing mid-login.
    Effect::new(move || {
        let state = auth.get();
        if !state.loading && !can_enter(&state) {
            navigate("/login", NavigateOptions::default());
        }
    });

    view! {
        <Show when=move || can_enter(&auth.get())>
            {children()}
        </Show>
    }
}
