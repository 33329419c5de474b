//! Navigation sidebar shown on every authenticated page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::auth::use_session;
use crate::state::auth::AuthState;
use crate::state::ui::UiState;
use crate::util::dark_mode;

/// Sidebar with navigation links, the signed-in operator, a dark-mode
/// toggle, and logout.
#[component]
pub fn Sidebar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let session = use_session();
    let navigate = use_navigate();

    let operator = move || {
        auth.get()
            .identity
            .map(|identity| identity.name)
            .unwrap_or_default()
    };

    let on_logout = move |_| {
        session.get_value().logout();
        navigate("/login", NavigateOptions::default());
    };

    let on_toggle_dark = move |_| {
        ui.update(|u| u.dark_mode = dark_mode::toggle(u.dark_mode));
    };

    let on_collapse = move |_| {
        ui.update(|u| u.sidebar_collapsed = !u.sidebar_collapsed);
    };

    let sidebar_class = move || {
        if ui.get().sidebar_collapsed {
            "sidebar sidebar--collapsed"
        } else {
            "sidebar"
        }
    };

    let dark_label = move || {
        if ui.get().dark_mode { "Light mode" } else { "Dark mode" }
    };

    view! {
        <aside class=sidebar_class>
            <div class="sidebar__brand">
                <span class="sidebar__logo">"FleetDesk"</span>
                <button class="sidebar__collapse" on:click=on_collapse title="Toggle sidebar">
                    "<"
                </button>
            </div>

            <nav class="sidebar__nav">
                <a class="sidebar__link" href="/">"Dashboard"</a>
                <a class="sidebar__link" href="/vehicles">"Vehicles"</a>
                <a class="sidebar__link" href="/bookings">"Bookings"</a>
            </nav>

            <div class="sidebar__footer">
                <span class="sidebar__operator">{operator}</span>
                <button class="btn sidebar__dark-toggle" on:click=on_toggle_dark>
                    {dark_label}
                </button>
                <button class="btn sidebar__logout" on:click=on_logout>
                    "Log out"
                </button>
            </div>
        </aside>
    }
}
