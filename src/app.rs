//! Root application component with routing and context providers.

use std::rc::Rc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::auth::{AppSession, AuthSession, WebSessionStore};
use crate::components::require_auth::RequireAuth;
use crate::net::ClientTransport;
use crate::net::gateway::api_base_url;
use crate::pages::{
    bookings::BookingsPage, dashboard::DashboardPage, forgot_password::ForgotPasswordPage,
    login::LoginPage, vehicles::VehiclesPage,
};
use crate::state::ui::UiState;
use crate::util;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Builds the one `AuthSession` (and through it the one request gateway),
/// rehydrates it from tab storage, and provides it plus the mirrored auth
/// state to the component tree. The session is the single writer of the
/// identity; everything below reads the `RwSignal<AuthState>` mirror.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session: Rc<AppSession> = Rc::new(AuthSession::new(
        api_base_url(),
        ClientTransport::new(),
        Rc::new(WebSessionStore),
    ));
    session.rehydrate(util::time::now_millis());

    let auth = RwSignal::new(session.state());
    session.set_observer(move |state| auth.set(state.clone()));

    let ui = RwSignal::new(UiState::default());

    provide_context(auth);
    provide_context(ui);
    provide_context(StoredValue::new_local(session.gateway()));
    provide_context(StoredValue::new_local(Rc::clone(&session)));

    // Apply the persisted dark-mode preference on startup.
    Effect::new(move || {
        let enabled = util::dark_mode::read_preference();
        util::dark_mode::apply(enabled);
        ui.update(|u| u.dark_mode = enabled);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/fleetdesk.css"/>
        <Title text="FleetDesk"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("forgot-password") view=ForgotPasswordPage/>
                <Route
                    path=StaticSegment("")
                    view=|| {
                        view! {
                            <RequireAuth>
                                <DashboardPage/>
                            </RequireAuth>
                        }
                    }
                />
                <Route
                    path=StaticSegment("vehicles")
                    view=|| {
                        view! {
                            <RequireAuth>
                                <VehiclesPage/>
                            </RequireAuth>
                        }
                    }
                />
                <Route
                    path=StaticSegment("bookings")
                    view=|| {
                        view! {
                            <RequireAuth>
                                <BookingsPage/>
                            </RequireAuth>
                        }
                    }
                />
            </Routes>
        </Router>
    }
}
