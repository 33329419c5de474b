//! Login page with the admin credential form.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::auth::{LoginOutcome, use_session};
use crate::state::auth::AuthState;

/// Login page. Submits credentials through the session; failures render
/// inline. Submission is disabled while a call is in flight so a rapid
/// double-submit cannot start overlapping logins.
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let session = use_session();
    let navigate = use_navigate();
    let navigate_after_login = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    // A rehydrated session skips the form entirely.
    Effect::new(move || {
        if auth.get().is_authenticated() {
            navigate("/", NavigateOptions::default());
        }
    });

    let can_submit = move || {
        !auth.get().loading && !email.get().trim().is_empty() && !password.get().is_empty()
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !can_submit() {
            return;
        }
        error.set(None);

        let navigate = navigate_after_login.clone();
        leptos::task::spawn_local(async move {
            let session = session.get_value();
            let outcome = session
                .login(email.get_untracked().trim(), &password.get_untracked())
                .await;
            match outcome {
                LoginOutcome::Authenticated(_) => navigate("/", NavigateOptions::default()),
                LoginOutcome::Rejected { message } => error.set(Some(message)),
            }
        });
    };

    view! {
        <div class="login-page">
            <h1>"FleetDesk"</h1>
            <p>"Vehicle rental administration"</p>

            <form class="login-page__form" on:submit=on_submit>
                <label class="login-page__label">
                    "Email"
                    <input
                        class="login-page__input"
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class="login-page__label">
                    "Password"
                    <input
                        class="login-page__input"
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>

                {move || error.get().map(|message| view! { <p class="login-page__error">{message}</p> })}

                <button class="btn btn--primary" type="submit" disabled=move || !can_submit()>
                    {move || if auth.get().loading { "Signing in..." } else { "Sign in" }}
                </button>
            </form>

            <a class="login-page__forgot" href="/forgot-password">
                "Forgot password?"
            </a>
        </div>
    }
}
