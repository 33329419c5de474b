//! Two-step forgot-password flow: request a one-time code, then confirm
//! it together with the new password.
//!
//! The staged email/code/password live only in page signals; navigating
//! away discards the pending reset.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::auth::use_session;
use crate::state::auth::AuthState;

#[derive(Clone, Copy, PartialEq, Eq)]
enum ResetStep {
    Request,
    Confirm,
}

/// Forgot-password page.
#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let session = use_session();
    let navigate = use_navigate();

    let step = RwSignal::new(ResetStep::Request);
    let email = RwSignal::new(String::new());
    let otp = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let notice = RwSignal::new(None::<String>);
    let error = RwSignal::new(None::<String>);

    let busy = move || auth.get().loading;

    let request = Callback::new(move |()| {
        if busy() || email.get_untracked().trim().is_empty() {
            return;
        }
        error.set(None);
        notice.set(None);

        leptos::task::spawn_local(async move {
            let session = session.get_value();
            let outcome = session.send_reset_code(email.get_untracked().trim()).await;
            if outcome.ok {
                notice.set(Some(outcome.message));
                step.set(ResetStep::Confirm);
            } else {
                error.set(Some(outcome.message));
            }
        });
    });

    let confirm = Callback::new(move |()| {
        if busy() || otp.get_untracked().trim().is_empty() || new_password.get_untracked().is_empty()
        {
            return;
        }
        error.set(None);

        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let session = session.get_value();
            // confirm_reset reports failure as an error, unlike the
            // request step.
            match session
                .confirm_reset(
                    email.get_untracked().trim(),
                    otp.get_untracked().trim(),
                    &new_password.get_untracked(),
                )
                .await
            {
                Ok(_) => navigate("/login", NavigateOptions::default()),
                Err(err) => error.set(Some(err.to_string())),
            }
        });
    });

    view! {
        <div class="reset-page">
            <h1>"Reset password"</h1>

            {move || notice.get().map(|message| view! { <p class="reset-page__notice">{message}</p> })}
            {move || error.get().map(|message| view! { <p class="reset-page__error">{message}</p> })}

            <Show
                when=move || step.get() == ResetStep::Confirm
                fallback=move || {
                    view! {
                        <form
                            class="reset-page__form"
                            on:submit=move |ev: leptos::ev::SubmitEvent| {
                                ev.prevent_default();
                                request.run(());
                            }
                        >
                            <label class="reset-page__label">
                                "Email"
                                <input
                                    class="reset-page__input"
                                    type="email"
                                    prop:value=move || email.get()
                                    on:input=move |ev| email.set(event_target_value(&ev))
                                />
                            </label>
                            <button class="btn btn--primary" type="submit" disabled=busy>
                                {move || if busy() { "Sending..." } else { "Send reset code" }}
                            </button>
                        </form>
                    }
                }
            >
                <form
                    class="reset-page__form"
                    on:submit=move |ev: leptos::ev::SubmitEvent| {
                        ev.prevent_default();
                        confirm.run(());
                    }
                >
                    <label class="reset-page__label">
                        "One-time code"
                        <input
                            class="reset-page__input"
                            type="text"
                            prop:value=move || otp.get()
                            on:input=move |ev| otp.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="reset-page__label">
                        "New password"
                        <input
                            class="reset-page__input"
                            type="password"
                            prop:value=move || new_password.get()
                            on:input=move |ev| new_password.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn btn--primary" type="submit" disabled=busy>
                        {move || if busy() { "Resetting..." } else { "Reset password" }}
                    </button>
                </form>
            </Show>

            <a class="reset-page__back" href="/login">
                "Back to login"
            </a>
        </div>
    }
}
