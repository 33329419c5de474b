//! Modal dialog for adding a vehicle to the fleet.

use leptos::prelude::*;

use crate::net::api;
use crate::net::types::VehicleDraft;
use crate::net::use_gateway;

/// Create-vehicle dialog. On success the `on_created` callback fires so
/// the owning page can refetch its list.
#[component]
pub fn VehicleDialog(on_cancel: Callback<()>, on_created: Callback<()>) -> impl IntoView {
    let gateway = use_gateway();

    let name = RwSignal::new(String::new());
    let registration = RwSignal::new(String::new());
    let category = RwSignal::new(String::new());
    let branch = RwSignal::new(String::new());
    let price = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);

    let submit = Callback::new(move |()| {
        if saving.get_untracked() {
            return;
        }
        let Ok(price_per_day) = price.get_untracked().trim().parse::<f64>() else {
            error.set(Some("enter a valid daily price".to_owned()));
            return;
        };
        let draft = VehicleDraft {
            name: name.get_untracked().trim().to_owned(),
            registration_number: registration.get_untracked().trim().to_owned(),
            category: category.get_untracked().trim().to_owned(),
            branch: branch.get_untracked().trim().to_owned(),
            price_per_day,
        };
        if draft.name.is_empty() || draft.registration_number.is_empty() {
            error.set(Some("name and registration are required".to_owned()));
            return;
        }

        error.set(None);
        saving.set(true);
        leptos::task::spawn_local(async move {
            let result = api::create_vehicle(gateway.get_value().as_ref(), &draft).await;
            saving.set(false);
            match result {
                Ok(_) => on_created.run(()),
                Err(err) => error.set(Some(err.to_string())),
            }
        });
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Add Vehicle"</h2>

                <label class="dialog__label">
                    "Name"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Registration"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || registration.get()
                        on:input=move |ev| registration.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Category"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || category.get()
                        on:input=move |ev| category.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Branch"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || branch.get()
                        on:input=move |ev| branch.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Price per day"
                    <input
                        class="dialog__input"
                        type="number"
                        prop:value=move || price.get()
                        on:input=move |ev| price.set(event_target_value(&ev))
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                submit.run(());
                            }
                        }
                    />
                </label>

                {move || error.get().map(|message| view! { <p class="dialog__error">{message}</p> })}

                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button
                        class="btn btn--primary"
                        disabled=move || saving.get()
                        on:click=move |_| submit.run(())
                    >
                        {move || if saving.get() { "Saving..." } else { "Create" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
