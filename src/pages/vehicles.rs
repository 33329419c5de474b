//! Vehicles page: searchable fleet table with create and delete actions.

use leptos::prelude::*;

use crate::components::sidebar::Sidebar;
use crate::components::vehicle_dialog::VehicleDialog;
use crate::net::api;
use crate::net::use_gateway;
use crate::state::vehicles::filter_vehicles;

/// Vehicles page.
#[component]
pub fn VehiclesPage() -> impl IntoView {
    let gateway = use_gateway();

    let vehicles = LocalResource::new(move || async move {
        api::fetch_vehicles(gateway.get_value().as_ref()).await
    });

    let query = RwSignal::new(String::new());
    let show_create = RwSignal::new(false);
    let action_error = RwSignal::new(None::<String>);

    let delete = Callback::new(move |id: String| {
        action_error.set(None);
        let vehicles = vehicles.clone();
        leptos::task::spawn_local(async move {
            match api::delete_vehicle(gateway.get_value().as_ref(), &id).await {
                Ok(_) => vehicles.refetch(),
                Err(err) => action_error.set(Some(err.to_string())),
            }
        });
    });

    let on_cancel = Callback::new(move |()| show_create.set(false));
    let on_created = Callback::new(move |()| {
        show_create.set(false);
        vehicles.refetch();
    });

    view! {
        <div class="app-shell">
            <Sidebar/>
            <main class="app-shell__content vehicles-page">
                <header class="vehicles-page__header">
                    <h1>"Vehicles"</h1>
                    <input
                        class="vehicles-page__search"
                        type="search"
                        placeholder="Search name, registration, category..."
                        prop:value=move || query.get()
                        on:input=move |ev| query.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" on:click=move |_| show_create.set(true)>
                        "+ Add Vehicle"
                    </button>
                </header>

                {move || {
                    action_error
                        .get()
                        .map(|message| view! { <p class="vehicles-page__error">{message}</p> })
                }}

                <Suspense fallback=move || view! { <p>"Loading vehicles..."</p> }>
                    {move || {
                        vehicles
                            .get()
                            .map(|result| match result {
                                Err(err) => {
                                    view! { <p class="vehicles-page__error">{err.to_string()}</p> }
                                        .into_any()
                                }
                                Ok(fleet) => {
                                    let filtered = filter_vehicles(&fleet, &query.get());
                                    if filtered.is_empty() {
                                        return view! {
                                            <p class="vehicles-page__empty">"No vehicles match"</p>
                                        }
                                            .into_any();
                                    }
                                    view! {
                                        <table class="data-table">
                                            <thead>
                                                <tr>
                                                    <th>"Name"</th>
                                                    <th>"Registration"</th>
                                                    <th>"Category"</th>
                                                    <th>"Branch"</th>
                                                    <th>"Price/day"</th>
                                                    <th>"Status"</th>
                                                    <th></th>
                                                </tr>
                                            </thead>
                                            <tbody>
                                                {filtered
                                                    .into_iter()
                                                    .map(|vehicle| {
                                                        let id = vehicle.id.clone();
                                                        view! {
                                                            <tr>
                                                                <td>{vehicle.name}</td>
                                                                <td>{vehicle.registration_number}</td>
                                                                <td>{vehicle.category}</td>
                                                                <td>{vehicle.branch}</td>
                                                                <td>
                                                                    {format!("${:.2}", vehicle.price_per_day)}
                                                                </td>
                                                                <td>{vehicle.status}</td>
                                                                <td>
                                                                    <button
                                                                        class="btn btn--danger"
                                                                        on:click=move |_| delete.run(id.clone())
                                                                    >
                                                                        "Delete"
                                                                    </button>
                                                                </td>
                                                            </tr>
                                                        }
                                                    })
                                                    .collect::<Vec<_>>()}
                                            </tbody>
                                        </table>
                                    }
                                        .into_any()
                                }
                            })
                    }}
                </Suspense>

                <Show when=move || show_create.get()>
                    <VehicleDialog on_cancel=on_cancel on_created=on_created/>
                </Show>
            </main>
        </div>
    }
}
