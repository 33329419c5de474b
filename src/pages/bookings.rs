//! Bookings page: booking table with inline status updates.

use leptos::prelude::*;

use crate::components::sidebar::Sidebar;
use crate::net::api;
use crate::net::use_gateway;
use crate::state::bookings::BOOKING_STATUSES;

/// Bookings page.
#[component]
pub fn BookingsPage() -> impl IntoView {
    let gateway = use_gateway();

    let bookings = LocalResource::new(move || async move {
        api::fetch_bookings(gateway.get_value().as_ref()).await
    });

    let action_error = RwSignal::new(None::<String>);

    let set_status = Callback::new(move |(id, status): (String, String)| {
        action_error.set(None);
        let bookings = bookings.clone();
        leptos::task::spawn_local(async move {
            match api::update_booking_status(gateway.get_value().as_ref(), &id, &status).await {
                Ok(_) => bookings.refetch(),
                Err(err) => action_error.set(Some(err.to_string())),
            }
        });
    });

    view! {
        <div class="app-shell">
            <Sidebar/>
            <main class="app-shell__content bookings-page">
                <header class="bookings-page__header">
                    <h1>"Bookings"</h1>
                </header>

                {move || {
                    action_error
                        .get()
                        .map(|message| view! { <p class="bookings-page__error">{message}</p> })
                }}

                <Suspense fallback=move || view! { <p>"Loading bookings..."</p> }>
                    {move || {
                        bookings
                            .get()
                            .map(|result| match result {
                                Err(err) => {
                                    view! { <p class="bookings-page__error">{err.to_string()}</p> }
                                        .into_any()
                                }
                                Ok(list) => {
                                    if list.is_empty() {
                                        return view! {
                                            <p class="bookings-page__empty">"No bookings yet"</p>
                                        }
                                            .into_any();
                                    }
                                    view! {
                                        <table class="data-table">
                                            <thead>
                                                <tr>
                                                    <th>"Customer"</th>
                                                    <th>"Vehicle"</th>
                                                    <th>"From"</th>
                                                    <th>"To"</th>
                                                    <th>"Total"</th>
                                                    <th>"Status"</th>
                                                </tr>
                                            </thead>
                                            <tbody>
                                                {list
                                                    .into_iter()
                                                    .map(|booking| {
                                                        let id = booking.id.clone();
                                                        let current = booking.status.clone();
                                                        view! {
                                                            <tr>
                                                                <td>{booking.customer_name}</td>
                                                                <td>{booking.vehicle_name}</td>
                                                                <td>{booking.start_date}</td>
                                                                <td>{booking.end_date}</td>
                                                                <td>
                                                                    {format!("${:.2}", booking.total_amount)}
                                                                </td>
                                                                <td>
                                                                    <select
                                                                        class="bookings-page__status"
                                                                        on:change=move |ev| {
                                                                            set_status
                                                                                .run((
                                                                                    id.clone(),
                                                                                    event_target_value(&ev),
                                                                                ))
                                                                        }
                                                                    >
                                                                        {BOOKING_STATUSES
                                                                            .iter()
                                                                            .map(|status| {
                                                                                view! {
                                                                                    <option
                                                                                        value=*status
                                                                                        selected=*status == current
                                                                                    >
                                                                                        {*status}
                                                                                    </option>
                                                                                }
                                                                            })
                                                                            .collect::<Vec<_>>()}
                                                                    </select>
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
            </main>
        </div>
    }
}
