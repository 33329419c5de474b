//! Dashboard overview: fleet and booking metrics plus recent bookings.

use leptos::prelude::*;

use crate::components::sidebar::Sidebar;
use crate::components::stat_card::StatCard;
use crate::net::api;
use crate::net::use_gateway;
use crate::state::bookings::summarize;

/// Dashboard page.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let gateway = use_gateway();

    let vehicles = LocalResource::new(move || async move {
        api::fetch_vehicles(gateway.get_value().as_ref()).await
    });
    let bookings = LocalResource::new(move || async move {
        api::fetch_bookings(gateway.get_value().as_ref()).await
    });

    view! {
        <div class="app-shell">
            <Sidebar/>
            <main class="app-shell__content dashboard-page">
                <header class="dashboard-page__header">
                    <h1>"Overview"</h1>
                </header>

                <div class="dashboard-page__stats">
                    <Suspense fallback=move || view! { <p>"Loading metrics..."</p> }>
                        {move || {
                            vehicles
                                .get()
                                .map(|result| match result {
                                    Ok(fleet) => {
                                        view! {
                                            <StatCard label="Fleet size" value=fleet.len().to_string()/>
                                        }
                                            .into_any()
                                    }
                                    Err(err) => {
                                        view! { <p class="dashboard-page__error">{err.to_string()}</p> }
                                            .into_any()
                                    }
                                })
                        }}
                        {move || {
                            bookings
                                .get()
                                .map(|result| match result {
                                    Ok(list) => {
                                        let summary = summarize(&list);
                                        view! {
                                            <StatCard label="Open bookings" value=summary.open.to_string()/>
                                            <StatCard label="Completed" value=summary.completed.to_string()/>
                                            <StatCard
                                                label="Revenue"
                                                value=format!("${:.2}", summary.revenue)
                                            />
                                        }
                                            .into_any()
                                    }
                                    Err(err) => {
                                        view! { <p class="dashboard-page__error">{err.to_string()}</p> }
                                            .into_any()
                                    }
                                })
                        }}
                    </Suspense>
                </div>

                <section class="dashboard-page__recent">
                    <h2>"Recent bookings"</h2>
                    <Suspense fallback=move || view! { <p>"Loading bookings..."</p> }>
                        {move || {
                            bookings
                                .get()
                                .and_then(|result| result.ok())
                                .map(|list| {
                                    if list.is_empty() {
                                        return view! {
                                            <p class="dashboard-page__empty">"No bookings yet"</p>
                                        }
                                            .into_any();
                                    }
                                    list.into_iter()
                                        .take(5)
                                        .map(|booking| {
                                            view! {
                                                <div class="dashboard-page__booking-row">
                                                    <span>{booking.customer_name}</span>
                                                    <span>{booking.vehicle_name}</span>
                                                    <span>{booking.start_date}</span>
                                                    <span class="dashboard-page__status">
                                                        {booking.status}
                                                    </span>
                                                </div>
                                            }
                                        })
                                        .collect::<Vec<_>>()
                                        .into_any()
                                })
                        }}
                    </Suspense>
                </section>
            </main>
        </div>
    }
}
