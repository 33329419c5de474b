#[cfg(test)]
#[path = "vehicles_test.rs"]
mod vehicles_test;

use crate::net::types::Vehicle;

/// State for the vehicles page: the search box and dialog visibility.
/// The vehicle list itself lives in a page resource and refetches after
/// every mutation.
#[derive(Clone, Debug, Default)]
pub struct VehiclesState {
    pub query: String,
    pub show_create: bool,
}

/// Case-insensitive filter over name, registration, and category.
#[must_use]
pub fn filter_vehicles(vehicles: &[Vehicle], query: &str) -> Vec<Vehicle> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return vehicles.to_vec();
    }
    vehicles
        .iter()
        .filter(|vehicle| {
            vehicle.name.to_lowercase().contains(&needle)
                || vehicle.registration_number.to_lowercase().contains(&needle)
                || vehicle.category.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}
