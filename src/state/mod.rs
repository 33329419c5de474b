//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `vehicles`, `bookings`, `ui`) so
//! individual components can depend on small focused models. Structs are
//! plain and the helpers pure; reactivity comes from wrapping them in
//! signals at the app layer.

pub mod auth;
pub mod bookings;
pub mod ui;
pub mod vehicles;
