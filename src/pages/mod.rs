//! Top-level pages, one per route.

pub mod bookings;
pub mod dashboard;
pub mod forgot_password;
pub mod login;
pub mod vehicles;
