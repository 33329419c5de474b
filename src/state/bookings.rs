#[cfg(test)]
#[path = "bookings_test.rs"]
mod bookings_test;

use crate::net::types::Booking;

/// Statuses an operator can move a booking to, in workflow order.
pub const BOOKING_STATUSES: [&str; 5] =
    ["pending", "confirmed", "active", "completed", "cancelled"];

/// Aggregates shown on the dashboard overview.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BookingSummary {
    /// Bookings that still need operator attention or are underway.
    pub open: usize,
    pub completed: usize,
    /// Total amount across non-cancelled bookings.
    pub revenue: f64,
}

/// Fold a booking list into dashboard aggregates.
#[must_use]
pub fn summarize(bookings: &[Booking]) -> BookingSummary {
    let mut summary = BookingSummary::default();
    for booking in bookings {
        match booking.status.as_str() {
            "pending" | "confirmed" | "active" => summary.open += 1,
            "completed" => summary.completed += 1,
            _ => {}
        }
        if booking.status != "cancelled" {
            summary.revenue += booking.total_amount;
        }
    }
    summary
}
