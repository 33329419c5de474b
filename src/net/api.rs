//! Typed API calls, one thin wrapper per endpoint.
//!
//! Every call goes through the [`Gateway`], so all of them inherit the
//! bearer header, timeout, and centralized error interpretation. The auth
//! endpoints return raw JSON values: their payload shapes vary and the
//! session layer owns interpreting them.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde_json::Value;

use crate::net::gateway::{ApiError, Gateway, Transport};
use crate::net::types::{
    Ack, Booking, Branch, Category, Customer, Discount, Incident, LoginRequest, NotificationItem,
    Payment, RefundRequest, ResetRequest, Vehicle, VehicleDraft, VerifyOtpRequest,
};

// =============================================================
// Auth
// =============================================================

pub async fn login_admin<T: Transport>(
    gateway: &Gateway<T>,
    body: &LoginRequest,
) -> Result<Value, ApiError> {
    gateway.post("/user/loginAdmin", body).await
}

pub async fn request_reset<T: Transport>(
    gateway: &Gateway<T>,
    body: &ResetRequest,
) -> Result<Value, ApiError> {
    gateway.post("/auth/request-reset", body).await
}

pub async fn verify_otp<T: Transport>(
    gateway: &Gateway<T>,
    body: &VerifyOtpRequest,
) -> Result<Value, ApiError> {
    gateway.post("/auth/verify-otp", body).await
}

// =============================================================
// Vehicles
// =============================================================

pub async fn fetch_vehicles<T: Transport>(gateway: &Gateway<T>) -> Result<Vec<Vehicle>, ApiError> {
    gateway.get("/vehicles").await
}

pub async fn fetch_vehicle<T: Transport>(
    gateway: &Gateway<T>,
    id: &str,
) -> Result<Vehicle, ApiError> {
    gateway.get(&format!("/vehicles/{id}")).await
}

pub async fn create_vehicle<T: Transport>(
    gateway: &Gateway<T>,
    draft: &VehicleDraft,
) -> Result<Vehicle, ApiError> {
    gateway.post("/vehicles", draft).await
}

pub async fn update_vehicle<T: Transport>(
    gateway: &Gateway<T>,
    id: &str,
    draft: &VehicleDraft,
) -> Result<Vehicle, ApiError> {
    gateway.put(&format!("/vehicles/{id}"), draft).await
}

pub async fn delete_vehicle<T: Transport>(gateway: &Gateway<T>, id: &str) -> Result<Ack, ApiError> {
    gateway.delete(&format!("/vehicles/{id}")).await
}

// =============================================================
// Bookings
// =============================================================

pub async fn fetch_bookings<T: Transport>(gateway: &Gateway<T>) -> Result<Vec<Booking>, ApiError> {
    gateway.get("/bookings").await
}

pub async fn fetch_booking<T: Transport>(
    gateway: &Gateway<T>,
    id: &str,
) -> Result<Booking, ApiError> {
    gateway.get(&format!("/bookings/{id}")).await
}

pub async fn update_booking_status<T: Transport>(
    gateway: &Gateway<T>,
    id: &str,
    status: &str,
) -> Result<Booking, ApiError> {
    gateway
        .put(&format!("/bookings/{id}/status"), &serde_json::json!({ "status": status }))
        .await
}

// =============================================================
// Reference data
// =============================================================

pub async fn fetch_branches<T: Transport>(gateway: &Gateway<T>) -> Result<Vec<Branch>, ApiError> {
    gateway.get("/branches").await
}

pub async fn fetch_categories<T: Transport>(
    gateway: &Gateway<T>,
) -> Result<Vec<Category>, ApiError> {
    gateway.get("/categories").await
}

pub async fn fetch_customers<T: Transport>(
    gateway: &Gateway<T>,
) -> Result<Vec<Customer>, ApiError> {
    gateway.get("/customers").await
}

pub async fn fetch_discounts<T: Transport>(
    gateway: &Gateway<T>,
) -> Result<Vec<Discount>, ApiError> {
    gateway.get("/discounts").await
}

pub async fn fetch_incidents<T: Transport>(
    gateway: &Gateway<T>,
) -> Result<Vec<Incident>, ApiError> {
    gateway.get("/incidents").await
}

// =============================================================
// Notifications
// =============================================================

pub async fn fetch_notifications<T: Transport>(
    gateway: &Gateway<T>,
) -> Result<Vec<NotificationItem>, ApiError> {
    gateway.get("/notifications").await
}

pub async fn mark_notification_read<T: Transport>(
    gateway: &Gateway<T>,
    id: &str,
) -> Result<Ack, ApiError> {
    gateway
        .put(&format!("/notifications/{id}/read"), &serde_json::json!({}))
        .await
}

// =============================================================
// Payments
// =============================================================

pub async fn fetch_payments<T: Transport>(gateway: &Gateway<T>) -> Result<Vec<Payment>, ApiError> {
    gateway.get("/payments").await
}

pub async fn refund_payment<T: Transport>(
    gateway: &Gateway<T>,
    id: &str,
    refund: &RefundRequest,
) -> Result<Payment, ApiError> {
    gateway.post(&format!("/payments/{id}/refund"), refund).await
}
