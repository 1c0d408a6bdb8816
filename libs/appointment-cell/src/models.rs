use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use notification_cell::NotificationOutcome;
use shared_models::error::FieldErrors;

/// Persisted appointment document. Immutable once booked; field names match
/// the store's `appointments` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date: String,
    pub time_slot: String,
    pub doctor: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookAppointmentRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date: String,
    pub time_slot: String,
    pub doctor: String,
}

/// Booking result: the persisted record plus the per-channel notification
/// outcome. Notification failure never appears as a booking failure.
#[derive(Debug, Clone, Serialize)]
pub struct BookingConfirmation {
    pub appointment: Appointment,
    pub notifications: NotificationOutcome,
}

impl BookingConfirmation {
    pub fn message(&self) -> String {
        self.notifications.confirmation_message("Appointment")
    }
}

/// Doctor directory entry, read-only in this service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Doctor {
    pub name: String,
    pub speciality: String,
    pub experience: String,
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
    pub available: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum AppointmentError {
    #[error("Appointment validation failed")]
    Validation(FieldErrors),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
