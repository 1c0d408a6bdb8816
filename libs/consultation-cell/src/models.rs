use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use notification_cell::NotificationOutcome;
use shared_models::error::FieldErrors;

/// Persisted consultation document in the store's `consultations` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Consultation {
    pub id: Uuid,
    /// Human-facing booking reference shown to the patient and support staff.
    pub consultation_id: String,
    pub patient_name: String,
    pub patient_email: String,
    pub patient_phone: String,
    pub consultation_type: ConsultationType,
    pub amount: u32,
    pub preferred_date: Option<String>,
    pub health_concern: String,
    pub medical_history: Option<String>,
    pub status: ConsultationStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ConsultationType {
    Instant,
    Scheduled,
    Emergency,
}

impl ConsultationType {
    /// Parse a client-submitted type string; anything outside the known set
    /// is rejected before pricing or persistence.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "instant" => Some(Self::Instant),
            "scheduled" => Some(Self::Scheduled),
            "emergency" => Some(Self::Emergency),
            _ => None,
        }
    }

    pub const ALL: [ConsultationType; 3] = [Self::Instant, Self::Scheduled, Self::Emergency];
}

impl fmt::Display for ConsultationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConsultationType::Instant => write!(f, "instant"),
            ConsultationType::Scheduled => write!(f, "scheduled"),
            ConsultationType::Emergency => write!(f, "emergency"),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ConsultationStatus {
    #[serde(rename = "pending")]
    Pending,
    #[serde(rename = "confirmed")]
    Confirmed,
    #[serde(rename = "in-progress")]
    InProgress,
    #[serde(rename = "completed")]
    Completed,
    #[serde(rename = "cancelled")]
    Cancelled,
}

impl fmt::Display for ConsultationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConsultationStatus::Pending => write!(f, "pending"),
            ConsultationStatus::Confirmed => write!(f, "confirmed"),
            ConsultationStatus::InProgress => write!(f, "in-progress"),
            ConsultationStatus::Completed => write!(f, "completed"),
            ConsultationStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookConsultationRequest {
    pub patient_name: String,
    pub patient_email: String,
    pub patient_phone: String,
    /// Raw type string from the client; validated against the known set.
    pub consultation_type: String,
    #[serde(default)]
    pub preferred_date: Option<String>,
    pub health_concern: String,
    #[serde(default)]
    pub medical_history: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConsultationConfirmation {
    pub consultation: Consultation,
    pub notifications: NotificationOutcome,
}

impl ConsultationConfirmation {
    pub fn message(&self) -> String {
        self.notifications.confirmation_message("Consultation")
    }
}

/// Fixed price per consultation type, served by the config endpoint.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PriceTable {
    pub instant: u32,
    pub scheduled: u32,
    pub emergency: u32,
}

#[derive(Debug, thiserror::Error)]
pub enum ConsultationError {
    #[error("Consultation validation failed")]
    Validation(FieldErrors),

    #[error("Configured price {amount} for {consultation_type} consultations exceeds the ceiling of {ceiling}")]
    PriceAboveCeiling {
        consultation_type: ConsultationType,
        amount: u32,
        ceiling: u32,
    },

    #[error("Database error: {0}")]
    DatabaseError(String),
}
