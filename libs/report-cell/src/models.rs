use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stored medical report. Reports are written by clinic staff through other
/// channels; this service only reads them back to their patient.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicalReport {
    pub id: Uuid,
    pub patient_name: String,
    pub email: String,
    pub title: String,
    pub report_type: ReportType,
    pub date: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReportType {
    Lab,
    Xray,
    Prescription,
    Consultation,
    Surgery,
    General,
}

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("Report not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}
