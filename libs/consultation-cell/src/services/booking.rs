use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use notification_cell::{NotificationDispatcher, NotificationOutcome};
use shared_config::AppConfig;
use shared_database::DocumentStoreClient;
use shared_models::error::FieldErrors;
use shared_utils::validation::{check_email, check_phone, check_required, normalize_email};

use crate::models::{
    BookConsultationRequest, Consultation, ConsultationConfirmation, ConsultationError,
    ConsultationStatus, ConsultationType,
};
use crate::services::pricing::ConsultationPricing;
use crate::services::templates;

const CONSULTATIONS_COLLECTION: &str = "consultations";

/// Consultation booking workflow. Identical spine to appointment booking
/// with one extra gate: the amount is resolved from the static price table
/// before anything is persisted, so an unrecognized type or a misconfigured
/// price can never produce a stored record.
pub struct ConsultationBookingService {
    store: Arc<DocumentStoreClient>,
    notifier: Arc<NotificationDispatcher>,
    pricing: ConsultationPricing,
}

impl ConsultationBookingService {
    pub fn new(config: &AppConfig) -> Self {
        Self::with_dependencies(
            Arc::new(DocumentStoreClient::new(config)),
            Arc::new(NotificationDispatcher::new(config)),
            ConsultationPricing::default(),
        )
    }

    pub fn with_dependencies(
        store: Arc<DocumentStoreClient>,
        notifier: Arc<NotificationDispatcher>,
        pricing: ConsultationPricing,
    ) -> Self {
        Self {
            store,
            notifier,
            pricing,
        }
    }

    pub async fn book(
        &self,
        request: BookConsultationRequest,
    ) -> Result<ConsultationConfirmation, ConsultationError> {
        // **Step 1: Validation** - field checks plus the type whitelist.
        // A missing or unknown type always leaves a field error behind.
        let (errors, consultation_type) = validate_consultation_request(&request);
        let consultation_type = match consultation_type {
            Some(consultation_type) if errors.is_empty() => consultation_type,
            _ => {
                warn!("Consultation booking rejected: {} invalid field(s)", errors.len());
                return Err(ConsultationError::Validation(errors));
            }
        };

        // **Step 2: Price resolution** - static table + ceiling guard, before persistence
        let amount = self.pricing.price_for(consultation_type)?;

        // **Step 3: Normalize and persist**
        let consultation = Consultation {
            id: Uuid::new_v4(),
            consultation_id: new_consultation_reference(),
            patient_name: request.patient_name.trim().to_string(),
            patient_email: normalize_email(&request.patient_email),
            patient_phone: request.patient_phone.trim().to_string(),
            consultation_type,
            amount,
            preferred_date: request
                .preferred_date
                .as_deref()
                .map(str::trim)
                .filter(|d| !d.is_empty())
                .map(str::to_string),
            health_concern: request.health_concern.trim().to_string(),
            medical_history: request
                .medical_history
                .as_deref()
                .map(str::trim)
                .filter(|h| !h.is_empty())
                .map(str::to_string),
            status: ConsultationStatus::Pending,
            created_at: Utc::now(),
        };

        let document = serde_json::to_value(&consultation)
            .map_err(|e| ConsultationError::DatabaseError(e.to_string()))?;
        self.store
            .insert_one(CONSULTATIONS_COLLECTION, document)
            .await
            .map_err(|e| ConsultationError::DatabaseError(e.to_string()))?;

        info!(
            "Consultation {} ({}) booked for amount {}",
            consultation.consultation_id, consultation.consultation_type, consultation.amount
        );

        // **Step 4: Best-effort notifications**
        let email_sent = self
            .notifier
            .send_email(templates::confirmation_email(&consultation))
            .await;
        let sms_sent = self
            .notifier
            .send_sms(templates::confirmation_sms(&consultation))
            .await;

        Ok(ConsultationConfirmation {
            consultation,
            notifications: NotificationOutcome {
                email_sent,
                sms_sent,
            },
        })
    }

}

/// Booking reference printed on confirmations, e.g. `HC-9F2C41A07D3B`.
fn new_consultation_reference() -> String {
    let id = Uuid::new_v4().simple().to_string();
    format!("HC-{}", id[..12].to_uppercase())
}

fn validate_consultation_request(
    request: &BookConsultationRequest,
) -> (FieldErrors, Option<ConsultationType>) {
    let mut errors = FieldErrors::new();

    check_required(&mut errors, "patientName", &request.patient_name);
    check_required(&mut errors, "patientEmail", &request.patient_email);
    check_required(&mut errors, "patientPhone", &request.patient_phone);
    check_required(&mut errors, "consultationType", &request.consultation_type);
    check_required(&mut errors, "healthConcern", &request.health_concern);

    check_email(&mut errors, "patientEmail", &request.patient_email);
    check_phone(&mut errors, "patientPhone", &request.patient_phone);

    let consultation_type = ConsultationType::parse(&request.consultation_type);
    if consultation_type.is_none() && !request.consultation_type.trim().is_empty() {
        errors.add(
            "consultationType",
            "consultationType must be one of instant, scheduled or emergency",
        );
    }

    (errors, consultation_type)
}
