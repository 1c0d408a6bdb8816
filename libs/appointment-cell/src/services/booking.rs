use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use notification_cell::{NotificationDispatcher, NotificationOutcome};
use shared_config::AppConfig;
use shared_database::DocumentStoreClient;
use shared_models::error::FieldErrors;
use shared_utils::validation::{check_email, check_phone, check_required, normalize_email};

use crate::models::{Appointment, AppointmentError, BookAppointmentRequest, BookingConfirmation};
use crate::services::templates;

const APPOINTMENTS_COLLECTION: &str = "appointments";

/// Linear booking workflow: validate, persist, then best-effort notify.
/// Validation failures stop the request before anything is written; once the
/// record is stored it is the source of truth and notification failures only
/// show up as flags in the response.
pub struct AppointmentBookingService {
    store: Arc<DocumentStoreClient>,
    notifier: Arc<NotificationDispatcher>,
}

impl AppointmentBookingService {
    pub fn new(config: &AppConfig) -> Self {
        Self::with_dependencies(
            Arc::new(DocumentStoreClient::new(config)),
            Arc::new(NotificationDispatcher::new(config)),
        )
    }

    pub fn with_dependencies(
        store: Arc<DocumentStoreClient>,
        notifier: Arc<NotificationDispatcher>,
    ) -> Self {
        Self { store, notifier }
    }

    pub async fn book(
        &self,
        request: BookAppointmentRequest,
    ) -> Result<BookingConfirmation, AppointmentError> {
        // **Step 1: Validation** - every failing field reported at once
        let errors = validate_booking_request(&request);
        if !errors.is_empty() {
            warn!("Appointment booking rejected: {} invalid field(s)", errors.len());
            return Err(AppointmentError::Validation(errors));
        }

        // **Step 2: Normalize and persist** - persistence failure is fatal
        let appointment = Appointment {
            id: Uuid::new_v4(),
            name: request.name.trim().to_string(),
            email: normalize_email(&request.email),
            phone: request.phone.trim().to_string(),
            date: request.date.trim().to_string(),
            time_slot: request.time_slot.trim().to_string(),
            doctor: request.doctor.trim().to_string(),
            created_at: Utc::now(),
        };

        let document = serde_json::to_value(&appointment)
            .map_err(|e| AppointmentError::DatabaseError(e.to_string()))?;
        self.store
            .insert_one(APPOINTMENTS_COLLECTION, document)
            .await
            .map_err(|e| AppointmentError::DatabaseError(e.to_string()))?;

        info!("Appointment {} booked with {}", appointment.id, appointment.doctor);

        // **Step 3: Best-effort notifications** - outcomes captured, never raised
        let email_sent = self
            .notifier
            .send_email(templates::confirmation_email(&appointment))
            .await;
        let sms_sent = self
            .notifier
            .send_sms(templates::confirmation_sms(&appointment))
            .await;

        Ok(BookingConfirmation {
            appointment,
            notifications: NotificationOutcome {
                email_sent,
                sms_sent,
            },
        })
    }
}

fn validate_booking_request(request: &BookAppointmentRequest) -> FieldErrors {
    let mut errors = FieldErrors::new();

    check_required(&mut errors, "name", &request.name);
    check_required(&mut errors, "email", &request.email);
    check_required(&mut errors, "phone", &request.phone);
    check_required(&mut errors, "date", &request.date);
    check_required(&mut errors, "timeSlot", &request.time_slot);
    check_required(&mut errors, "doctor", &request.doctor);

    check_email(&mut errors, "email", &request.email);
    check_phone(&mut errors, "phone", &request.phone);

    errors
}
