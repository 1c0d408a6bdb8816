use std::sync::Arc;

use axum::{
    extract::{Json, State},
    http::StatusCode,
};
use serde_json::{json, Value};
use tracing::error;

use shared_config::AppConfig;
use shared_models::error::AppError;

use crate::models::{BookConsultationRequest, ConsultationError};
use crate::services::booking::ConsultationBookingService;
use crate::services::pricing::ConsultationPricing;

fn map_consultation_error(e: ConsultationError) -> AppError {
    match e {
        ConsultationError::Validation(errors) => AppError::Validation(errors),
        ConsultationError::PriceAboveCeiling { .. } => {
            error!("Refusing consultation booking: {}", e);
            AppError::Internal("Consultation pricing is misconfigured".to_string())
        }
        ConsultationError::DatabaseError(msg) => AppError::Database(msg),
    }
}

#[axum::debug_handler]
pub async fn book_consultation(
    State(state): State<Arc<AppConfig>>,
    Json(request): Json<BookConsultationRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let booking_service = ConsultationBookingService::new(&state);

    let confirmation = booking_service
        .book(request)
        .await
        .map_err(map_consultation_error)?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "consultationId": confirmation.consultation.consultation_id.clone(),
            "type": confirmation.consultation.consultation_type,
            "status": confirmation.consultation.status,
            "amount": confirmation.consultation.amount,
            "message": confirmation.message(),
            "consultation": confirmation.consultation,
            "notifications": confirmation.notifications,
        })),
    ))
}

/// Price table and ceiling, consumed by the booking front end before it
/// shows the payment step.
#[axum::debug_handler]
pub async fn consultation_config() -> Json<Value> {
    let pricing = ConsultationPricing::default();

    Json(json!({
        "prices": pricing.table(),
        "maxAmount": pricing.ceiling(),
        "currency": "INR",
    }))
}
