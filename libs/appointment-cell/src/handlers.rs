use std::sync::Arc;

use axum::{
    extract::{Json, State},
    http::StatusCode,
};
use serde_json::{json, Value};

use shared_config::AppConfig;
use shared_models::error::AppError;

use crate::models::{AppointmentError, BookAppointmentRequest};
use crate::services::booking::AppointmentBookingService;
use crate::services::directory::DoctorDirectoryService;

fn map_appointment_error(e: AppointmentError) -> AppError {
    match e {
        AppointmentError::Validation(errors) => AppError::Validation(errors),
        AppointmentError::DatabaseError(msg) => AppError::Database(msg),
    }
}

#[axum::debug_handler]
pub async fn book_appointment(
    State(state): State<Arc<AppConfig>>,
    Json(request): Json<BookAppointmentRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let booking_service = AppointmentBookingService::new(&state);

    let confirmation = booking_service
        .book(request)
        .await
        .map_err(map_appointment_error)?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "message": confirmation.message(),
            "appointment": confirmation.appointment,
            "notifications": confirmation.notifications,
        })),
    ))
}

#[axum::debug_handler]
pub async fn list_doctors(
    State(state): State<Arc<AppConfig>>,
) -> Result<Json<Value>, AppError> {
    let directory = DoctorDirectoryService::new(&state);

    let doctors = directory
        .list_available()
        .await
        .map_err(map_appointment_error)?;

    Ok(Json(json!({
        "success": true,
        "doctors": doctors,
    })))
}
