use std::sync::Arc;

use axum::extract::{Json, Path, State};
use serde_json::{json, Value};
use tower_sessions::Session;
use uuid::Uuid;

use shared_config::AppConfig;
use shared_models::error::AppError;
use shared_utils::session;

use crate::models::ReportError;
use crate::services::report::MedicalReportService;

fn map_report_error(e: ReportError) -> AppError {
    match e {
        ReportError::NotFound => AppError::NotFound("Report not found".to_string()),
        ReportError::DatabaseError(msg) => AppError::Database(msg),
    }
}

#[axum::debug_handler]
pub async fn list_reports(
    State(state): State<Arc<AppConfig>>,
    session: Session,
) -> Result<Json<Value>, AppError> {
    let user = session::require_user(&session).await?;

    let service = MedicalReportService::new(&state);
    let reports = service
        .list_for_patient(&user.email)
        .await
        .map_err(map_report_error)?;

    Ok(Json(json!({
        "success": true,
        "reports": reports,
    })))
}

#[axum::debug_handler]
pub async fn get_report(
    State(state): State<Arc<AppConfig>>,
    session: Session,
    Path(report_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let user = session::require_user(&session).await?;

    let service = MedicalReportService::new(&state);
    let report = service
        .get_for_patient(report_id, &user.email)
        .await
        .map_err(map_report_error)?;

    Ok(Json(json!({
        "success": true,
        "report": report,
    })))
}
