use std::sync::Arc;

use axum::{
    extract::{Json, State},
    http::StatusCode,
};
use serde_json::{json, Value};
use tower_sessions::Session;
use tracing::debug;

use shared_config::AppConfig;
use shared_models::auth::SessionStatus;
use shared_models::error::AppError;
use shared_utils::session;

use crate::models::{IdentityError, LoginRequest, RegisterRequest};
use crate::services::account::AccountService;

fn map_identity_error(e: IdentityError) -> AppError {
    match e {
        IdentityError::Validation(errors) => AppError::Validation(errors),
        IdentityError::PasswordMismatch => {
            AppError::BadRequest("Passwords do not match. Please try again.".to_string())
        }
        IdentityError::DuplicateUser => AppError::Conflict(
            "User already exists. Please choose another username or email.".to_string(),
        ),
        IdentityError::InvalidCredentials => {
            AppError::Auth("Invalid username or password".to_string())
        }
        IdentityError::Hashing(msg) => AppError::Internal(msg),
        IdentityError::DatabaseError(msg) => AppError::Database(msg),
    }
}

#[axum::debug_handler]
pub async fn register(
    State(state): State<Arc<AppConfig>>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    debug!("Registering user {}", request.username);

    let service = AccountService::new(&state);
    let record = service.register(request).await.map_err(map_identity_error)?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "message": "Registration successful. Please log in.",
            "username": record.username,
        })),
    ))
}

#[axum::debug_handler]
pub async fn login(
    State(state): State<Arc<AppConfig>>,
    session: Session,
    Json(request): Json<LoginRequest>,
) -> Result<Json<Value>, AppError> {
    let service = AccountService::new(&state);
    let user = service.login(request).await.map_err(map_identity_error)?;

    session::establish(&session, &user).await?;

    Ok(Json(json!({
        "success": true,
        "user": {
            "username": user.username,
            "email": user.email,
        }
    })))
}

#[axum::debug_handler]
pub async fn current_user(session: Session) -> Result<Json<SessionStatus>, AppError> {
    let status = match session::current_user(&session).await? {
        Some(user) => SessionStatus::for_user(&user),
        None => SessionStatus::anonymous(),
    };

    Ok(Json(status))
}

#[axum::debug_handler]
pub async fn logout(session: Session) -> Result<Json<Value>, AppError> {
    session::destroy(&session).await?;

    Ok(Json(json!({
        "success": true,
        "message": "Logged out successfully",
    })))
}
