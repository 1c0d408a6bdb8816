use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use shared_models::error::FieldErrors;

/// Stored user document. The password never leaves the store in any response;
/// only the argon2 PHC string is persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, thiserror::Error)]
pub enum IdentityError {
    #[error("Validation failed")]
    Validation(FieldErrors),

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Username or email already registered")]
    DuplicateUser,

    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Password hashing error: {0}")]
    Hashing(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
