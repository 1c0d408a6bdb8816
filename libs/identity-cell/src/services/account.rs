use std::sync::Arc;

use chrono::Utc;
use serde_json::json;
use tracing::{debug, info};
use uuid::Uuid;

use shared_config::AppConfig;
use shared_database::DocumentStoreClient;
use shared_models::auth::SessionUser;
use shared_models::error::FieldErrors;
use shared_utils::validation::{check_email, check_required, normalize_email};

use crate::models::{IdentityError, LoginRequest, RegisterRequest, UserRecord};
use crate::services::password;

const USERS_COLLECTION: &str = "users";

pub struct AccountService {
    store: Arc<DocumentStoreClient>,
}

impl AccountService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            store: Arc::new(DocumentStoreClient::new(config)),
        }
    }

    pub fn with_store(store: Arc<DocumentStoreClient>) -> Self {
        Self { store }
    }

    /// Create a new account: confirmation match, field validation, uniqueness
    /// check, then an argon2-hashed insert. The store's unique indexes on
    /// username/email back the read-then-write check.
    pub async fn register(&self, request: RegisterRequest) -> Result<UserRecord, IdentityError> {
        if request.password != request.confirm_password {
            return Err(IdentityError::PasswordMismatch);
        }

        let mut errors = FieldErrors::new();
        check_required(&mut errors, "username", &request.username);
        check_required(&mut errors, "email", &request.email);
        check_required(&mut errors, "password", &request.password);
        check_email(&mut errors, "email", &request.email);
        if !errors.is_empty() {
            return Err(IdentityError::Validation(errors));
        }

        let username = request.username.trim().to_string();
        let email = normalize_email(&request.email);

        let existing: Option<UserRecord> = self
            .store
            .find_one(
                USERS_COLLECTION,
                json!({ "$or": [ { "username": &username }, { "email": &email } ] }),
            )
            .await
            .map_err(|e| IdentityError::DatabaseError(e.to_string()))?;

        if existing.is_some() {
            debug!("Registration rejected: username or email already taken");
            return Err(IdentityError::DuplicateUser);
        }

        let password_hash = password::hash_password(&request.password)
            .map_err(|e| IdentityError::Hashing(e.to_string()))?;

        let record = UserRecord {
            id: Uuid::new_v4(),
            username,
            email,
            password_hash,
            created_at: Utc::now(),
        };

        let document = serde_json::to_value(&record)
            .map_err(|e| IdentityError::DatabaseError(e.to_string()))?;
        self.store
            .insert_one(USERS_COLLECTION, document)
            .await
            .map_err(|e| IdentityError::DatabaseError(e.to_string()))?;

        info!("Registered user {}", record.username);
        Ok(record)
    }

    /// Verify credentials and return the session identity. Unknown username
    /// and wrong password are indistinguishable to the caller; the missing-user
    /// path still burns a hash so the timing profile stays flat.
    pub async fn login(&self, request: LoginRequest) -> Result<SessionUser, IdentityError> {
        let username = request.username.trim();

        let user: Option<UserRecord> = self
            .store
            .find_one(USERS_COLLECTION, json!({ "username": username }))
            .await
            .map_err(|e| IdentityError::DatabaseError(e.to_string()))?;

        let user = match user {
            Some(user) => user,
            None => {
                let _ = password::hash_password(&request.password);
                return Err(IdentityError::InvalidCredentials);
            }
        };

        let verified = password::verify_password(&request.password, &user.password_hash)
            .map_err(|e| IdentityError::Hashing(e.to_string()))?;

        if !verified {
            return Err(IdentityError::InvalidCredentials);
        }

        info!("User {} logged in", user.username);
        Ok(SessionUser {
            id: user.id,
            username: user.username,
            email: user.email,
        })
    }
}
