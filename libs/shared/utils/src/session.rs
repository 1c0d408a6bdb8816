use tower_sessions::Session;
use tracing::debug;

use shared_models::auth::SessionUser;
use shared_models::error::AppError;

const SESSION_USER_KEY: &str = "healthconnect.user";

/// Store the authenticated identity in the server-side session. The session
/// id is rotated so a pre-login cookie never names a logged-in session.
pub async fn establish(session: &Session, user: &SessionUser) -> Result<(), AppError> {
    session.cycle_id().await.map_err(session_error)?;
    session
        .insert(SESSION_USER_KEY, user.clone())
        .await
        .map_err(session_error)?;

    debug!("Session established for user {}", user.username);
    Ok(())
}

/// Identity of the current caller, if any.
pub async fn current_user(session: &Session) -> Result<Option<SessionUser>, AppError> {
    session
        .get::<SessionUser>(SESSION_USER_KEY)
        .await
        .map_err(session_error)
}

/// Identity of the current caller, or an authentication error.
pub async fn require_user(session: &Session) -> Result<SessionUser, AppError> {
    current_user(session)
        .await?
        .ok_or_else(|| AppError::Auth("Not logged in".to_string()))
}

/// Destroy the session. Destruction failure is reported, never swallowed.
pub async fn destroy(session: &Session) -> Result<(), AppError> {
    session
        .flush()
        .await
        .map_err(|e| AppError::Internal(format!("Failed to destroy session: {}", e)))
}

fn session_error(e: tower_sessions::session::Error) -> AppError {
    AppError::Internal(format!("Session store error: {}", e))
}
