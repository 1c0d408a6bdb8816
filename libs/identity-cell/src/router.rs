use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use shared_config::AppConfig;

use crate::handlers;

/// Top-level identity routes: register/login/logout live at the site root.
pub fn identity_routes(state: Arc<AppConfig>) -> Router {
    Router::new()
        .route("/register", post(handlers::register))
        .route("/login", post(handlers::login))
        .route("/logout", post(handlers::logout))
        .with_state(state)
}

/// Session-query route, mounted under `/api` alongside the other API routes.
pub fn session_routes() -> Router {
    Router::new().route("/user", get(handlers::current_user))
}
