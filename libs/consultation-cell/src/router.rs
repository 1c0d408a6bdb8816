use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use shared_config::AppConfig;

use crate::handlers;

pub fn consultation_routes(state: Arc<AppConfig>) -> Router {
    Router::new()
        .route("/book-consultation", post(handlers::book_consultation))
        .route("/consultation-config", get(handlers::consultation_config))
        .with_state(state)
}
