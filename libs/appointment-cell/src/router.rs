use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use shared_config::AppConfig;

use crate::handlers;

pub fn appointment_routes(state: Arc<AppConfig>) -> Router {
    Router::new()
        .route("/book-appointment", post(handlers::book_appointment))
        .route("/doctors", get(handlers::list_doctors))
        .with_state(state)
}
