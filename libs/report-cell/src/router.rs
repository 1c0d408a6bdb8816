use std::sync::Arc;

use axum::{routing::get, Router};

use shared_config::AppConfig;

use crate::handlers;

pub fn report_routes(state: Arc<AppConfig>) -> Router {
    Router::new()
        .route("/reports", get(handlers::list_reports))
        .route("/reports/{id}", get(handlers::get_report))
        .with_state(state)
}
