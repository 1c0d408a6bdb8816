use std::sync::Arc;

use axum::{routing::get, Router};

use appointment_cell::router::appointment_routes;
use chatbot_cell::router::chatbot_routes;
use consultation_cell::router::consultation_routes;
use identity_cell::router::{identity_routes, session_routes};
use report_cell::router::report_routes;
use shared_config::AppConfig;

pub fn create_router(state: Arc<AppConfig>) -> Router {
    let api_routes = Router::new()
        .merge(session_routes())
        .merge(appointment_routes(state.clone()))
        .merge(consultation_routes(state.clone()))
        .merge(report_routes(state.clone()))
        .merge(chatbot_routes());

    Router::new()
        .route("/", get(|| async { "HealthConnect+ API is running!" }))
        .merge(identity_routes(state))
        .nest("/api", api_routes)
}
