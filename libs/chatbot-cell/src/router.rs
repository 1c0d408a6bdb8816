use axum::{routing::post, Router};

use crate::handlers;

pub fn chatbot_routes() -> Router {
    Router::new().route("/chatbot", post(handlers::chat))
}
