use axum::extract::Json;
use tracing::debug;

use shared_models::error::AppError;

use crate::models::{ChatReply, ChatRequest};
use crate::services::assistant;

#[axum::debug_handler]
pub async fn chat(Json(request): Json<ChatRequest>) -> Result<Json<ChatReply>, AppError> {
    if request.message.trim().is_empty() {
        return Err(AppError::BadRequest("message must not be empty".to_string()));
    }

    debug!("Chatbot message: {}", request.message);
    Ok(Json(assistant::reply_to(&request.message)))
}
