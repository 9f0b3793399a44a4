use axum::{
    Json,
    extract::State,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::{
    error::AppError,
    message::{ChatRequest, ChatResponse, HealthResponse},
    services::downstream::extract_image_urls,
    state::SharedState,
};

pub async fn chat_handler(
    State(state): State<SharedState>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let request_id = Uuid::new_v4();

    // Rejected before any network call.
    if payload.content.trim().is_empty() {
        return Err(AppError::EmptyContent);
    }

    let result = state
        .client
        .forward(&payload.content)
        .await
        .inspect_err(|err| warn!(%request_id, error = %err, "downstream call failed"))?;

    let image_urls = extract_image_urls(&result)?;
    info!(%request_id, images = image_urls.len(), "message relayed");

    Ok(Json(ChatResponse {
        reply: format!("Scene Analysis:{} process complete", payload.content),
        image_urls,
    }))
}

pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        mode: "single-container",
    })
}
