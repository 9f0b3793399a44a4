// src/error.rs
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

use crate::services::downstream::DownstreamError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("message content cannot be empty")]
    EmptyContent,
    #[error(transparent)]
    Downstream(#[from] DownstreamError),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::EmptyContent => StatusCode::BAD_REQUEST,
            AppError::Downstream(err) => match err {
                DownstreamError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
                DownstreamError::Timeout => StatusCode::GATEWAY_TIMEOUT,
                DownstreamError::BadStatus(_) => StatusCode::INTERNAL_SERVER_ERROR,
                DownstreamError::Malformed(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}
