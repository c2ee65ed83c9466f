use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::guard::LoaderError;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    Unauthorized(String),
    BadGateway(String),
    InternalServerError(anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message, code) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg, "NOT_FOUND"),
            AppError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg, "UNAUTHORIZED"),
            AppError::BadGateway(msg) => {
                tracing::warn!(error = %msg, "PointControl API failure surfaced to page");
                (
                    StatusCode::BAD_GATEWAY,
                    "PointControl API unavailable".to_string(),
                    "BAD_GATEWAY",
                )
            }
            AppError::InternalServerError(err) => {
                tracing::error!("Internal server error: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                    "INTERNAL_SERVER_ERROR",
                )
            }
        };

        let body = Json(ErrorResponse {
            error: error_message,
            code: code.to_string(),
        });

        (status, body).into_response()
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::InternalServerError(err)
    }
}

impl From<LoaderError> for AppError {
    fn from(err: LoaderError) -> Self {
        match err {
            // only reachable from guest pages; authenticated pages handle it in the guard
            LoaderError::InvalidSession => {
                AppError::Unauthorized("Session token is no longer accepted".to_string())
            }
            LoaderError::Api(api) => AppError::BadGateway(api.to_string()),
            LoaderError::Other(other) => AppError::InternalServerError(other),
        }
    }
}
