//! HTTP error mapping.
//!
//! Every failure becomes `{ "success": false, "error": <message> }`. Caller
//! mistakes (bad seed, bad theme name, missing parameters) are 400, unknown
//! routes 404, and everything else, upstream and bucket failures included, 500.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use irodori_core::CoreError;
use irodori_theme::ThemeError;
use irodori_upstream::UpstreamError;
use serde::Serialize;
use thiserror::Error;

/// Body of every error response; field order is part of the contract.
#[derive(Debug, Serialize)]
struct ErrorBody {
    success: bool,
    error: String,
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Route not found")]
    NotFound,

    #[error("{0}")]
    BadRequest(String),

    #[error(transparent)]
    Theme(#[from] ThemeError),

    #[error(transparent)]
    Upstream(#[from] UpstreamError),

    #[error(transparent)]
    Bucket(#[from] CoreError),

    #[error("palette payload is not valid JSON: {0}")]
    Payload(#[from] serde_json::Error),

    #[error("background task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Theme(e) if e.is_client_error() => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            irodori_observability::record_error(&self);
        }
        let body = Json(ErrorBody {
            success: false,
            error: self.to_string(),
        });
        (status, body).into_response()
    }
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;
