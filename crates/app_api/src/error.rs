//! HTTP error contract
//!
//! Single owner of the status-code mapping. Handlers return
//! `Result<_, ApiError>` and never build status codes themselves; every
//! failure renders as `{ "error": message }`.

use app_fs::FsError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use std::io::ErrorKind;

/// Error taxonomy reported to clients.
#[derive(Debug)]
pub enum ApiError {
    /// Target absent — 404
    NotFound(String),
    /// Target already exists where exclusivity is required — 409
    Conflict(String),
    /// Wrong type or missing required field — 400
    InvalidArgument(String),
    /// Everything else (permission, disk, unexpected) — 500
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn into_message(self) -> String {
        match self {
            ApiError::NotFound(msg)
            | ApiError::Conflict(msg)
            | ApiError::InvalidArgument(msg)
            | ApiError::Internal(msg) => msg,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        (
            status,
            Json(ErrorBody {
                error: self.into_message(),
            }),
        )
            .into_response()
    }
}

impl From<FsError> for ApiError {
    fn from(error: FsError) -> Self {
        match &error {
            FsError::NotFound(_) => ApiError::NotFound(error.to_string()),
            FsError::NotADirectory(_) | FsError::IsADirectory(_) => {
                ApiError::InvalidArgument(error.to_string())
            }
            FsError::Io(e) => match e.kind() {
                ErrorKind::NotFound => ApiError::NotFound(error.to_string()),
                ErrorKind::AlreadyExists => ApiError::Conflict(error.to_string()),
                _ => ApiError::Internal(error.to_string()),
            },
        }
    }
}
