//! WebServer-specific error types

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use commission::{CommissionError, DataProviderError, ErrorKind};
use serde::Serialize;
use shared::SharedError;
use thiserror::Error;

/// Process-level failures: configuration, startup, serving
#[derive(Error, Debug)]
pub enum WebServerError {
    #[error("Server startup error: {0}")]
    ServerStartup(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Dataset error: {0}")]
    Dataset(#[from] DataProviderError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl WebServerError {
    pub fn config(message: impl Into<String>) -> Self {
        WebServerError::Config(message.into())
    }
}

pub type WebServerResult<T> = Result<T, WebServerError>;

/// Request failure rendered as `{ statusCode, error, message }`
#[derive(Debug)]
pub struct ApiError(CommissionError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0.kind() {
            ErrorKind::Validation => StatusCode::BAD_REQUEST,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Unauthorized => StatusCode::UNAUTHORIZED,
            ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn inner(&self) -> &CommissionError {
        &self.0
    }
}

impl From<CommissionError> for ApiError {
    fn from(error: CommissionError) -> Self {
        ApiError(error)
    }
}

impl From<SharedError> for ApiError {
    fn from(error: SharedError) -> Self {
        ApiError(CommissionError::Validation(error))
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ErrorBody {
    status_code: u16,
    error: &'static str,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            status_code: status.as_u16(),
            error: status.canonical_reason().unwrap_or("Error"),
            message: self.0.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
