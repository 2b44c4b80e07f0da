use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Top-level error type for the entire application
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Row store error: {0}")]
    RowStore(#[from] RowStoreError),

    #[error("No pending submissions to update")]
    EmptyBatch,

    #[error("Spreadsheet ID is required")]
    MissingSpreadsheetId,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Transport-level failures talking to the external row store.
///
/// Domain-level outcomes (code not found, nothing to write, duplicate
/// cancelled) are NOT errors; they are reported per submission in the batch
/// report. Anything in this enum aborts the reconciliation that hit it.
#[derive(Error, Debug)]
pub enum RowStoreError {
    #[error("HTTP transport error: {0}")]
    Http(reqwest::Error),

    #[error("Row store API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Row store request timed out")]
    Timeout,

    #[error("Malformed row store response: {0}")]
    MalformedResponse(String),
}

impl From<reqwest::Error> for RowStoreError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            RowStoreError::Timeout
        } else {
            RowStoreError::Http(error)
        }
    }
}

/// API error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub error_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_code, message, details) = match self {
            AppError::EmptyBatch => (
                StatusCode::BAD_REQUEST,
                "EMPTY_BATCH",
                "No pending submissions to update".to_string(),
                None,
            ),
            AppError::MissingSpreadsheetId => (
                StatusCode::BAD_REQUEST,
                "MISSING_SPREADSHEET_ID",
                "Spreadsheet ID is required".to_string(),
                None,
            ),
            AppError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, "INVALID_INPUT", msg, None),
            AppError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "UNAUTHORIZED",
                "Invalid API key".to_string(),
                None,
            ),
            AppError::RowStore(err) => (
                StatusCode::BAD_GATEWAY,
                "ROW_STORE_ERROR",
                "Failed to batch update spreadsheet".to_string(),
                Some(serde_json::json!({ "cause": err.to_string() })),
            ),
            AppError::Config(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "CONFIG_ERROR",
                msg,
                None,
            ),
            AppError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
                None,
            ),
        };

        let body = Json(ErrorResponse {
            error: message,
            error_code: error_code.to_string(),
            details,
        });

        (status, body).into_response()
    }
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        AppError::Internal(format!("Error converting: {:?}", error))
    }
}

/// Result type alias for the application
pub type AppResult<T> = Result<T, AppError>;
