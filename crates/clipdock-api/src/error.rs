//! HTTP error response conversion.
//!
//! Wraps `clipdock_core::AppError` so it can implement `IntoResponse`
//! (orphan rules forbid implementing the axum trait for the core type
//! directly).

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use clipdock_core::{AppError, LogLevel};
use clipdock_db::CatalogError;
use clipdock_processing::ProcessError;
use clipdock_storage::StorageError;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    /// Machine-readable error code for programmatic handling
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

#[derive(Debug)]
pub struct HttpAppError(pub AppError);

impl From<AppError> for HttpAppError {
    fn from(err: AppError) -> Self {
        HttpAppError(err)
    }
}

fn log_error(error: &AppError) {
    let code = error.error_code();
    match error.log_level() {
        LogLevel::Debug => {
            tracing::debug!(error = %error, code = code, "Request failed");
        }
        LogLevel::Warn => {
            tracing::warn!(error = %error, code = code, "Request failed");
        }
        LogLevel::Error => {
            tracing::error!(error = %error, code = code, "Request failed");
        }
    }
}

impl IntoResponse for HttpAppError {
    fn into_response(self) -> Response {
        let app_error = &self.0;

        let status = StatusCode::from_u16(app_error.http_status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        log_error(app_error);

        // Sensitive variants keep their internals in the logs only.
        let details = if app_error.is_sensitive() {
            None
        } else {
            Some(app_error.to_string())
        };

        let body = Json(ErrorResponse {
            error: app_error.client_message(),
            code: app_error.error_code().to_string(),
            details,
        });

        (status, body).into_response()
    }
}

// Convert domain errors to HttpAppError so handlers can use `?` directly.

impl From<StorageError> for HttpAppError {
    fn from(err: StorageError) -> Self {
        HttpAppError(AppError::from(err))
    }
}

impl From<ProcessError> for HttpAppError {
    fn from(err: ProcessError) -> Self {
        HttpAppError(AppError::from(err))
    }
}

impl From<CatalogError> for HttpAppError {
    fn from(err: CatalogError) -> Self {
        HttpAppError(AppError::from(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_storage_error_not_found() {
        let storage_err = StorageError::NotFound("b/missing.mp4".to_string());
        let HttpAppError(app_err) = storage_err.into();
        match app_err {
            AppError::NotFound(msg) => assert_eq!(msg, "b/missing.mp4"),
            _ => panic!("Expected NotFound variant"),
        }
    }

    #[test]
    fn test_from_storage_error_upload_failed() {
        let storage_err = StorageError::UploadFailed("connection reset".to_string());
        let HttpAppError(app_err) = storage_err.into();
        match app_err {
            AppError::Storage(msg) => assert!(msg.contains("connection reset")),
            _ => panic!("Expected Storage variant"),
        }
    }

    #[test]
    fn test_from_process_error() {
        let HttpAppError(app_err) = ProcessError::EmptyOutput.into();
        match app_err {
            AppError::Processing(msg) => assert!(msg.contains("empty")),
            _ => panic!("Expected Processing variant"),
        }
        assert_eq!(
            AppError::from(ProcessError::NoStreams).http_status_code(),
            500
        );
    }
}
