use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::shared::types::ApiResponse;
use crate::shared::views::TemplateError;

#[derive(Debug, Error)]
pub enum AppError {
    /// User-correctable: missing field, unresolvable address, missing query
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The geocoding service answered but had no match for the query
    #[error("No geocoding results for '{0}'")]
    GeocodeNotFound(String),

    #[error("Geocoding service error: {0}")]
    GeocodeService(String),

    #[error("Storage error: {0}")]
    Storage(#[from] sqlx::Error),

    #[error("Template error: {0}")]
    Template(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// Status code and the message safe to show to the caller.
    ///
    /// System faults are logged here with full detail and replaced by a
    /// generic message.
    pub fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            AppError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::GeocodeNotFound(query) => (
                StatusCode::BAD_REQUEST,
                format!("No geocoding results found for '{}'.", query),
            ),
            AppError::GeocodeService(msg) => {
                tracing::error!("Geocoding service error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Geocoding service error occurred".to_string(),
                )
            }
            AppError::Storage(e) => {
                tracing::error!("Database error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Database error occurred".to_string(),
                )
            }
            AppError::Template(msg) => {
                tracing::error!("Template error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        }
    }
}

impl From<TemplateError> for AppError {
    fn from(e: TemplateError) -> Self {
        AppError::Template(e.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();
        let errors = status.is_client_error().then(|| vec![message.clone()]);

        let body = Json(ApiResponse::<()>::error(Some(message), errors));

        (status, body).into_response()
    }
}

/// Error type for the HTML pages: same status mapping, plain-text body.
#[derive(Debug)]
pub struct PageError(pub AppError);

impl From<AppError> for PageError {
    fn from(e: AppError) -> Self {
        PageError(e)
    }
}

impl From<TemplateError> for PageError {
    fn from(e: TemplateError) -> Self {
        PageError(e.into())
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let (status, message) = self.0.status_and_message();
        (status, message).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
