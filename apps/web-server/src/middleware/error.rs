//! Error handling for page handlers.
//!
//! Data-store failures never reach this type: page handlers catch them and
//! render their own failure panels. What is left is the machinery failing.

use actix_web::{HttpResponse, ResponseError, http::StatusCode, http::header::ContentType};
use thiserror::Error;

/// Application-level error type.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Template rendering failed: {0}")]
    Render(#[from] askama::Error),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        tracing::error!(error = %self, "Internal error");

        HttpResponse::build(self.status_code())
            .content_type(ContentType::plaintext())
            .body("Internal Server Error")
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
