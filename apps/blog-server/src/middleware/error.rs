//! Error handling for handlers.
//!
//! Store failures never reach this type: handlers turn them into redirects.
//! What is left is the server failing to produce a page at all.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};

/// Application-level error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Template rendering failed: {0}")]
    Render(#[from] askama::Error),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        tracing::error!(error = %self, "Internal error");
        HttpResponse::build(self.status_code()).body("Internal Server Error")
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
