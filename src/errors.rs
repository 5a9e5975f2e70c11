use crate::models::ErrorBody;
use crate::services::{GroqError, StoreError};
use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

/// Boundary error taxonomy. Every variant renders the same structured body:
/// `{ detail, code, timestamp }`. Nothing is retried automatically.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Authentication(String),

    #[error("{0}")]
    Authorization(String),

    #[error("Rate limit exceeded")]
    RateLimit,

    #[error("Upstream completion service failed: {0}")]
    Gateway(#[source] GroqError),
}

impl ApiError {
    fn code(&self) -> &'static str {
        match self {
            ApiError::NotFound(_) => "NOT_FOUND",
            ApiError::Validation(_) => "VALIDATION_ERROR",
            ApiError::Authentication(_) => "AUTH_ERROR",
            ApiError::Authorization(_) => "FORBIDDEN",
            ApiError::RateLimit => "RATE_LIMIT_ERROR",
            ApiError::Gateway(_) => "GATEWAY_ERROR",
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(detail) => {
                ApiError::NotFound(format!("Profile not found for user {}", detail))
            }
        }
    }
}

impl From<GroqError> for ApiError {
    fn from(err: GroqError) -> Self {
        ApiError::Gateway(err)
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        ApiError::Validation(errors.to_string())
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Authentication(_) => StatusCode::UNAUTHORIZED,
            ApiError::Authorization(_) => StatusCode::FORBIDDEN,
            ApiError::RateLimit => StatusCode::TOO_MANY_REQUESTS,
            ApiError::Gateway(_) => StatusCode::BAD_GATEWAY,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            detail: self.to_string(),
            code: self.code().to_string(),
            timestamp: chrono::Utc::now(),
        })
    }
}

/// Handle malformed JSON payloads with the structured error body.
pub fn handle_json_payload_error(
    err: actix_web::error::JsonPayloadError,
    req: &actix_web::HttpRequest,
) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    ApiError::Validation(format!("Invalid JSON: {}", err)).into()
}

/// Handle malformed query strings with the structured error body.
pub fn handle_query_payload_error(
    err: actix_web::error::QueryPayloadError,
    _req: &actix_web::HttpRequest,
) -> actix_web::Error {
    ApiError::Validation(format!("Invalid query: {}", err)).into()
}
