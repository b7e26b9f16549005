use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use models::FieldErrors;
use service::ServiceError;
use thiserror::Error;
use tracing::error;

/// `{"error": title, "detail": ...}` body used for every non-validation failure.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub title: &'static str,
    pub detail: Option<String>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, title: &'static str, detail: Option<String>) -> Self {
        Self { status, title, detail }
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        let body = match self.detail {
            Some(detail) => serde_json::json!({"error": self.title, "detail": detail}),
            None => serde_json::json!({"error": self.title}),
        };
        (self.status, Json(body)).into_response()
    }
}

/// Every failure a vendor endpoint can answer with. Mapped to HTTP here and
/// nowhere else.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("validation failed: {0}")]
    Validation(FieldErrors),
    #[error("malformed request body: {0}")]
    BadRequest(String),
    #[error("payload too large: {0}")]
    PayloadTooLarge(String),
    #[error("unsupported media type: {0}")]
    UnsupportedMediaType(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            Self::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            Self::Validation(errors) => (status, Json(errors)).into_response(),
            Self::BadRequest(msg) => JsonApiError::new(status, "Bad Request", Some(msg)).into_response(),
            Self::PayloadTooLarge(msg) => {
                JsonApiError::new(status, "Payload Too Large", Some(msg)).into_response()
            }
            Self::UnsupportedMediaType(msg) => {
                JsonApiError::new(status, "Unsupported Media Type", Some(msg)).into_response()
            }
            Self::NotFound(msg) => JsonApiError::new(status, "Not Found", Some(msg)).into_response(),
            Self::Conflict(msg) => JsonApiError::new(status, "Conflict", Some(msg)).into_response(),
            Self::Internal(msg) => {
                error!(error = %msg, "internal error while handling request");
                JsonApiError::new(status, "Internal Server Error", None).into_response()
            }
        }
    }
}

impl From<FieldErrors> for ApiError {
    fn from(errors: FieldErrors) -> Self {
        Self::Validation(errors)
    }
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::NotFound(msg) => Self::NotFound(msg),
            ServiceError::Conflict(msg) => Self::Conflict(msg),
            ServiceError::Validation(errors) => Self::Validation(errors),
            other @ (ServiceError::Db(_) | ServiceError::Storage(_)) => Self::Internal(other.to_string()),
        }
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("storage backend unavailable: {0}")]
    Storage(String),
    #[error(transparent)]
    Any(#[from] anyhow::Error),
}
