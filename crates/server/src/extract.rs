//! JSON body extractor for write endpoints.
//!
//! Wraps `axum::Json` so that its rejections come back as [`ApiError`]:
//! a missing or non-JSON `Content-Type` is a 415 and is decided before the
//! body is read; a body over the request body limit is a 413; a body that
//! does not decode into `T` is a 400.

use axum::async_trait;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::http::StatusCode;
use axum::Json;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::errors::ApiError;

#[derive(Debug, Clone, Copy, Default)]
pub struct VendorJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for VendorJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => {
                debug!(status = %rejection.status(), reason = %rejection.body_text(), "json body rejected");
                Err(match rejection {
                    JsonRejection::MissingJsonContentType(r) => {
                        ApiError::UnsupportedMediaType(r.body_text())
                    }
                    JsonRejection::JsonDataError(r) => ApiError::BadRequest(r.body_text()),
                    JsonRejection::JsonSyntaxError(r) => ApiError::BadRequest(r.body_text()),
                    JsonRejection::BytesRejection(r) if r.status() == StatusCode::PAYLOAD_TOO_LARGE => {
                        ApiError::PayloadTooLarge(r.body_text())
                    }
                    other => ApiError::BadRequest(other.body_text()),
                })
            }
        }
    }
}
