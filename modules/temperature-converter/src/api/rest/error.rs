use axum::Json;
use axum::response::{IntoResponse, Response};
use http::StatusCode;

use super::dto::ErrorDetail;
use crate::domain::DomainError;

pub type ApiResult<T> = Result<T, ApiError>;

/// HTTP error carrying a status and the human-readable `detail`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct ApiError {
    pub status: StatusCode,
    pub detail: String,
}

impl ApiError {
    pub fn new(status: StatusCode, detail: impl Into<String>) -> Self {
        Self {
            status,
            detail: detail.into(),
        }
    }

    pub fn not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND, "Not Found")
    }

    pub fn method_not_allowed() -> Self {
        Self::new(StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed")
    }
}

/// Map a domain error to its HTTP status.
#[must_use]
pub const fn status_for(e: &DomainError) -> StatusCode {
    match e {
        DomainError::InvalidValue { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        DomainError::InvalidUnit { .. }
        | DomainError::BelowAbsoluteZero { .. }
        | DomainError::NoOpConversion { .. } => StatusCode::BAD_REQUEST,
    }
}

impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        let status = status_for(&e);
        tracing::debug!(kind = e.kind(), status = status.as_u16(), error = %e, "Request rejected");
        Self::new(status, e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status;
        let mut resp = Json(ErrorDetail {
            detail: self.detail,
        })
        .into_response();
        *resp.status_mut() = status;
        resp
    }
}
