//! HTTP error mapping for the API surface.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use reglens_core::Error;

/// Wrapper that renders a [`reglens_core::Error`] as an HTTP response.
///
/// Body shape is `{ "error": { "category": ..., "message": ... } }`.
#[derive(Debug)]
pub struct ApiError(pub Error);

impl ApiError {
    /// HTTP status and error category for the wrapped error.
    ///
    /// An unreachable or failing store is a service-level outage (503),
    /// never a partial result; unknown agencies are 404; everything else
    /// collapses to a generic 500.
    pub fn status_and_category(&self) -> (StatusCode, &'static str) {
        match &self.0 {
            Error::StoreUnavailable { .. } | Error::Database(_) => {
                (StatusCode::SERVICE_UNAVAILABLE, "store_unavailable")
            }
            Error::AgencyNotFound { .. } => (StatusCode::NOT_FOUND, "not_found"),
            _ => (StatusCode::INTERNAL_SERVER_ERROR, "internal"),
        }
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, category) = self.status_and_category();
        if status.is_server_error() {
            tracing::error!(category, error = %self.0, "request failed");
        }

        let body = serde_json::json!({
            "error": {
                "category": category,
                "message": self.0.to_string(),
            }
        });
        (status, Json(body)).into_response()
    }
}
