//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use wakehub_domain::error::WakehubError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`WakehubError`] to an HTTP response with appropriate status code.
pub struct ApiError(WakehubError);

impl From<WakehubError> for ApiError {
    fn from(err: WakehubError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            WakehubError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            WakehubError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
