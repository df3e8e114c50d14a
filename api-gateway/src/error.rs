//! HTTP mapping for domain errors

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;
use tracing::error;

use enerbill_common::{BillingError, ErrorKind};

/// Carries a [`BillingError`] across the handler boundary so `?` in
/// handlers produces the wire shape clients already parse:
/// `{"detail": "<Spanish message>"}` with the status fixed by the
/// error's classification.
pub struct ApiError(pub BillingError);

impl From<BillingError> for ApiError {
    fn from(err: BillingError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0.kind() {
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Conflict | ErrorKind::PreconditionFailed => StatusCode::BAD_REQUEST,
            ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            error!(error = %self.0, "fallo interno");
        }

        (status, Json(json!({ "detail": self.0.to_string() }))).into_response()
    }
}
