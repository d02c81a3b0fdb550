use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use relay_core::error::CoreError;
use relay_core::models::envelope::ResponseEnvelope;
use relay_inference::error::InferenceError;

/// Every way a relay invocation can fail.
///
/// All variants are reported to the caller the same way: a 500 with
/// `success: false` and the error's display text.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error(transparent)]
    Request(#[from] CoreError),

    #[error(transparent)]
    Inference(#[from] InferenceError),

    #[error("{0}")]
    Unhandled(String),
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        tracing::error!(error = %message, "relay failed");

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ResponseEnvelope::failure(message)),
        )
            .into_response()
    }
}
