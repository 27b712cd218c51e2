//! Handler error type and its JSON rendering.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::{error, warn};

use chirpy_types::api::ErrorResponse;

/// Shown for every 500. The real cause is only logged.
const GENERIC_MESSAGE: &str = "Something went wrong";

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request body could not be decoded into the endpoint's schema.
    /// Content-Type is not consulted; only the bytes matter.
    #[error("failed to decode request body: {0}")]
    Decode(#[from] serde_json::Error),

    /// A path identifier did not parse.
    #[error("malformed id '{0}'")]
    MalformedId(String),

    #[error("bad request: {0}")]
    BadRequest(&'static str),

    /// Unknown email and wrong password both end up here.
    #[error("incorrect email or password")]
    Unauthorized,

    #[error("forbidden")]
    Forbidden,

    #[error("not found: {0}")]
    NotFound(&'static str),

    /// Store, hashing or runtime failure.
    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::Decode(err) => {
                warn!(error = %err, "request body rejected");
                (StatusCode::INTERNAL_SERVER_ERROR, GENERIC_MESSAGE)
            }
            Self::MalformedId(raw) => {
                warn!(id = %raw, "malformed id in path");
                (StatusCode::INTERNAL_SERVER_ERROR, GENERIC_MESSAGE)
            }
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, *msg),
            Self::Unauthorized => (StatusCode::UNAUTHORIZED, "Incorrect email or password"),
            Self::Forbidden => (StatusCode::FORBIDDEN, "Forbidden"),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, *msg),
            Self::Internal(err) => {
                error!(error = %err, "internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, GENERIC_MESSAGE)
            }
        };

        let body = ErrorResponse {
            error: message.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
