//! Maps [`review_core::error::ReviewError`] (and the handful of transport
//! errors the HTTP layer can itself produce) onto the wire
//! [`review_core::report::ErrorResponse`] body.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use review_core::error::ReviewError;
use review_core::report::{ErrorBody, ErrorResponse};

pub type ServerResult<T> = Result<T, ServerError>;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("schema violation: {0}")]
    Schema(String),

    #[error("unknown playbook key: {0}")]
    UnknownPlaybook(String),

    #[error("request body is not valid JSON: {0}")]
    BadRequest(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl From<ReviewError> for ServerError {
    fn from(err: ReviewError) -> Self {
        match err {
            ReviewError::Schema(msg) => ServerError::Schema(msg),
            ReviewError::UnknownPlaybook(key) => ServerError::UnknownPlaybook(key),
            ReviewError::Internal(msg) => ServerError::Internal(msg),
        }
    }
}

impl From<JsonRejection> for ServerError {
    fn from(rejection: JsonRejection) -> Self {
        ServerError::BadRequest(rejection.body_text())
    }
}

impl ServerError {
    fn status_code(&self) -> StatusCode {
        match self {
            // spec.md §6/§7: schema violations (malformed JSON, unknown
            // playbook key, non-slug clauseId, etc.) are `400`; `422` is
            // reserved for semantic violations the core itself could not
            // recover from internally.
            ServerError::Schema(_) | ServerError::UnknownPlaybook(_) | ServerError::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            ServerError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            ServerError::Schema(_) => "schema",
            ServerError::UnknownPlaybook(_) => "unknown_playbook",
            ServerError::BadRequest(_) => "bad_request",
            ServerError::Internal(_) => "internal",
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        tracing::warn!(kind = self.kind(), error = %self, "request rejected");
        let body = ErrorResponse {
            error: ErrorBody {
                kind: self.kind().to_string(),
                message: self.to_string(),
            },
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_error_maps_to_400() {
        let err = ServerError::from(ReviewError::Schema("bad clauseId".to_string()));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.kind(), "schema");
    }

    #[test]
    fn internal_error_maps_to_500() {
        let err = ServerError::Internal("boom".to_string());
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
