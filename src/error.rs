use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Failure kinds surfaced by the QA pipeline. Each kind maps to its own
/// HTTP status; the response body is always `{"error": <message>}`.
#[derive(Debug, Error)]
pub enum QaError {
    #[error("{0}")]
    Validation(String),

    #[error("Failed to load document: {0}")]
    DocumentLoad(String),

    #[error("{0}")]
    Provider(String),

    #[error("{0}")]
    Internal(String),
}

impl QaError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            QaError::Validation(_) => StatusCode::BAD_REQUEST,
            QaError::DocumentLoad(_) => StatusCode::INTERNAL_SERVER_ERROR,
            QaError::Provider(_) => StatusCode::BAD_GATEWAY,
            QaError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for QaError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_kind_has_its_own_status() {
        assert_eq!(
            QaError::Validation("empty".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            QaError::DocumentLoad("missing".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            QaError::Provider("401".into()).status_code(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            QaError::Internal("oops".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn provider_message_passes_through_verbatim() {
        let err = QaError::Provider("Incorrect API key provided".into());
        assert_eq!(err.to_string(), "Incorrect API key provided");
    }
}
