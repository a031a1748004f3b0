//! Error responses.
//!
//! # Responsibilities
//! - Map handler failures to HTTP status codes
//! - Render every failure as `{"error": "<message>"}`
//!
//! # Design Decisions
//! - Missing input is the caller's fault: 400
//! - Fetch and parse failures are indistinguishable to the client: 500

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::extract::ParseError;
use crate::observability::metrics;
use crate::upstream::FetchError;

/// Everything a handler can fail with.
#[derive(Debug, Error)]
pub enum AuditError {
    /// A required parameter was absent or empty.
    #[error("{0} is required")]
    InputMissing(&'static str),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl AuditError {
    pub fn status(&self) -> StatusCode {
        match self {
            AuditError::InputMissing(_) => StatusCode::BAD_REQUEST,
            AuditError::Fetch(_) | AuditError::Parse(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AuditError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            AuditError::InputMissing(_) => {
                tracing::debug!(error = %self, "Rejected request");
            }
            AuditError::Fetch(e) => {
                metrics::record_upstream_error(e.kind());
                tracing::warn!(error = %self, kind = e.kind(), "Upstream fetch failed");
            }
            AuditError::Parse(_) => {
                tracing::warn!(error = %self, "Document parse failed");
            }
        }

        (status, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}
