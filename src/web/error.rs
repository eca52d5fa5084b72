use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::{error, warn};

use crate::pipeline::channel::AnalysisError;
use crate::scoring::InvalidInput;
use crate::source::SourceError;

/// Every failure a handler can return, mapped to an HTTP status.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error(transparent)]
    Input(#[from] InvalidInput),

    #[error(transparent)]
    Source(#[from] SourceError),
}

impl From<AnalysisError> for ApiError {
    fn from(err: AnalysisError) -> Self {
        match err {
            AnalysisError::Source(e) => ApiError::Source(e),
            AnalysisError::Input(e) => ApiError::Input(e),
        }
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Input(_) => StatusCode::BAD_REQUEST,
            ApiError::Source(SourceError::InvalidUrl(_)) => StatusCode::BAD_REQUEST,
            ApiError::Source(SourceError::NotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Source(SourceError::Upstream(_)) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Upstream details can include request URLs with the API key.
        let message = match &self {
            ApiError::Source(SourceError::Upstream(e)) => {
                error!(error = %format!("{e:#}"), "Upstream data API failed");
                "Channel data is temporarily unavailable".to_string()
            }
            other => {
                warn!(status = %status, error = %other, "Rejected request");
                other.to_string()
            }
        };

        let body = serde_json::json!({ "error": message });
        (status, axum::Json(body)).into_response()
    }
}
