use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Everything a weather lookup can fail with, as seen by the caller.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("Missing city or country")]
    Validation,
    #[error("Location not found")]
    NotFound,
    #[error("Server error")]
    Internal(#[from] anyhow::Error),
}

impl LookupError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// JSON body sent back for this error
    pub fn body(&self) -> serde_json::Value {
        match self {
            Self::Internal(source) => json!({
                "error": self.to_string(),
                "detail": format!("{source:#}"),
            }),
            _ => json!({ "error": self.to_string() }),
        }
    }
}

impl IntoResponse for LookupError {
    fn into_response(self) -> Response {
        match &self {
            Self::Internal(source) => tracing::error!("Weather lookup failed: {:#}", source),
            other => tracing::debug!("Weather lookup rejected: {}", other),
        }

        (self.status(), Json(self.body())).into_response()
    }
}
