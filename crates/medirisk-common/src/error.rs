use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MediriskError {
    #[error("Artifact load failed: {0}")]
    ArtifactLoad(String),

    #[error("Unknown domain: {0}")]
    UnknownDomain(String),

    #[error("Expected {expected} features, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    #[error("Feature {index} is not a finite number: {value}")]
    InvalidValue { index: usize, value: f64 },

    #[error("Scaler expects {scaler} features but classifier expects {classifier}")]
    SchemaMismatch { scaler: usize, classifier: usize },

    #[error("Classifier returned label {0}, expected 0 or 1")]
    UnexpectedLabel(i64),
}

pub type Result<T> = std::result::Result<T, MediriskError>;

/// Wrapper that maps core errors onto HTTP responses in Axum handlers.
#[derive(Debug)]
pub struct ApiError(pub MediriskError);

impl From<MediriskError> for ApiError {
    fn from(e: MediriskError) -> Self {
        ApiError(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            MediriskError::UnknownDomain(_) => StatusCode::NOT_FOUND,
            MediriskError::ShapeMismatch { .. } | MediriskError::InvalidValue { .. } => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            // Registry corruption and startup failures are server-side defects.
            MediriskError::ArtifactLoad(_)
            | MediriskError::SchemaMismatch { .. }
            | MediriskError::UnexpectedLabel(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::error!("Internal serving error: {}", self.0);
        }

        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}
