//! Prediction API — one generic handler covers all three domains.

use axum::extract::{Path, State};
use axum::Json;
use medirisk_common::{ApiError, Domain};
use medirisk_serving::PredictionResult;
use serde::Deserialize;
use tracing::debug;

use crate::state::SharedState;

#[derive(Debug, Deserialize)]
pub struct PredictInput {
    pub features: Vec<f64>,
}

/// POST /api/{domain}/predict — validate, scale, classify one feature vector.
pub async fn predict(
    State(state): State<SharedState>,
    Path(domain): Path<String>,
    Json(input): Json<PredictInput>,
) -> Result<Json<PredictionResult>, ApiError> {
    let domain: Domain = domain.parse()?;
    debug!("Prediction request for {} with {} features", domain, input.features.len());
    let result = state.service.predict(domain, &input.features)?;
    Ok(Json(result))
}
