//! Prediction orchestration: resolve, validate, scale, classify, encode.

use std::sync::Arc;

use medirisk_common::{Domain, MediriskError, Result};
use serde::{Deserialize, Serialize};

use crate::feature::FeatureVector;
use crate::registry::DomainRegistry;

/// Outcome of one prediction request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub prediction: i64,
    pub message: String,
}

/// Stateless entry point for all domains. Holds the shared read-only
/// registry; each `predict` call is a pure function of its input, so
/// concurrent calls need no coordination.
#[derive(Clone)]
pub struct PredictionService {
    registry: Arc<DomainRegistry>,
}

impl PredictionService {
    pub fn new(registry: Arc<DomainRegistry>) -> Self {
        PredictionService { registry }
    }

    pub fn registry(&self) -> &DomainRegistry {
        &self.registry
    }

    /// Run the full pipeline for one request. Any failure aborts the whole
    /// call; there are no partial results and no side effects.
    pub fn predict(&self, domain: Domain, raw_features: &[f64]) -> Result<PredictionResult> {
        let pair = self.registry.resolve(domain)?;
        let vector = FeatureVector::validate(raw_features, pair.expected_len())?;
        let scaled = pair.scaler().transform(vector.as_slice());

        // A disagreement here means the pair itself is corrupt, not that the
        // caller sent bad data.
        if scaled.len() != pair.classifier().n_features() {
            return Err(MediriskError::SchemaMismatch {
                scaler: scaled.len(),
                classifier: pair.classifier().n_features(),
            });
        }

        let label = pair.classifier().predict(&scaled);
        let message = match label {
            1 => domain.detected_message(),
            0 => "Healthy".to_string(),
            other => return Err(MediriskError::UnexpectedLabel(other)),
        };

        Ok(PredictionResult { prediction: label, message })
    }
}
