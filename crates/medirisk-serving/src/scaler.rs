//! Per-feature standardization fitted offline and applied before inference.

use medirisk_common::{MediriskError, Result};
use serde::{Deserialize, Serialize};

/// Capability of turning a validated feature vector into model input.
///
/// Keeps the pipeline independent of any concrete scaler family: anything
/// that can transform a vector of the right length can slot in.
pub trait Transform: Send + Sync {
    /// Number of features the transform was fitted on.
    fn n_features(&self) -> usize;

    /// Apply the transform. Pure: never mutates fitted state.
    fn transform(&self, features: &[f64]) -> Vec<f64>;
}

/// Mean/variance standardization with per-feature statistics captured at
/// training time: `(x_i - mean_i) / scale_i`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardScaler {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

impl StandardScaler {
    pub fn new(mean: Vec<f64>, scale: Vec<f64>) -> Result<Self> {
        let scaler = StandardScaler { mean, scale };
        scaler.check()?;
        Ok(scaler)
    }

    /// Sanity-check deserialized statistics. Zero or non-finite scale values
    /// would poison every downstream prediction for the domain.
    pub fn check(&self) -> Result<()> {
        if self.mean.is_empty() {
            return Err(MediriskError::ArtifactLoad(
                "scaler has no fitted features".to_string(),
            ));
        }
        if self.mean.len() != self.scale.len() {
            return Err(MediriskError::ArtifactLoad(format!(
                "scaler mean/scale length mismatch: {} vs {}",
                self.mean.len(),
                self.scale.len()
            )));
        }
        for (i, (&m, &s)) in self.mean.iter().zip(self.scale.iter()).enumerate() {
            if !m.is_finite() || !s.is_finite() || s == 0.0 {
                return Err(MediriskError::ArtifactLoad(format!(
                    "scaler statistics invalid at feature {i}: mean={m}, scale={s}"
                )));
            }
        }
        Ok(())
    }
}

impl Transform for StandardScaler {
    fn n_features(&self) -> usize {
        self.mean.len()
    }

    fn transform(&self, features: &[f64]) -> Vec<f64> {
        features
            .iter()
            .zip(self.mean.iter().zip(self.scale.iter()))
            .map(|(&x, (&m, &s))| (x - m) / s)
            .collect()
    }
}
