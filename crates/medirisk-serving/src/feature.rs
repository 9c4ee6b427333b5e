//! Feature vector validation.
//!
//! Callers supply features in the exact order the training pipeline used;
//! nothing here reorders, pads, or truncates. Silent shape coercion would
//! turn a caller bug into a silently wrong risk prediction, so wrong-length
//! or non-finite input is rejected outright.

use medirisk_common::{MediriskError, Result};

/// A validated, ordered numeric input for one prediction request.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector(Vec<f64>);

impl FeatureVector {
    /// Validate caller-supplied raw values against the domain's expected
    /// feature count. The values pass through unchanged on success.
    pub fn validate(raw: &[f64], expected_len: usize) -> Result<Self> {
        if raw.len() != expected_len {
            return Err(MediriskError::ShapeMismatch {
                expected: expected_len,
                actual: raw.len(),
            });
        }
        for (index, &value) in raw.iter().enumerate() {
            if !value.is_finite() {
                return Err(MediriskError::InvalidValue { index, value });
            }
        }
        Ok(FeatureVector(raw.to_vec()))
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
