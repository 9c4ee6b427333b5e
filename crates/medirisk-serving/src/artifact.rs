//! Artifact deserialization.
//!
//! Trained scaler/classifier pairs are published as JSON blobs by the
//! offline training pipeline. Loading is deterministic and happens exactly
//! once per domain per process lifetime; any failure here is startup-fatal.

use std::fs;
use std::path::Path;

use medirisk_common::{MediriskError, Result};

use crate::forest::DecisionForest;
use crate::scaler::StandardScaler;

/// Deserialize and sanity-check a fitted scaler from `path`.
pub fn load_scaler(path: &Path) -> Result<StandardScaler> {
    let scaler: StandardScaler = serde_json::from_str(&read(path)?)
        .map_err(|e| MediriskError::ArtifactLoad(format!("{}: {e}", path.display())))?;
    scaler.check()?;
    Ok(scaler)
}

/// Deserialize and sanity-check a fitted decision forest from `path`.
pub fn load_forest(path: &Path) -> Result<DecisionForest> {
    let forest: DecisionForest = serde_json::from_str(&read(path)?)
        .map_err(|e| MediriskError::ArtifactLoad(format!("{}: {e}", path.display())))?;
    forest.check()?;
    Ok(forest)
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .map_err(|e| MediriskError::ArtifactLoad(format!("{}: {e}", path.display())))
}
