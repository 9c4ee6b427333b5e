//! medirisk-serving — The model-serving pipeline.
//!
//! Takes a raw numeric feature vector, validates its shape and values,
//! standardizes it with the domain's pre-fitted scaler, scores it with the
//! domain's classifier, and encodes the binary decision. Artifacts are
//! loaded exactly once at startup into a read-only [`registry::DomainRegistry`];
//! every [`service::PredictionService::predict`] call after that is pure
//! in-memory computation, safe for unbounded concurrency.

pub mod artifact;
pub mod feature;
pub mod forest;
pub mod registry;
pub mod scaler;
pub mod service;

pub use feature::FeatureVector;
pub use forest::{Classify, DecisionForest};
pub use registry::{DomainPair, DomainRegistry, DomainRegistryBuilder};
pub use scaler::{StandardScaler, Transform};
pub use service::{PredictionResult, PredictionService};
