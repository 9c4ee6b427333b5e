//! medirisk-common — Shared types and errors used across all Medirisk crates.

pub mod domain;
pub mod error;

// Re-export commonly used types
pub use domain::Domain;
pub use error::{ApiError, MediriskError, Result};
