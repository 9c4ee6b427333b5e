//! Domain identifiers for the three supported prediction contexts.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MediriskError;

/// One of the independent medical risk domains served by Medirisk.
///
/// Each domain carries its own pre-fitted scaler/classifier pair; the
/// orchestration logic is identical across all three.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    Cardiac,
    Diabetic,
    Neurological,
}

impl Domain {
    pub const ALL: [Domain; 3] = [Domain::Cardiac, Domain::Diabetic, Domain::Neurological];

    /// Wire identifier, as used in request paths and config keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            Domain::Cardiac      => "cardiac",
            Domain::Diabetic     => "diabetic",
            Domain::Neurological => "neurological",
        }
    }

    /// Human-readable condition name used in result messages.
    pub fn condition(&self) -> &'static str {
        match self {
            Domain::Cardiac      => "Heart Disease",
            Domain::Diabetic     => "Diabetes",
            Domain::Neurological => "Parkinson's",
        }
    }

    /// Message returned for a positive (label 1) prediction.
    pub fn detected_message(&self) -> String {
        format!("{} Detected", self.condition())
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Domain {
    type Err = MediriskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cardiac"      => Ok(Domain::Cardiac),
            "diabetic"     => Ok(Domain::Diabetic),
            "neurological" => Ok(Domain::Neurological),
            other => Err(MediriskError::UnknownDomain(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_domains() {
        for domain in Domain::ALL {
            assert_eq!(domain.as_str().parse::<Domain>().unwrap(), domain);
        }
    }

    #[test]
    fn test_parse_unknown_domain_fails() {
        let err = "renal".parse::<Domain>().unwrap_err();
        assert!(matches!(err, MediriskError::UnknownDomain(d) if d == "renal"));
    }

    #[test]
    fn test_detected_messages_match_conditions() {
        assert_eq!(Domain::Cardiac.detected_message(), "Heart Disease Detected");
        assert_eq!(Domain::Diabetic.detected_message(), "Diabetes Detected");
        assert_eq!(Domain::Neurological.detected_message(), "Parkinson's Detected");
    }

    #[test]
    fn test_serde_uses_lowercase_identifiers() {
        let json = serde_json::to_string(&Domain::Neurological).unwrap();
        assert_eq!(json, "\"neurological\"");
        let back: Domain = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Domain::Neurological);
    }
}
