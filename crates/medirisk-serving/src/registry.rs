//! Domain registry: maps each domain to its fitted scaler/classifier pair.
//!
//! Built once during startup, read-only afterwards. The builder refuses to
//! produce a registry with a failed or missing pair, so the service never
//! starts accepting traffic for a domain it cannot actually serve.

use std::collections::HashMap;
use std::path::Path;

use medirisk_common::{Domain, MediriskError, Result};
use tracing::info;

use crate::artifact;
use crate::forest::Classify;
use crate::scaler::Transform;

/// One domain's fitted scaler and classifier, loaded together.
///
/// Construction enforces that both artifacts agree on the feature schema;
/// a mismatched pair would produce silently wrong predictions, not errors.
pub struct DomainPair {
    scaler: Box<dyn Transform>,
    classifier: Box<dyn Classify>,
}

impl std::fmt::Debug for DomainPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DomainPair")
            .field("n_features", &self.scaler.n_features())
            .finish()
    }
}

impl DomainPair {
    pub fn new(
        scaler: impl Transform + 'static,
        classifier: impl Classify + 'static,
    ) -> Result<Self> {
        if scaler.n_features() != classifier.n_features() {
            return Err(MediriskError::SchemaMismatch {
                scaler: scaler.n_features(),
                classifier: classifier.n_features(),
            });
        }
        Ok(DomainPair {
            scaler: Box::new(scaler),
            classifier: Box::new(classifier),
        })
    }

    /// Feature count the pair was fitted on, taken from the artifacts.
    pub fn expected_len(&self) -> usize {
        self.scaler.n_features()
    }

    pub fn scaler(&self) -> &dyn Transform {
        self.scaler.as_ref()
    }

    pub fn classifier(&self) -> &dyn Classify {
        self.classifier.as_ref()
    }
}

/// Read-only map from domain to its loaded pair.
#[derive(Debug)]
pub struct DomainRegistry {
    pairs: HashMap<Domain, DomainPair>,
}

impl DomainRegistry {
    pub fn builder() -> DomainRegistryBuilder {
        DomainRegistryBuilder::new()
    }

    pub fn resolve(&self, domain: Domain) -> Result<&DomainPair> {
        self.pairs
            .get(&domain)
            .ok_or_else(|| MediriskError::UnknownDomain(domain.to_string()))
    }

    pub fn domains(&self) -> impl Iterator<Item = Domain> + '_ {
        self.pairs.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Accumulates loaded pairs during the startup phase.
pub struct DomainRegistryBuilder {
    pairs: HashMap<Domain, DomainPair>,
}

impl DomainRegistryBuilder {
    pub fn new() -> Self {
        DomainRegistryBuilder { pairs: HashMap::new() }
    }

    /// Deserialize both artifacts for `domain` and register the pair.
    /// Fails fast on a missing, corrupt, or mutually inconsistent pair.
    pub fn load_domain(
        mut self,
        domain: Domain,
        scaler_path: &Path,
        model_path: &Path,
    ) -> Result<Self> {
        let scaler = artifact::load_scaler(scaler_path)?;
        let forest = artifact::load_forest(model_path)?;
        let pair = DomainPair::new(scaler, forest)?;
        info!(
            "Loaded {} pair: {} features, {} from {}",
            domain,
            pair.expected_len(),
            model_path.display(),
            scaler_path.display()
        );
        self.pairs.insert(domain, pair);
        Ok(self)
    }

    /// Register an already-constructed pair. Used by tests to install
    /// synthetic scaler/classifier doubles.
    pub fn register(mut self, domain: Domain, pair: DomainPair) -> Self {
        self.pairs.insert(domain, pair);
        self
    }

    pub fn build(self) -> Result<DomainRegistry> {
        if self.pairs.is_empty() {
            return Err(MediriskError::ArtifactLoad(
                "no domain pairs were loaded".to_string(),
            ));
        }
        Ok(DomainRegistry { pairs: self.pairs })
    }

    /// Build, refusing to become ready unless every domain in `required`
    /// has a loaded pair. The service must not accept traffic for a
    /// configured domain it cannot actually serve.
    pub fn build_for(self, required: &[Domain]) -> Result<DomainRegistry> {
        let missing: Vec<&str> = required
            .iter()
            .filter(|domain| !self.pairs.contains_key(domain))
            .map(|domain| domain.as_str())
            .collect();
        if !missing.is_empty() {
            return Err(MediriskError::ArtifactLoad(format!(
                "registry is missing pairs for: {}",
                missing.join(", ")
            )));
        }
        self.build()
    }
}

impl Default for DomainRegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forest::{DecisionForest, DecisionTree, TreeNode};
    use crate::scaler::StandardScaler;

    fn forest(n_features: usize) -> DecisionForest {
        DecisionForest::new(
            n_features,
            vec![DecisionTree {
                nodes: vec![
                    TreeNode::Split { feature: 0, threshold: 0.0, left: 1, right: 2 },
                    TreeNode::Leaf { label: 0 },
                    TreeNode::Leaf { label: 1 },
                ],
            }],
        )
        .unwrap()
    }

    fn scaler(n_features: usize) -> StandardScaler {
        StandardScaler::new(vec![0.0; n_features], vec![1.0; n_features]).unwrap()
    }

    #[test]
    fn test_pair_rejects_schema_mismatch() {
        let err = DomainPair::new(scaler(8), forest(13)).unwrap_err();
        assert!(matches!(
            err,
            MediriskError::SchemaMismatch { scaler: 8, classifier: 13 }
        ));
    }

    #[test]
    fn test_expected_len_comes_from_artifacts() {
        let pair = DomainPair::new(scaler(8), forest(8)).unwrap();
        assert_eq!(pair.expected_len(), 8);
    }

    #[test]
    fn test_resolve_unregistered_domain_fails() {
        let registry = DomainRegistry::builder()
            .register(Domain::Cardiac, DomainPair::new(scaler(4), forest(4)).unwrap())
            .build()
            .unwrap();
        assert!(registry.resolve(Domain::Cardiac).is_ok());
        let err = registry.resolve(Domain::Diabetic).unwrap_err();
        assert!(matches!(err, MediriskError::UnknownDomain(d) if d == "diabetic"));
    }

    #[test]
    fn test_empty_registry_refused() {
        let err = DomainRegistry::builder().build().unwrap_err();
        assert!(matches!(err, MediriskError::ArtifactLoad(_)));
    }

    #[test]
    fn test_partial_registry_refused_for_full_domain_set() {
        let builder = DomainRegistry::builder()
            .register(Domain::Cardiac, DomainPair::new(scaler(4), forest(4)).unwrap());
        let err = builder.build_for(&Domain::ALL).unwrap_err();
        match err {
            MediriskError::ArtifactLoad(msg) => {
                assert!(msg.contains("diabetic"), "missing domains not named: {msg}");
                assert!(msg.contains("neurological"), "missing domains not named: {msg}");
            }
            other => panic!("expected ArtifactLoad, got {other:?}"),
        }
    }

    #[test]
    fn test_complete_registry_builds_for_required_set() {
        let registry = DomainRegistry::builder()
            .register(Domain::Cardiac, DomainPair::new(scaler(4), forest(4)).unwrap())
            .register(Domain::Diabetic, DomainPair::new(scaler(8), forest(8)).unwrap())
            .build_for(&[Domain::Cardiac, Domain::Diabetic])
            .unwrap();
        assert_eq!(registry.len(), 2);
    }
}
