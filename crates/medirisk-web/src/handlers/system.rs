//! Liveness banner and domain discovery.

use axum::extract::State;
use axum::Json;
use medirisk_common::Domain;
use serde::Serialize;
use serde_json::{json, Value};

use crate::state::SharedState;

#[derive(Debug, Serialize)]
pub struct DomainInfo {
    pub domain: Domain,
    pub condition: &'static str,
    pub expected_features: usize,
}

/// GET / — confirms the service is up and serving.
pub async fn home() -> Json<Value> {
    Json(json!({ "message": "Medirisk prediction service running" }))
}

/// GET /api/domains — registered domains and their trained feature counts,
/// so callers can discover each schema size without guessing.
pub async fn domains(State(state): State<SharedState>) -> Json<Vec<DomainInfo>> {
    let registry = state.service.registry();
    let mut infos: Vec<DomainInfo> = registry
        .domains()
        .filter_map(|domain| {
            registry.resolve(domain).ok().map(|pair| DomainInfo {
                domain,
                condition: domain.condition(),
                expected_features: pair.expected_len(),
            })
        })
        .collect();
    infos.sort_by_key(|info| info.domain.as_str());
    Json(infos)
}
