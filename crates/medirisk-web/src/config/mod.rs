//! Configuration loading for Medirisk.
//! Reads medirisk.toml from the current directory or path in MEDIRISK_CONFIG env var.

use std::path::{Path, PathBuf};

use medirisk_common::Domain;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub artifacts: ArtifactsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16 { 3000 }

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig { host: default_host(), port: default_port() }
    }
}

/// Where the trained scaler/model pairs live. By default each domain's pair
/// is `{dir}/{domain}_scaler.json` and `{dir}/{domain}_model.json`; a
/// per-domain block overrides both paths explicitly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactsConfig {
    #[serde(default = "default_artifacts_dir")]
    pub dir: String,
    pub cardiac: Option<DomainArtifacts>,
    pub diabetic: Option<DomainArtifacts>,
    pub neurological: Option<DomainArtifacts>,
}

fn default_artifacts_dir() -> String { "ml".to_string() }

impl Default for ArtifactsConfig {
    fn default() -> Self {
        ArtifactsConfig {
            dir: default_artifacts_dir(),
            cardiac: None,
            diabetic: None,
            neurological: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainArtifacts {
    pub scaler: String,
    pub model: String,
}

impl ArtifactsConfig {
    /// Resolve (scaler path, model path) for one domain.
    pub fn paths_for(&self, domain: Domain) -> (PathBuf, PathBuf) {
        let spec = match domain {
            Domain::Cardiac      => &self.cardiac,
            Domain::Diabetic     => &self.diabetic,
            Domain::Neurological => &self.neurological,
        };
        match spec {
            Some(d) => (PathBuf::from(&d.scaler), PathBuf::from(&d.model)),
            None => {
                let dir = Path::new(&self.dir);
                (
                    dir.join(format!("{domain}_scaler.json")),
                    dir.join(format!("{domain}_model.json")),
                )
            }
        }
    }
}

mod tests;

impl Config {
    /// Load configuration from medirisk.toml.
    /// Checks MEDIRISK_CONFIG env var first, then current directory.
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("MEDIRISK_CONFIG")
            .unwrap_or_else(|_| "medirisk.toml".to_string());

        if !Path::new(&path).exists() {
            anyhow::bail!(
                "Config file not found: {}\n\
                 Copy medirisk.example.toml to medirisk.toml and edit it.",
                path
            );
        }

        let content = std::fs::read_to_string(&path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
