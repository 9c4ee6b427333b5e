#[cfg(test)]
mod tests {
    use super::super::*;

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.artifacts.dir, "ml");
    }

    #[test]
    fn test_default_artifact_paths_follow_domain_naming() {
        let artifacts = ArtifactsConfig::default();
        let (scaler, model) = artifacts.paths_for(Domain::Diabetic);
        assert_eq!(scaler, PathBuf::from("ml/diabetic_scaler.json"));
        assert_eq!(model, PathBuf::from("ml/diabetic_model.json"));
    }

    #[test]
    fn test_per_domain_override_wins() {
        let config: Config = toml::from_str(
            r#"
            [artifacts]
            dir = "artifacts"

            [artifacts.cardiac]
            scaler = "custom/heart_scaler.json"
            model = "custom/heart_model.json"
            "#,
        )
        .unwrap();
        let (scaler, model) = config.artifacts.paths_for(Domain::Cardiac);
        assert_eq!(scaler, PathBuf::from("custom/heart_scaler.json"));
        assert_eq!(model, PathBuf::from("custom/heart_model.json"));

        // Unspecified domains still fall back to the directory convention.
        let (scaler, model) = config.artifacts.paths_for(Domain::Neurological);
        assert_eq!(scaler, PathBuf::from("artifacts/neurological_scaler.json"));
        assert_eq!(model, PathBuf::from("artifacts/neurological_model.json"));
    }
}
