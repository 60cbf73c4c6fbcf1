//! On-disk model artifact.
//!
//! A JSON document tagged by `kind`: either a bare `logistic_regression` or a
//! `pipeline` of named steps. The artifact is validated once at load time so
//! a malformed file fails startup instead of the first prediction.

use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use creditform_core::model::classifier::Classifier;
use creditform_types::error::ModelLoadError;

use super::logistic::LogisticRegression;
use super::pipeline::Pipeline;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModelArtifact {
    LogisticRegression(LogisticRegression),
    Pipeline(Pipeline),
}

impl ModelArtifact {
    pub fn validate(&self) -> Result<(), ModelLoadError> {
        match self {
            ModelArtifact::LogisticRegression(model) => model.validate("logistic_regression"),
            ModelArtifact::Pipeline(pipeline) => pipeline.validate(),
        }
    }

    pub fn into_classifier(self) -> Arc<dyn Classifier> {
        match self {
            ModelArtifact::LogisticRegression(model) => Arc::new(model),
            ModelArtifact::Pipeline(pipeline) => Arc::new(pipeline),
        }
    }
}

/// Parse and validate an artifact already in memory.
pub fn parse_model(path: &Path, content: &str) -> Result<ModelArtifact, ModelLoadError> {
    let artifact: ModelArtifact =
        serde_json::from_str(content).map_err(|source| ModelLoadError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    artifact.validate()?;
    Ok(artifact)
}

/// Read, parse, and validate the model artifact at `path`.
pub async fn load_model(path: &Path) -> Result<Arc<dyn Classifier>, ModelLoadError> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| ModelLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    let artifact = parse_model(path, &content)?;
    let model = artifact.into_classifier();
    tracing::info!(
        path = %path.display(),
        kind = model.kind(),
        "Loaded model artifact"
    );
    Ok(model)
}

#[cfg(test)]
mod tests {
    use super::*;
    use creditform_core::model::classifier::DeclaresColumns;
    use creditform_types::feature::{FeatureRow, FeatureValue};
    use tempfile::TempDir;

    const LOGISTIC: &str = r#"{
        "kind": "logistic_regression",
        "coef": [0.02, -0.0001],
        "intercept": -0.5,
        "classes": [0, 1],
        "feature_names_in": ["Age", "Credit amount"]
    }"#;

    #[tokio::test]
    async fn test_load_logistic_artifact() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("model.json");
        tokio::fs::write(&path, LOGISTIC).await.unwrap();

        let model = load_model(&path).await.unwrap();
        assert_eq!(model.kind(), "logistic_regression");
        assert_eq!(
            model.feature_names_in(),
            Some(&["Age".to_string(), "Credit amount".to_string()][..])
        );

        let mut row = FeatureRow::new();
        row.insert("Age", FeatureValue::Int(30));
        row.insert("Credit amount", FeatureValue::Int(2000));
        // -0.5 + 0.6 - 0.2 = -0.1
        assert_eq!(model.predict(&row).unwrap(), "0");
    }

    #[tokio::test]
    async fn test_load_pipeline_artifact() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("model.json");
        tokio::fs::write(
            &path,
            r#"{
                "kind": "pipeline",
                "steps": [
                    {"name": "prep", "stage": {"type": "ordinal_encoder",
                        "columns": [{"column": "Sex", "categories": ["female", "male"]}]}},
                    {"name": "clf", "stage": {"type": "logistic_regression",
                        "coef": [1.0], "intercept": -0.5, "classes": ["good", "bad"]}}
                ]
            }"#,
        )
        .await
        .unwrap();

        let model = load_model(&path).await.unwrap();
        assert_eq!(model.kind(), "pipeline");
        assert_eq!(model.stages().map(|s| s.len()), Some(2));

        let mut row = FeatureRow::new();
        row.insert("Sex", FeatureValue::Text("male".to_string()));
        assert_eq!(model.predict(&row).unwrap(), "bad");
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let tmp = TempDir::new().unwrap();
        let err = load_model(&tmp.path().join("absent.json")).await.err().unwrap();
        assert!(matches!(err, ModelLoadError::Io { .. }));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = parse_model(Path::new("m.json"), "{ not json").unwrap_err();
        assert!(matches!(err, ModelLoadError::Parse { .. }));

        let err = parse_model(Path::new("m.json"), r#"{"kind": "forest"}"#).unwrap_err();
        assert!(matches!(err, ModelLoadError::Parse { .. }));
    }

    #[test]
    fn test_invalid_artifact_rejected_at_load() {
        let err = parse_model(
            Path::new("m.json"),
            r#"{"kind": "logistic_regression", "coef": [1.0], "intercept": 0.0, "classes": [0, 1, 2]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, ModelLoadError::Invalid(_)));
    }
}
