//! Ordered pipeline of named steps ending in an estimator.

use serde::{Deserialize, Serialize};

use creditform_core::model::classifier::{Classifier, DeclaresColumns, NamedStage};
use creditform_types::error::{InferenceError, ModelLoadError};
use creditform_types::feature::FeatureRow;

use super::encoder::OrdinalEncoder;
use super::logistic::LogisticRegression;
use super::scaler::StandardScaler;

/// One pipeline component.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Stage {
    OrdinalEncoder(OrdinalEncoder),
    StandardScaler(StandardScaler),
    LogisticRegression(LogisticRegression),
}

impl Stage {
    fn validate(&self, name: &str) -> Result<(), ModelLoadError> {
        match self {
            Stage::OrdinalEncoder(s) => s.validate(name),
            Stage::StandardScaler(s) => s.validate(name),
            Stage::LogisticRegression(s) => s.validate(name),
        }
    }

    fn as_declares(&self) -> &dyn DeclaresColumns {
        match self {
            Stage::OrdinalEncoder(s) => s,
            Stage::StandardScaler(s) => s,
            Stage::LogisticRegression(s) => s,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Step {
    pub name: String,
    pub stage: Stage,
}

/// Preprocessing steps followed by exactly one final estimator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pipeline {
    pub steps: Vec<Step>,
    /// Columns recorded on the pipeline object itself, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feature_names_in: Option<Vec<String>>,
}

impl Pipeline {
    pub fn validate(&self) -> Result<(), ModelLoadError> {
        let Some((last, transformers)) = self.steps.split_last() else {
            return Err(ModelLoadError::Invalid("pipeline has no steps".to_string()));
        };
        if !matches!(last.stage, Stage::LogisticRegression(_)) {
            return Err(ModelLoadError::Invalid(format!(
                "pipeline must end with an estimator, last step '{}' is a transformer",
                last.name
            )));
        }
        if let Some(step) = transformers
            .iter()
            .find(|s| matches!(s.stage, Stage::LogisticRegression(_)))
        {
            return Err(ModelLoadError::Invalid(format!(
                "estimator step '{}' must be the last step",
                step.name
            )));
        }
        for (i, step) in self.steps.iter().enumerate() {
            if self.steps[..i].iter().any(|s| s.name == step.name) {
                return Err(ModelLoadError::Invalid(format!(
                    "duplicate step name '{}'",
                    step.name
                )));
            }
            step.stage.validate(&step.name)?;
        }
        Ok(())
    }

    /// Run the row through every transformer, returning the final estimator
    /// (with its step name) and the row it should score.
    fn transform(&self, row: &FeatureRow) -> Result<(&str, &LogisticRegression, FeatureRow), InferenceError> {
        let mut current = row.clone();
        for step in &self.steps {
            match &step.stage {
                Stage::OrdinalEncoder(enc) => current = enc.transform(&step.name, &current)?,
                Stage::StandardScaler(scaler) => current = scaler.transform(&step.name, &current)?,
                Stage::LogisticRegression(clf) => return Ok((step.name.as_str(), clf, current)),
            }
        }
        Err(InferenceError::Unsupported(
            "predict on a pipeline without a final estimator".to_string(),
        ))
    }
}

impl DeclaresColumns for Pipeline {
    fn feature_names_in(&self) -> Option<&[String]> {
        self.feature_names_in.as_deref()
    }
}

impl Classifier for Pipeline {
    fn kind(&self) -> &str {
        "pipeline"
    }

    fn predict(&self, row: &FeatureRow) -> Result<String, InferenceError> {
        let (name, clf, transformed) = self.transform(row)?;
        let decision = clf.decision(name, &transformed)?;
        Ok(clf.label_for(decision))
    }

    fn supports_proba(&self) -> bool {
        true
    }

    fn predict_proba(&self, row: &FeatureRow) -> Result<Vec<f64>, InferenceError> {
        let (name, clf, transformed) = self.transform(row)?;
        let decision = clf.decision(name, &transformed)?;
        Ok(LogisticRegression::proba_for(decision))
    }

    fn stages(&self) -> Option<Vec<NamedStage<'_>>> {
        Some(
            self.steps
                .iter()
                .map(|step| NamedStage {
                    name: &step.name,
                    stage: step.stage.as_declares(),
                })
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use creditform_core::model::schema::probe_schema;
    use creditform_types::feature::FeatureValue;
    use creditform_types::schema::{ColumnSource, SchemaReport};

    fn pipeline() -> Pipeline {
        serde_json::from_value(serde_json::json!({
            "steps": [
                {
                    "name": "scaler",
                    "stage": {
                        "type": "standard_scaler",
                        "mean": [30.0, 2000.0],
                        "scale": [10.0, 1000.0],
                        "feature_names_in": ["Age", "Credit amount"]
                    }
                },
                {
                    "name": "clf",
                    "stage": {
                        "type": "logistic_regression",
                        "coef": [1.0, -1.0],
                        "intercept": 0.0,
                        "classes": ["bad", "good"]
                    }
                }
            ]
        }))
        .unwrap()
    }

    fn row(age: i64, amount: i64) -> FeatureRow {
        let mut row = FeatureRow::new();
        row.insert("Age", FeatureValue::Int(age));
        row.insert("Credit amount", FeatureValue::Int(amount));
        row
    }

    #[test]
    fn test_scaled_row_reaches_estimator() {
        let p = pipeline();
        p.validate().unwrap();
        // scaled: (50-30)/10 = 2, (1000-2000)/1000 = -1 -> decision 3
        assert_eq!(p.predict(&row(50, 1000)).unwrap(), "good");
        let proba = p.predict_proba(&row(50, 1000)).unwrap();
        assert!((proba[1] - 1.0 / (1.0 + (-3.0f64).exp())).abs() < 1e-12);
        assert_eq!(p.predict(&row(20, 4000)).unwrap(), "bad");
    }

    #[test]
    fn test_schema_probe_finds_first_declaring_stage() {
        let p = pipeline();
        assert_eq!(
            probe_schema(&p),
            SchemaReport::Declared {
                source: ColumnSource::Stage("scaler".to_string()),
                columns: vec!["Age".to_string(), "Credit amount".to_string()],
            }
        );
    }

    #[test]
    fn test_mismatch_reports_stage_name() {
        let mut r = row(50, 1000);
        r.insert("Duration", FeatureValue::Int(12));
        let err = pipeline().predict(&r).unwrap_err();
        assert!(err.to_string().contains("'scaler'"));
        assert!(err.to_string().contains("Duration"));
    }

    #[test]
    fn test_validate_requires_final_estimator() {
        let mut p = pipeline();
        p.steps.pop();
        assert!(p.validate().is_err());

        let mut p = pipeline();
        p.steps.swap(0, 1);
        assert!(p.validate().is_err());

        let empty = Pipeline {
            steps: vec![],
            feature_names_in: None,
        };
        assert!(empty.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_duplicate_step_names() {
        let mut p = pipeline();
        p.steps[0].name = "clf".to_string();
        assert!(p.validate().is_err());
    }
}
