//! Binary logistic regression.

use serde::{Deserialize, Deserializer, Serialize};

use creditform_core::model::classifier::{Classifier, DeclaresColumns};
use creditform_types::error::{InferenceError, ModelLoadError};
use creditform_types::feature::FeatureRow;

use super::input;

/// Fitted binary logistic regression.
///
/// `classes[1]` is the positive class: predicted when the decision function
/// is above zero, and the class whose probability sits at index 1.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogisticRegression {
    pub coef: Vec<f64>,
    pub intercept: f64,
    #[serde(deserialize_with = "class_labels")]
    pub classes: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feature_names_in: Option<Vec<String>>,
}

impl LogisticRegression {
    pub fn n_features(&self) -> usize {
        self.coef.len()
    }

    pub fn validate(&self, stage: &str) -> Result<(), ModelLoadError> {
        if self.coef.is_empty() {
            return Err(ModelLoadError::Invalid(format!("{stage}: coef is empty")));
        }
        if self.classes.len() != 2 {
            return Err(ModelLoadError::Invalid(format!(
                "{stage}: expected 2 classes, found {}",
                self.classes.len()
            )));
        }
        if !self.intercept.is_finite() || self.coef.iter().any(|c| !c.is_finite()) {
            return Err(ModelLoadError::Invalid(format!(
                "{stage}: coefficients must be finite"
            )));
        }
        input::check_declared_width(stage, self.feature_names_in.as_deref(), self.n_features())
    }

    /// Decision function for one row, checked against the fitted columns.
    pub fn decision(&self, stage: &str, row: &FeatureRow) -> Result<f64, InferenceError> {
        input::check_columns(stage, self.feature_names_in.as_deref(), self.n_features(), row)?;
        let x = input::numeric_values(stage, row)?;
        Ok(self.intercept + self.coef.iter().zip(&x).map(|(w, v)| w * v).sum::<f64>())
    }

    pub fn label_for(&self, decision: f64) -> String {
        let index = usize::from(decision > 0.0);
        self.classes[index].clone()
    }

    pub fn proba_for(decision: f64) -> Vec<f64> {
        let positive = sigmoid(decision);
        vec![1.0 - positive, positive]
    }
}

fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

impl DeclaresColumns for LogisticRegression {
    fn feature_names_in(&self) -> Option<&[String]> {
        self.feature_names_in.as_deref()
    }
}

impl Classifier for LogisticRegression {
    fn kind(&self) -> &str {
        "logistic_regression"
    }

    fn predict(&self, row: &FeatureRow) -> Result<String, InferenceError> {
        let decision = self.decision(self.kind(), row)?;
        Ok(self.label_for(decision))
    }

    fn supports_proba(&self) -> bool {
        true
    }

    fn predict_proba(&self, row: &FeatureRow) -> Result<Vec<f64>, InferenceError> {
        let decision = self.decision(self.kind(), row)?;
        Ok(Self::proba_for(decision))
    }
}

/// Class labels may be stored as text or as integers.
fn class_labels<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Label {
        Text(String),
        Int(i64),
    }

    let labels = Vec::<Label>::deserialize(deserializer)?;
    Ok(labels
        .into_iter()
        .map(|label| match label {
            Label::Text(s) => s,
            Label::Int(i) => i.to_string(),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use creditform_types::feature::FeatureValue;

    fn model() -> LogisticRegression {
        serde_json::from_value(serde_json::json!({
            "coef": [0.5, -1.0],
            "intercept": 0.25,
            "classes": [0, 1],
            "feature_names_in": ["Age", "Job"]
        }))
        .unwrap()
    }

    fn row(age: i64, job: i64) -> FeatureRow {
        let mut row = FeatureRow::new();
        row.insert("Age", FeatureValue::Int(age));
        row.insert("Job", FeatureValue::Int(job));
        row
    }

    #[test]
    fn test_integer_class_labels_become_text() {
        assert_eq!(model().classes, vec!["0", "1"]);
    }

    #[test]
    fn test_predict_and_proba_agree() {
        let m = model();
        // 0.25 + 0.5*2 - 1.0*0 = 1.25
        let r = row(2, 0);
        assert_eq!(m.predict(&r).unwrap(), "1");
        let proba = m.predict_proba(&r).unwrap();
        assert!((proba[1] - sigmoid(1.25)).abs() < 1e-12);
        assert!((proba[0] + proba[1] - 1.0).abs() < 1e-12);

        // 0.25 + 0.5*0 - 1.0*3 = -2.75
        let r = row(0, 3);
        assert_eq!(m.predict(&r).unwrap(), "0");
        assert!(m.predict_proba(&r).unwrap()[1] < 0.5);
    }

    #[test]
    fn test_wrong_columns_rejected() {
        let mut r = FeatureRow::new();
        r.insert("Age", FeatureValue::Int(40));
        r.insert("Duration", FeatureValue::Int(12));
        assert!(matches!(
            model().predict(&r),
            Err(InferenceError::ColumnMismatch { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_bad_artifacts() {
        let mut m = model();
        m.classes.push("2".to_string());
        assert!(m.validate("clf").is_err());

        let mut m = model();
        m.feature_names_in = Some(vec!["Age".to_string()]);
        assert!(m.validate("clf").is_err());

        let mut m = model();
        m.coef.clear();
        m.feature_names_in = None;
        assert!(m.validate("clf").is_err());

        assert!(model().validate("clf").is_ok());
    }
}
