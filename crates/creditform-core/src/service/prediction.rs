//! Prediction service.
//!
//! Owns the loaded model for the lifetime of the process, probes its schema
//! once, and runs the build -> predict flow for each form submission.

use std::sync::Arc;

use serde::Serialize;

use creditform_types::applicant::FormAnswers;
use creditform_types::error::{FeatureError, InferenceError};
use creditform_types::feature::{FeatureRow, RowLayout};
use creditform_types::prediction::{Prediction, SubmittedColumns};
use creditform_types::schema::SchemaReport;

use crate::feature::builder;
use crate::feature::columns;
use crate::model::classifier::Classifier;
use crate::model::inference::run_inference;
use crate::model::schema::probe_schema;

/// Result of one Predict action.
///
/// The submitted columns are always present; the prediction is either a
/// label (and probability) or the inference failure, never both.
#[derive(Debug, Clone, Serialize)]
pub struct Evaluation {
    pub submitted: SubmittedColumns,
    #[serde(skip)]
    pub row: FeatureRow,
    #[serde(flatten)]
    pub outcome: Outcome,
}

/// Prediction or the reported inference failure.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    Predicted(Prediction),
    Failed { error: String },
}

impl Outcome {
    fn from_result(result: Result<Prediction, InferenceError>) -> Self {
        match result {
            Ok(prediction) => Outcome::Predicted(prediction),
            Err(e) => Outcome::Failed {
                error: e.to_string(),
            },
        }
    }

    pub fn prediction(&self) -> Option<&Prediction> {
        match self {
            Outcome::Predicted(prediction) => Some(prediction),
            Outcome::Failed { .. } => None,
        }
    }
}

/// Service running form submissions through the loaded model.
pub struct PredictionService {
    model: Arc<dyn Classifier>,
    layout: RowLayout,
    schema: SchemaReport,
}

impl PredictionService {
    /// Wrap a loaded model. The schema probe runs here, once.
    pub fn new(model: Arc<dyn Classifier>, layout: RowLayout) -> Self {
        let schema = probe_schema(model.as_ref());
        Self {
            model,
            layout,
            schema,
        }
    }

    pub fn model(&self) -> &dyn Classifier {
        self.model.as_ref()
    }

    pub fn layout(&self) -> RowLayout {
        self.layout
    }

    /// Diagnostic readout of the schema probe.
    pub fn schema(&self) -> &SchemaReport {
        &self.schema
    }

    /// Columns the encoded layout will submit: declared, or the fallback list.
    pub fn effective_columns(&self) -> Vec<String> {
        let declared = self.schema.expected_columns();
        if declared.is_empty() {
            columns::fallback_columns()
        } else {
            declared.to_vec()
        }
    }

    /// Build the feature row for `answers` without running the model.
    pub fn prepare(&self, answers: &FormAnswers) -> Result<FeatureRow, FeatureError> {
        builder::build_row(self.layout, answers, self.schema.expected_columns())
    }

    /// Build the row and run inference on it.
    ///
    /// Feature errors abort the request. Inference errors are captured in the
    /// returned [`Evaluation`] alongside the columns that were submitted.
    pub fn evaluate(&self, answers: &FormAnswers) -> Result<Evaluation, FeatureError> {
        let row = self.prepare(answers)?;
        let submitted =
            SubmittedColumns::new(row.columns().into_iter().map(String::from).collect());

        let result = run_inference(self.model.as_ref(), &row);
        match &result {
            Ok(prediction) => tracing::info!(
                label = %prediction.label,
                probability = ?prediction.probability,
                "prediction complete"
            ),
            Err(e) => tracing::error!(error = %e, n_cols = submitted.n_cols, "inference failed"),
        }

        Ok(Evaluation {
            submitted,
            row,
            outcome: Outcome::from_result(result),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feature::columns::FALLBACK_COLUMNS;
    use crate::model::classifier::DeclaresColumns;

    /// Accepts only rows as wide as its declaration, or 3 wide when it declares nothing.
    struct Strict {
        columns: Option<Vec<String>>,
    }

    impl DeclaresColumns for Strict {
        fn feature_names_in(&self) -> Option<&[String]> {
            self.columns.as_deref()
        }
    }

    impl Classifier for Strict {
        fn kind(&self) -> &str {
            "strict"
        }

        fn predict(&self, row: &FeatureRow) -> Result<String, InferenceError> {
            let expected = self.columns.as_ref().map(|c| c.len()).unwrap_or(3);
            if row.len() != expected {
                return Err(InferenceError::WidthMismatch {
                    stage: "strict".to_string(),
                    expected,
                    actual: row.len(),
                });
            }
            Ok("1".to_string())
        }

        fn supports_proba(&self) -> bool {
            true
        }

        fn predict_proba(&self, row: &FeatureRow) -> Result<Vec<f64>, InferenceError> {
            self.predict(row)?;
            Ok(vec![0.25, 0.75])
        }
    }

    /// An empty `columns` builds a model that declares nothing.
    fn service(columns: &[&str]) -> PredictionService {
        let model = Strict {
            columns: (!columns.is_empty())
                .then(|| columns.iter().map(|s| s.to_string()).collect()),
        };
        PredictionService::new(Arc::new(model), RowLayout::Encoded)
    }

    #[test]
    fn test_declared_columns_drive_the_row() {
        let svc = service(&["Age", "Credit amount"]);
        let eval = svc.evaluate(&FormAnswers::default()).unwrap();
        assert_eq!(eval.submitted.input_columns, vec!["Age", "Credit amount"]);
        assert_eq!(eval.submitted.n_cols, 2);
        let prediction = eval.outcome.prediction().unwrap();
        assert_eq!(prediction.label, "1");
        assert_eq!(prediction.probability, Some(0.75));
    }

    #[test]
    fn test_fallback_columns_without_declaration() {
        let svc = service(&[]);
        assert_eq!(svc.schema(), &SchemaReport::NotDeclared);
        assert_eq!(svc.effective_columns(), columns::fallback_columns());
        let row = svc.prepare(&FormAnswers::default()).unwrap();
        assert_eq!(row.columns(), FALLBACK_COLUMNS.to_vec());
    }

    #[test]
    fn test_inference_failure_produces_no_prediction() {
        // Declares nothing, so 18 fallback columns reach a model wanting 3.
        let svc = service(&[]);
        let eval = svc.evaluate(&FormAnswers::default()).unwrap();
        assert_eq!(eval.submitted.n_cols, 18);
        assert!(eval.outcome.prediction().is_none());
        match &eval.outcome {
            Outcome::Failed { error } => assert!(error.contains("expects 3 features, got 18")),
            other => panic!("expected failure, got {other:?}"),
        }
    }

    #[test]
    fn test_feature_error_aborts_request() {
        let svc = service(&[]);
        let answers = FormAnswers {
            saving: "loads".to_string(),
            ..FormAnswers::default()
        };
        assert!(matches!(
            svc.evaluate(&answers),
            Err(FeatureError::UnknownSavingLevel(_))
        ));
    }

    #[test]
    fn test_evaluation_serializes_flat() {
        let svc = service(&["Age"]);
        let eval = svc.evaluate(&FormAnswers::default()).unwrap();
        let json = serde_json::to_value(&eval).unwrap();
        assert_eq!(json["status"], "predicted");
        assert_eq!(json["label"], "1");
        assert_eq!(json["submitted"]["n_cols"], 1);
        assert!(json.get("row").is_none());
    }
}
