//! Inference invocation.
//!
//! The one place predict / predict_proba are called. Failures are returned
//! verbatim: no retry, no coercion of the row, no partial result.

use creditform_types::error::InferenceError;
use creditform_types::feature::FeatureRow;
use creditform_types::prediction::Prediction;

use super::classifier::Classifier;

/// Index of the positive class in `predict_proba` output.
pub const POSITIVE_CLASS: usize = 1;

/// Label the row and, when the model supports it, attach the positive-class
/// probability.
#[tracing::instrument(
    name = "inference",
    skip(model, row),
    fields(kind = model.kind(), n_cols = row.len())
)]
pub fn run_inference(model: &dyn Classifier, row: &FeatureRow) -> Result<Prediction, InferenceError> {
    let label = model.predict(row)?;

    let probability = if model.supports_proba() {
        let proba = model.predict_proba(row)?;
        let positive = proba.get(POSITIVE_CLASS).copied().ok_or_else(|| {
            InferenceError::Unsupported(format!(
                "a positive-class probability ({} classes returned)",
                proba.len()
            ))
        })?;
        Some(positive)
    } else {
        None
    };

    tracing::debug!(label = %label, probability = ?probability, "inference complete");
    Ok(Prediction { label, probability })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::classifier::DeclaresColumns;

    struct Fixed {
        proba: Option<Vec<f64>>,
        fail: bool,
    }

    impl DeclaresColumns for Fixed {}

    impl Classifier for Fixed {
        fn kind(&self) -> &str {
            "fixed"
        }

        fn predict(&self, row: &FeatureRow) -> Result<String, InferenceError> {
            if self.fail {
                return Err(InferenceError::WidthMismatch {
                    stage: "fixed".to_string(),
                    expected: 18,
                    actual: row.len(),
                });
            }
            Ok("good".to_string())
        }

        fn supports_proba(&self) -> bool {
            self.proba.is_some()
        }

        fn predict_proba(&self, _row: &FeatureRow) -> Result<Vec<f64>, InferenceError> {
            Ok(self.proba.clone().unwrap_or_default())
        }
    }

    #[test]
    fn test_label_and_positive_probability() {
        let model = Fixed {
            proba: Some(vec![0.2, 0.8]),
            fail: false,
        };
        let prediction = run_inference(&model, &FeatureRow::new()).unwrap();
        assert_eq!(prediction.label, "good");
        assert_eq!(prediction.probability, Some(0.8));
    }

    #[test]
    fn test_probability_absent_when_unsupported() {
        let model = Fixed {
            proba: None,
            fail: false,
        };
        let prediction = run_inference(&model, &FeatureRow::new()).unwrap();
        assert_eq!(prediction.probability, None);
    }

    #[test]
    fn test_failure_is_returned_verbatim() {
        let model = Fixed {
            proba: Some(vec![0.5, 0.5]),
            fail: true,
        };
        let err = run_inference(&model, &FeatureRow::new()).unwrap_err();
        assert_eq!(
            err,
            InferenceError::WidthMismatch {
                stage: "fixed".to_string(),
                expected: 18,
                actual: 0,
            }
        );
    }

    #[test]
    fn test_single_class_probability_is_an_error() {
        let model = Fixed {
            proba: Some(vec![1.0]),
            fail: false,
        };
        assert!(matches!(
            run_inference(&model, &FeatureRow::new()),
            Err(InferenceError::Unsupported(_))
        ));
    }
}
