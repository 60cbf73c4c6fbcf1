//! Classifier capability traits.
//!
//! A loaded model is anything that can label a feature row. Two optional
//! capabilities are probed explicitly instead of by reflection:
//! - the model declares the input columns it was fitted on
//! - the model is a pipeline exposing ordered named stages, any of which may
//!   declare input columns
//!
//! Implementations live in creditform-infra (e.g. `LogisticRegression`,
//! `Pipeline`).

use creditform_types::error::InferenceError;
use creditform_types::feature::FeatureRow;

/// Something that may record the input columns it was fitted on.
pub trait DeclaresColumns {
    /// Ordered input column names, if recorded.
    fn feature_names_in(&self) -> Option<&[String]> {
        None
    }
}

/// One stage of a pipeline, borrowed from the model.
pub struct NamedStage<'a> {
    pub name: &'a str,
    pub stage: &'a dyn DeclaresColumns,
}

/// Trait for trained binary classifiers.
///
/// `Send + Sync` so the model can be shared read-only across request handlers.
pub trait Classifier: DeclaresColumns + Send + Sync {
    /// Short human-readable kind (e.g. "logistic_regression", "pipeline").
    fn kind(&self) -> &str;

    /// Predicted class label for a single row.
    fn predict(&self, row: &FeatureRow) -> Result<String, InferenceError>;

    /// Whether [`Classifier::predict_proba`] is available.
    fn supports_proba(&self) -> bool {
        false
    }

    /// Class probabilities for a single row, in class order.
    fn predict_proba(&self, _row: &FeatureRow) -> Result<Vec<f64>, InferenceError> {
        Err(InferenceError::Unsupported("predict_proba".to_string()))
    }

    /// Ordered named stages when the model is a pipeline.
    fn stages(&self) -> Option<Vec<NamedStage<'_>>> {
        None
    }
}
