//! Standardization stage: `(x - mean) / scale` per column.

use serde::{Deserialize, Serialize};

use creditform_core::model::classifier::DeclaresColumns;
use creditform_types::error::{InferenceError, ModelLoadError};
use creditform_types::feature::{FeatureRow, FeatureValue};

use super::input;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardScaler {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feature_names_in: Option<Vec<String>>,
}

impl StandardScaler {
    pub fn n_features(&self) -> usize {
        self.mean.len()
    }

    pub fn validate(&self, stage: &str) -> Result<(), ModelLoadError> {
        if self.mean.len() != self.scale.len() {
            return Err(ModelLoadError::Invalid(format!(
                "{stage}: mean has {} entries but scale has {}",
                self.mean.len(),
                self.scale.len()
            )));
        }
        if self.scale.iter().any(|s| *s == 0.0 || !s.is_finite()) {
            return Err(ModelLoadError::Invalid(format!(
                "{stage}: scale entries must be finite and non-zero"
            )));
        }
        input::check_declared_width(stage, self.feature_names_in.as_deref(), self.n_features())
    }

    /// Standardize every column, keeping names and order.
    pub fn transform(&self, stage: &str, row: &FeatureRow) -> Result<FeatureRow, InferenceError> {
        input::check_columns(stage, self.feature_names_in.as_deref(), self.n_features(), row)?;
        let values = input::numeric_values(stage, row)?;

        Ok(row
            .columns()
            .into_iter()
            .zip(values)
            .zip(self.mean.iter().zip(&self.scale))
            .map(|((column, x), (mean, scale))| {
                (column.to_string(), FeatureValue::Float((x - mean) / scale))
            })
            .collect())
    }
}

impl DeclaresColumns for StandardScaler {
    fn feature_names_in(&self) -> Option<&[String]> {
        self.feature_names_in.as_deref()
    }
}
