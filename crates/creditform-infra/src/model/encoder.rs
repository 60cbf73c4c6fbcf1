//! Ordinal encoding of categorical text columns.
//!
//! Each listed column maps its category text to the category's position.
//! Unlisted columns pass through untouched. A value outside the fitted
//! categories is an inference error, never silently defaulted.

use serde::{Deserialize, Serialize};

use creditform_core::model::classifier::DeclaresColumns;
use creditform_types::error::{InferenceError, ModelLoadError};
use creditform_types::feature::{FeatureRow, FeatureValue};

use super::input;

/// Fitted categories for one column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncodedColumn {
    pub column: String,
    pub categories: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrdinalEncoder {
    pub columns: Vec<EncodedColumn>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feature_names_in: Option<Vec<String>>,
}

impl OrdinalEncoder {
    pub fn validate(&self, stage: &str) -> Result<(), ModelLoadError> {
        for encoded in &self.columns {
            if encoded.categories.is_empty() {
                return Err(ModelLoadError::Invalid(format!(
                    "{stage}: column '{}' has no categories",
                    encoded.column
                )));
            }
        }
        Ok(())
    }

    pub fn transform(&self, stage: &str, row: &FeatureRow) -> Result<FeatureRow, InferenceError> {
        if let Some(names) = self.feature_names_in.as_deref() {
            input::check_columns(stage, Some(names), names.len(), row)?;
        }

        row.iter()
            .map(|(column, value)| {
                let Some(encoded) = self.columns.iter().find(|c| c.column == column) else {
                    return Ok((column.to_string(), value.clone()));
                };
                let text = value.to_string();
                let index = encoded
                    .categories
                    .iter()
                    .position(|category| *category == text)
                    .ok_or_else(|| InferenceError::UnseenCategory {
                        stage: stage.to_string(),
                        column: column.to_string(),
                        value: text.clone(),
                    })?;
                Ok((column.to_string(), FeatureValue::Int(index as i64)))
            })
            .collect()
    }
}

impl DeclaresColumns for OrdinalEncoder {
    fn feature_names_in(&self) -> Option<&[String]> {
        self.feature_names_in.as_deref()
    }
}
