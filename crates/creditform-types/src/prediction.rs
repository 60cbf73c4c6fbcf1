//! Prediction results returned by the inference call.

use serde::{Deserialize, Serialize};

/// Outcome of one successful inference call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// Predicted class label for the submitted row.
    pub label: String,
    /// Probability of the positive class (index 1), when the model provides one.
    pub probability: Option<f64>,
}

impl Prediction {
    /// Probability as fixed-point text with `precision` digits.
    pub fn probability_text(&self, precision: usize) -> Option<String> {
        self.probability.map(|p| format!("{p:.precision$}"))
    }
}

/// The columns about to be submitted, shown before the prediction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmittedColumns {
    pub input_columns: Vec<String>,
    pub n_cols: usize,
}

impl SubmittedColumns {
    pub fn new(input_columns: Vec<String>) -> Self {
        let n_cols = input_columns.len();
        Self {
            input_columns,
            n_cols,
        }
    }
}
