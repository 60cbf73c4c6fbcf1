//! Input checks shared by every stage: column names, width, numeric values.

use std::collections::HashSet;

use creditform_types::error::{InferenceError, ModelLoadError};
use creditform_types::feature::{FeatureRow, FeatureValue};

/// Reject a row the stage was not fitted for.
///
/// With recorded names, the row must carry exactly those names in the same
/// order. Without names, only the width is checked.
pub fn check_columns(
    stage: &str,
    feature_names_in: Option<&[String]>,
    n_features: usize,
    row: &FeatureRow,
) -> Result<(), InferenceError> {
    if let Some(names) = feature_names_in {
        let columns = row.columns();
        let fitted: HashSet<&str> = names.iter().map(String::as_str).collect();
        let given: HashSet<&str> = columns.iter().copied().collect();

        if fitted != given {
            let unexpected = columns
                .iter()
                .filter(|c| !fitted.contains(**c))
                .map(|c| c.to_string())
                .collect();
            let missing = names
                .iter()
                .filter(|n| !given.contains(n.as_str()))
                .cloned()
                .collect();
            return Err(InferenceError::ColumnMismatch {
                stage: stage.to_string(),
                unexpected,
                missing,
            });
        }
        if columns.iter().zip(names).any(|(c, n)| *c != n.as_str()) {
            return Err(InferenceError::ColumnOrder {
                stage: stage.to_string(),
            });
        }
    }

    if row.len() != n_features {
        return Err(InferenceError::WidthMismatch {
            stage: stage.to_string(),
            expected: n_features,
            actual: row.len(),
        });
    }
    Ok(())
}

/// Row values as floats. Text converts only when it spells a number.
pub fn numeric_values(stage: &str, row: &FeatureRow) -> Result<Vec<f64>, InferenceError> {
    row.iter()
        .map(|(column, value)| match value {
            FeatureValue::Text(text) => {
                text.trim()
                    .parse::<f64>()
                    .map_err(|_| InferenceError::NonNumeric {
                        stage: stage.to_string(),
                        column: column.to_string(),
                        value: text.clone(),
                    })
            }
            other => Ok(other.as_f64().unwrap_or_default()),
        })
        .collect()
}

/// Load-time check that recorded names line up with the fitted width.
pub fn check_declared_width(
    stage: &str,
    feature_names_in: Option<&[String]>,
    n_features: usize,
) -> Result<(), ModelLoadError> {
    match feature_names_in {
        Some(names) if names.len() != n_features => Err(ModelLoadError::Invalid(format!(
            "{stage}: feature_names_in has {} names but the stage was fitted on {n_features} features",
            names.len()
        ))),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[(&str, FeatureValue)]) -> FeatureRow {
        cells
            .iter()
            .map(|(c, v)| (c.to_string(), v.clone()))
            .collect()
    }

    fn names(n: &[&str]) -> Vec<String> {
        n.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_matching_names_pass() {
        let r = row(&[("Age", FeatureValue::Int(30)), ("Job", FeatureValue::Int(1))]);
        assert!(check_columns("clf", Some(names(&["Age", "Job"]).as_slice()), 2, &r).is_ok());
    }

    #[test]
    fn test_name_mismatch_lists_both_sides() {
        let r = row(&[("Age", FeatureValue::Int(30)), ("Duration", FeatureValue::Int(12))]);
        let err = check_columns("clf", Some(names(&["Age", "Job"]).as_slice()), 2, &r).unwrap_err();
        assert_eq!(
            err,
            InferenceError::ColumnMismatch {
                stage: "clf".to_string(),
                unexpected: names(&["Duration"]),
                missing: names(&["Job"]),
            }
        );
    }

    #[test]
    fn test_same_names_wrong_order() {
        let r = row(&[("Job", FeatureValue::Int(1)), ("Age", FeatureValue::Int(30))]);
        let err = check_columns("clf", Some(names(&["Age", "Job"]).as_slice()), 2, &r).unwrap_err();
        assert_eq!(err, InferenceError::ColumnOrder { stage: "clf".to_string() });
    }

    #[test]
    fn test_width_checked_without_names() {
        let r = row(&[("Age", FeatureValue::Int(30))]);
        let err = check_columns("clf", None, 3, &r).unwrap_err();
        assert_eq!(
            err,
            InferenceError::WidthMismatch {
                stage: "clf".to_string(),
                expected: 3,
                actual: 1,
            }
        );
    }

    #[test]
    fn test_numeric_text_converts_other_text_fails() {
        let ok = row(&[("Job", FeatureValue::Text("2".to_string()))]);
        assert_eq!(numeric_values("clf", &ok).unwrap(), vec![2.0]);

        let bad = row(&[("Sex", FeatureValue::Text("male".to_string()))]);
        let err = numeric_values("clf", &bad).unwrap_err();
        assert!(err.to_string().contains("could not convert column 'Sex' to float"));
    }

    #[test]
    fn test_declared_width_mismatch_is_load_error() {
        assert!(check_declared_width("clf", Some(names(&["a"]).as_slice()), 2).is_err());
        assert!(check_declared_width("clf", None, 2).is_ok());
    }
}
