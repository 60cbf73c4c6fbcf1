//! Schema introspection: which input columns does the model expect?
//!
//! Checks the model's own declaration first, then the stages of a pipeline
//! in order, taking the first stage that declares columns. The probe is a
//! diagnostic: every outcome, failures included, becomes a [`SchemaReport`].

use std::collections::HashSet;

use creditform_types::error::SchemaError;
use creditform_types::schema::{ColumnSource, SchemaReport};

use super::classifier::Classifier;

/// Probe `model` for its declared input columns.
///
/// Never fails: a faulty declaration is logged and reported as
/// [`SchemaReport::Failed`].
pub fn probe_schema(model: &dyn Classifier) -> SchemaReport {
    match declared_columns(model) {
        Ok(Some((source, columns))) => {
            tracing::info!(
                source = %source,
                n_cols = columns.len(),
                "model declares its input columns"
            );
            SchemaReport::Declared { source, columns }
        }
        Ok(None) => {
            tracing::info!(kind = model.kind(), "model does not declare input columns");
            SchemaReport::NotDeclared
        }
        Err(e) => {
            tracing::warn!(error = %e, "failed to read model input columns");
            SchemaReport::Failed {
                detail: e.to_string(),
            }
        }
    }
}

/// First declared column list, with where it came from.
pub fn declared_columns(
    model: &dyn Classifier,
) -> Result<Option<(ColumnSource, Vec<String>)>, SchemaError> {
    if let Some(columns) = model.feature_names_in() {
        check_columns("model", columns)?;
        return Ok(Some((ColumnSource::Model, columns.to_vec())));
    }

    let Some(stages) = model.stages() else {
        return Ok(None);
    };

    for stage in stages {
        if let Some(columns) = stage.stage.feature_names_in() {
            check_columns(&format!("stage '{}'", stage.name), columns)?;
            return Ok(Some((
                ColumnSource::Stage(stage.name.to_string()),
                columns.to_vec(),
            )));
        }
    }

    Ok(None)
}

fn check_columns(source_name: &str, columns: &[String]) -> Result<(), SchemaError> {
    let mut seen = HashSet::with_capacity(columns.len());
    for (position, column) in columns.iter().enumerate() {
        if column.trim().is_empty() {
            return Err(SchemaError::EmptyColumnName {
                source_name: source_name.to_string(),
                position,
            });
        }
        if !seen.insert(column.as_str()) {
            return Err(SchemaError::DuplicateColumn {
                source_name: source_name.to_string(),
                column: column.clone(),
            });
        }
    }
    Ok(())
}
