//! Result of probing a model for the input columns it declares.

use serde::{Deserialize, Serialize};

use std::fmt;

/// Where a declared column list was found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "name", rename_all = "lowercase")]
pub enum ColumnSource {
    /// Declared by the model object itself.
    Model,
    /// Declared by the named pipeline stage.
    Stage(String),
}

impl fmt::Display for ColumnSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnSource::Model => write!(f, "model"),
            ColumnSource::Stage(name) => write!(f, "pipeline stage '{name}'"),
        }
    }
}

/// Diagnostic readout of the schema probe.
///
/// Never fatal: a failed probe is reported and the fallback column list is
/// used instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SchemaReport {
    Declared {
        source: ColumnSource,
        columns: Vec<String>,
    },
    NotDeclared,
    Failed {
        detail: String,
    },
}

impl SchemaReport {
    /// Declared columns, or an empty slice when none were found.
    pub fn expected_columns(&self) -> &[String] {
        match self {
            SchemaReport::Declared { columns, .. } => columns,
            _ => &[],
        }
    }

    /// One-line human summary for the diagnostic readout.
    pub fn summary(&self) -> String {
        match self {
            SchemaReport::Declared { source, columns } => {
                format!("Model expects {} columns (declared by {source})", columns.len())
            }
            SchemaReport::NotDeclared => {
                "Model does not declare its input columns; using the fallback column list"
                    .to_string()
            }
            SchemaReport::Failed { detail } => {
                format!("Could not read the model's input columns: {detail}")
            }
        }
    }
}
