use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while turning form answers into a feature row.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FeatureError {
    #[error("unknown saving accounts level: '{0}'")]
    UnknownSavingLevel(String),

    #[error("job code is not an integer: '{0}'")]
    InvalidJob(String),
}

/// Errors raised while probing a model for its declared input columns.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchemaError {
    #[error("{source_name} declares an empty column name at position {position}")]
    EmptyColumnName { source_name: String, position: usize },

    #[error("{source_name} declares column '{column}' more than once")]
    DuplicateColumn { source_name: String, column: String },
}

/// Errors raised by a model's predict / predict_proba calls.
#[derive(Debug, Error, PartialEq)]
pub enum InferenceError {
    #[error(
        "feature names do not match those seen at fit time in stage '{stage}': \
         unseen {unexpected:?}, missing {missing:?}"
    )]
    ColumnMismatch {
        stage: String,
        unexpected: Vec<String>,
        missing: Vec<String>,
    },

    #[error("feature names in stage '{stage}' must be in the same order as at fit time")]
    ColumnOrder { stage: String },

    #[error("stage '{stage}' expects {expected} features, got {actual}")]
    WidthMismatch {
        stage: String,
        expected: usize,
        actual: usize,
    },

    #[error("could not convert column '{column}' to float in stage '{stage}': '{value}'")]
    NonNumeric {
        stage: String,
        column: String,
        value: String,
    },

    #[error("found unknown category '{value}' in column '{column}' during transform in stage '{stage}'")]
    UnseenCategory {
        stage: String,
        column: String,
        value: String,
    },

    #[error("model does not support {0}")]
    Unsupported(String),
}

/// Errors raised while loading the model artifact from disk.
#[derive(Debug, Error)]
pub enum ModelLoadError {
    #[error("failed to read model artifact {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse model artifact {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid model artifact: {0}")]
    Invalid(String),
}

/// Form answers outside the bounds or options the form offers.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid form input: {}", .0.join("; "))]
pub struct ValidationError(pub Vec<String>);
