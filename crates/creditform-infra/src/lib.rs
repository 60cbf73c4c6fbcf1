//! Infrastructure layer for Creditform.
//!
//! Contains implementations of the classifier traits defined in
//! `creditform-core` (logistic regression, preprocessing stages, pipelines),
//! the on-disk model artifact loader, configuration loading, and path
//! resolution.

pub mod config;
pub mod model;
pub mod paths;
