//! Shared domain types for Creditform.
//!
//! This crate contains the domain types used across the workspace: applicant
//! form answers and their categorical levels, feature rows, predictions,
//! schema reports, configuration, and the associated error types.
//!
//! Zero infrastructure dependencies -- only serde and thiserror.

pub mod applicant;
pub mod config;
pub mod error;
pub mod feature;
pub mod prediction;
pub mod schema;
