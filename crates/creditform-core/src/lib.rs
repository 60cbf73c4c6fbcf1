//! Business logic and model capability traits for Creditform.
//!
//! This crate defines the "ports" (classifier traits) that the infrastructure
//! layer implements, plus the pure logic around them: feature row building,
//! schema introspection, and inference invocation. It depends only on
//! `creditform-types` -- never on `creditform-infra` or any I/O crate.

pub mod feature;
pub mod model;
pub mod service;
