//! Service layer orchestrating feature building, schema probing, and inference.

pub mod prediction;
