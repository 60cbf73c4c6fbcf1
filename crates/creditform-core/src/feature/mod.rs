//! Feature row construction.
//!
//! - `builder`: maps form answers to the column layout a trained model expects
//! - `columns`: column names, the one-hot naming convention, and the fallback list

pub mod builder;
pub mod columns;
