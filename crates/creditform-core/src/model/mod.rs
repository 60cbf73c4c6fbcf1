//! Model abstractions for Creditform.
//!
//! - `classifier`: the capability traits every loaded model implements
//! - `schema`: probing a model for its declared input columns
//! - `inference`: the single call site for predict / predict_proba

pub mod classifier;
pub mod inference;
pub mod schema;
