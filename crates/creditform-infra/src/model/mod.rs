//! Model artifact and the estimators it describes.
//!
//! The artifact is a JSON document tagged by `kind`:
//! - `logistic_regression`: a single binary estimator
//! - `pipeline`: ordered named steps, preprocessing stages then a final estimator
//!
//! Loaded once at startup by [`artifact::load_model`].

pub mod artifact;
pub mod encoder;
pub mod input;
pub mod logistic;
pub mod pipeline;
pub mod scaler;
