//! Rule-based condition inference.
//!
//! - [`symptoms`]: Symptom labels and the per-request symptom set
//! - [`rules`]: The ordered rule table
//! - [`predictor`]: The engine that evaluates rules and builds results
//! - [`model`]: Model handle loaded at engine construction

pub mod model;
pub mod predictor;
pub mod rules;
pub mod symptoms;

pub use predictor::{Engine, Prediction, PredictionResult};
