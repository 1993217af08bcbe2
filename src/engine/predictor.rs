//! The inference engine: normalizes input, runs the rule table, and fills in
//! the result record.
//!
//! The engine is built once at startup and shared by handle. Rule evaluation
//! reads only static data; the random source for the catch-all confidence is
//! injected at construction and locked only for the single draw.

use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::engine::model::ModelHandle;
use crate::engine::rules::{self, Confidence, Rule, RULES};
use crate::engine::symptoms::SymptomSet;

/// Catch-all confidence is drawn in whole hundredths from `[0.40, 0.60)`.
const SAMPLED_MIN_HUNDREDTHS: u32 = 40;
const SAMPLED_MAX_HUNDREDTHS: u32 = 60;

/// Output record of a single prediction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Human-readable condition name, or a sentinel phrase for no match / no input.
    #[serde(rename = "predicted_disease")]
    pub condition: String,

    /// Rule confidence in `[0.0, 1.0]`. Not a calibrated probability.
    pub confidence: f64,

    /// Advisory messages, never empty.
    pub suggestions: Vec<String>,
}

/// A prediction together with the name of the rule that produced it.
#[derive(Debug, Clone)]
pub struct Prediction {
    pub rule: &'static str,
    pub result: PredictionResult,
}

/// Rule-based inference engine.
pub struct Engine {
    model: ModelHandle,
    rng: Mutex<Box<dyn RngCore + Send>>,
}

impl Engine {
    /// Create an engine with an entropy-seeded random source.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Create an engine whose catch-all confidence is reproducible.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    /// Create an engine drawing catch-all confidence from `rng`.
    pub fn with_rng<R: RngCore + Send + 'static>(rng: R) -> Self {
        Self {
            model: ModelHandle::load(),
            rng: Mutex::new(Box::new(rng)),
        }
    }

    pub fn model(&self) -> &ModelHandle {
        &self.model
    }

    /// The rule table in evaluation order.
    pub fn rules(&self) -> &'static [Rule] {
        &RULES
    }

    /// Predict a condition for `symptoms`. Never fails.
    pub fn predict<S: AsRef<str>>(&self, symptoms: &[S]) -> PredictionResult {
        self.evaluate(symptoms).result
    }

    /// Like [`Engine::predict`], but also reports which rule fired.
    pub fn evaluate<S: AsRef<str>>(&self, symptoms: &[S]) -> Prediction {
        let set = SymptomSet::new(symptoms);
        let rule = rules::first_match(&set);

        let confidence = match rule.outcome.confidence {
            Confidence::Fixed(c) => c,
            Confidence::Sampled => self.sample_confidence(),
        };

        debug!(
            rule = rule.name,
            symptoms = set.len(),
            confidence,
            "Rule matched"
        );

        Prediction {
            rule: rule.name,
            result: PredictionResult {
                condition: rule.outcome.condition.to_string(),
                confidence,
                suggestions: rule
                    .outcome
                    .suggestions
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
            },
        }
    }

    fn sample_confidence(&self) -> f64 {
        // A poisoned lock still holds a usable generator.
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        let hundredths = rng.gen_range(SAMPLED_MIN_HUNDREDTHS..SAMPLED_MAX_HUNDREDTHS);
        f64::from(hundredths) / 100.0
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
