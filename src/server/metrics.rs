//! Prometheus counters for the prediction endpoint.

use prometheus::{IntCounter, IntCounterVec, Opts, Registry, TextEncoder};

/// Prediction counters, registered on a private registry.
pub struct PredictionMetrics {
    registry: Registry,
    predictions: IntCounterVec,
    rejected: IntCounter,
}

impl PredictionMetrics {
    pub fn new() -> prometheus::Result<Self> {
        let registry = Registry::new();

        let predictions = IntCounterVec::new(
            Opts::new(
                "symptom_advisor_predictions_total",
                "Predictions served, by the rule that fired",
            ),
            &["rule"],
        )?;
        let rejected = IntCounter::new(
            "symptom_advisor_rejected_requests_total",
            "Prediction requests rejected before reaching the engine",
        )?;

        registry.register(Box::new(predictions.clone()))?;
        registry.register(Box::new(rejected.clone()))?;

        Ok(Self {
            registry,
            predictions,
            rejected,
        })
    }

    pub fn record_prediction(&self, rule: &str) {
        self.predictions.with_label_values(&[rule]).inc();
    }

    pub fn record_rejection(&self) {
        self.rejected.inc();
    }

    /// Render all metrics in the Prometheus text format.
    pub fn render(&self) -> prometheus::Result<String> {
        TextEncoder::new().encode_to_string(&self.registry.gather())
    }
}
