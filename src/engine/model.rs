//! Model handle loaded once when the engine is built.
//!
//! Predictions are produced by the rule table; the handle only marks where a
//! trained model would be loaded and is reported by the health endpoint.

use serde::Serialize;
use tracing::info;

/// Which model backs the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelKind {
    /// No trained weights; the rule table answers every request.
    RulePlaceholder,
}

impl std::fmt::Display for ModelKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelKind::RulePlaceholder => write!(f, "rule_placeholder"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ModelHandle {
    kind: ModelKind,
}

impl ModelHandle {
    /// Load the model. Loading the placeholder cannot fail and has no side effects
    /// beyond the log line.
    pub fn load() -> Self {
        let kind = ModelKind::RulePlaceholder;
        info!(model = %kind, "Model initialized");
        Self { kind }
    }

    pub fn kind(&self) -> ModelKind {
        self.kind
    }
}
