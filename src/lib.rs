//! symptom-advisor: rule-based symptom-to-condition suggestions.
//!
//! A client submits selected symptoms and receives a predicted condition, a
//! confidence score and advisory suggestions. The answer comes from an ordered
//! rule table evaluated first-match-wins; the HTTP layer validates requests,
//! serves the symptom catalog and reports health and metrics.

pub mod catalog;
pub mod config;
pub mod engine;
pub mod server;
