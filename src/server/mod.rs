//! HTTP server exposing the prediction API.
//!
//! - [`api`]: Request/response types, router and route handlers
//! - [`error`]: API error type and JSON error bodies
//! - [`metrics`]: Prometheus counters

pub mod api;
pub mod error;
pub mod metrics;
