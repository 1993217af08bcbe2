//! JSON HTTP API.
//!
//! - POST /api/predict (also /api/predict/)
//! - GET /api/symptoms (also /api/symptoms/)
//! - GET /health
//! - GET /metrics

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::catalog::{Symptom, SymptomCatalog};
use crate::config::Config;
use crate::engine::model::ModelKind;
use crate::engine::{Engine, PredictionResult};
use crate::server::error::{panic_response, ApiError};
use crate::server::metrics::PredictionMetrics;

/// Application state shared across handlers.
pub struct AppState {
    pub engine: Engine,
    pub catalog: SymptomCatalog,
    pub config: Arc<Config>,
    pub metrics: PredictionMetrics,
    pub start_time: Instant,
}

impl AppState {
    /// Build the engine, catalog and metrics described by `config`.
    pub fn from_config(config: Arc<Config>) -> anyhow::Result<Self> {
        let engine = match config.engine.seed {
            Some(seed) => Engine::seeded(seed),
            None => Engine::new(),
        };
        let catalog = SymptomCatalog::from_names(config.catalog.symptoms.iter().cloned());

        Ok(Self {
            engine,
            catalog,
            config,
            metrics: PredictionMetrics::new()?,
            start_time: Instant::now(),
        })
    }
}

/// Build the axum router with all API routes.
pub fn build_router(state: Arc<AppState>) -> Router {
    let router = Router::new()
        .route("/api/predict", post(predict))
        .route("/api/predict/", post(predict))
        .route("/api/symptoms", get(list_symptoms))
        .route("/api/symptoms/", get(list_symptoms))
        .route("/health", get(health))
        .route("/metrics", get(metrics))
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(state.config.server.request_timeout_secs),
        ))
        .layer(TraceLayer::new_for_http());

    let router = if state.config.server.cors_permissive {
        router.layer(CorsLayer::permissive())
    } else {
        router
    };

    router.with_state(state)
}

// ─── Request/Response Types ────────────────────────────────────────────────

/// Query parameters for the symptom listing.
#[derive(Debug, Deserialize)]
pub struct SymptomQuery {
    #[serde(default)]
    pub search: Option<String>,
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_secs: u64,
    pub model: ModelKind,
    pub rule_count: usize,
    pub symptom_count: usize,
}

/// Extract the `symptoms` list from a prediction request body.
///
/// Missing or empty values are reported separately from values of the wrong shape.
pub fn parse_symptoms(body: &Value) -> Result<Vec<String>, ApiError> {
    match body.get("symptoms") {
        None | Some(Value::Null) | Some(Value::Bool(false)) => Err(ApiError::NoSymptoms),
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => Err(ApiError::NoSymptoms),
        Some(Value::Array(items)) if items.is_empty() => Err(ApiError::NoSymptoms),
        Some(Value::String(s)) if s.is_empty() => Err(ApiError::NoSymptoms),
        Some(Value::Object(map)) if map.is_empty() => Err(ApiError::NoSymptoms),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| {
                item.as_str()
                    .map(str::to_owned)
                    .ok_or(ApiError::InvalidSymptoms)
            })
            .collect(),
        Some(_) => Err(ApiError::InvalidSymptoms),
    }
}

// ─── Route Handlers ────────────────────────────────────────────────────────

async fn predict(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<PredictionResult>, ApiError> {
    let request_id = Uuid::new_v4().to_string();

    let symptoms = payload
        .map_err(|rejection| ApiError::MalformedBody(rejection.body_text()))
        .and_then(|Json(body)| parse_symptoms(&body));

    let symptoms = match symptoms {
        Ok(symptoms) => symptoms,
        Err(e) => {
            warn!(request_id, error = %e, "Rejected prediction request");
            state.metrics.record_rejection();
            return Err(e);
        }
    };

    let unknown: Vec<&str> = symptoms
        .iter()
        .map(String::as_str)
        .filter(|s| !state.catalog.contains(s))
        .collect();
    if !unknown.is_empty() {
        debug!(request_id, ?unknown, "Symptoms outside the catalog");
    }

    let prediction = state.engine.evaluate(symptoms.as_slice());
    state.metrics.record_prediction(prediction.rule);

    info!(
        request_id,
        symptoms = symptoms.len(),
        rule = prediction.rule,
        confidence = prediction.result.confidence,
        "Prediction served"
    );

    Ok(Json(prediction.result))
}

async fn list_symptoms(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SymptomQuery>,
) -> Json<Vec<Symptom>> {
    let symptoms = match query.search.as_deref() {
        Some(q) => state.catalog.search(q).into_iter().cloned().collect(),
        None => state.catalog.list().to_vec(),
    };
    Json(symptoms)
}

async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs: state.start_time.elapsed().as_secs(),
        model: state.engine.model().kind(),
        rule_count: state.engine.rules().len(),
        symptom_count: state.catalog.len(),
    })
}

async fn metrics(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse, ApiError> {
    let body = state
        .metrics
        .render()
        .map_err(|e| ApiError::Internal(e.to_string()))?;
    Ok(([(header::CONTENT_TYPE, "text/plain; version=0.0.4")], body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_valid_list() {
        let parsed = parse_symptoms(&json!({"symptoms": ["Fever", "Cough"]})).unwrap();
        assert_eq!(parsed, vec!["Fever", "Cough"]);
    }

    #[test]
    fn test_parse_missing_or_empty() {
        for body in [
            json!({}),
            json!({"symptoms": null}),
            json!({"symptoms": []}),
            json!({"symptoms": ""}),
            json!({"symptoms": 0}),
            json!({"symptoms": 0.0}),
            json!([]),
        ] {
            assert!(matches!(parse_symptoms(&body), Err(ApiError::NoSymptoms)), "{body}");
        }
    }

    #[test]
    fn test_parse_wrong_types() {
        for body in [
            json!({"symptoms": "Fever"}),
            json!({"symptoms": ["Fever", 3]}),
            json!({"symptoms": [null]}),
            json!({"symptoms": {"a": "Fever"}}),
            json!({"symptoms": 12}),
        ] {
            assert!(
                matches!(parse_symptoms(&body), Err(ApiError::InvalidSymptoms)),
                "{body}"
            );
        }
    }
}
