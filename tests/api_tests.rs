//! Integration tests for the HTTP API.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use symptom_advisor::config::Config;
use symptom_advisor::server::api::{build_router, AppState};

fn app() -> Router {
    let mut config = Config::default();
    config.engine.seed = Some(11);
    let state = AppState::from_config(Arc::new(config)).unwrap();
    build_router(Arc::new(state))
}

fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), 64 * 1024).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_predict_success() {
    let body = json!({"symptoms": ["Fever", "Cough", "ShortnessOfBreath"]}).to_string();
    let response = app().oneshot(post_json("/api/predict", &body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = json_body(response).await;
    assert_eq!(json["predicted_disease"], "Flu with complications");
    assert_eq!(json["confidence"], 0.9);
    assert_eq!(json["suggestions"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_predict_unknown_label_uses_catch_all() {
    let body = json!({"symptoms": ["UnknownXYZ"]}).to_string();
    let response = app().oneshot(post_json("/api/predict", &body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = json_body(response).await;
    assert_eq!(
        json["predicted_disease"],
        "Needs more information or professional diagnosis"
    );
    let confidence = json["confidence"].as_f64().unwrap();
    assert!((0.4..0.6).contains(&confidence));
}

#[tokio::test]
async fn test_predict_rejects_empty_symptoms() {
    for body in [r#"{}"#, r#"{"symptoms": []}"#, r#"{"symptoms": null}"#] {
        let response = app().oneshot(post_json("/api/predict", body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{body}");
        let json = json_body(response).await;
        assert_eq!(
            json["error"],
            "No symptoms provided. Please select at least one symptom."
        );
    }
}

#[tokio::test]
async fn test_predict_rejects_wrong_types() {
    for body in [r#"{"symptoms": "Fever"}"#, r#"{"symptoms": ["Fever", 1]}"#] {
        let response = app().oneshot(post_json("/api/predict", body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{body}");
        let json = json_body(response).await;
        assert_eq!(json["error"], "Symptoms must be a list of strings.");
    }
}

#[tokio::test]
async fn test_predict_rejects_malformed_json() {
    let response = app()
        .oneshot(post_json("/api/predict", "{not json"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = json_body(response).await;
    assert!(json["error"].as_str().unwrap().starts_with("Malformed request body"));
}

#[tokio::test]
async fn test_list_symptoms() {
    let response = app().oneshot(get("/api/symptoms")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = json_body(response).await;
    let list = json.as_array().unwrap();
    assert_eq!(list.len(), 17);
    assert_eq!(list[0], json!({"id": 1, "name": "Fever"}));
}

#[tokio::test]
async fn test_search_symptoms() {
    let response = app().oneshot(get("/api/symptoms?search=throat")).await.unwrap();
    let json = json_body(response).await;
    assert_eq!(json, json!([{"id": 11, "name": "SoreThroat"}]));
}

#[tokio::test]
async fn test_health() {
    let response = app().oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = json_body(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["model"], "rule_placeholder");
    assert_eq!(json["rule_count"], 11);
    assert_eq!(json["symptom_count"], 17);
}

#[tokio::test]
async fn test_metrics_count_predictions() {
    let app = app();

    let body = json!({"symptoms": ["SkinRash"]}).to_string();
    let response = app
        .clone()
        .oneshot(post_json("/api/predict", &body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(post_json("/api/predict", "{}"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app.oneshot(get("/metrics")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), 64 * 1024).await.unwrap();
    let text = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(text.contains(r#"symptom_advisor_predictions_total{rule="skin_irritation"} 1"#));
    assert!(text.contains("symptom_advisor_rejected_requests_total 1"));
}

#[tokio::test]
async fn test_trailing_slash_routes() {
    let body = json!({"symptoms": ["Fever"]}).to_string();
    let response = app().oneshot(post_json("/api/predict/", &body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = json_body(response).await;
    assert_eq!(json["predicted_disease"], "General Viral Infection");

    let response = app().oneshot(get("/api/symptoms/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await.as_array().unwrap().len(), 17);
}

#[tokio::test]
async fn test_zero_symptoms_value_is_treated_as_missing() {
    for body in [r#"{"symptoms": 0}"#, r#"{"symptoms": 0.0}"#] {
        let response = app().oneshot(post_json("/api/predict", body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{body}");
        let json = json_body(response).await;
        assert_eq!(
            json["error"],
            "No symptoms provided. Please select at least one symptom."
        );
    }
}

#[tokio::test]
async fn test_configured_timeout_serves_requests() {
    let config: Config =
        serde_json::from_str(r#"{"server": {"request_timeout_secs": 5}, "engine": {"seed": 3}}"#)
            .unwrap();
    assert_eq!(config.server.request_timeout_secs, 5);
    let state = AppState::from_config(Arc::new(config)).unwrap();
    let app = build_router(Arc::new(state));

    let response = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
