//! Router tests against an in-memory model

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use insight_core::{FeatureVector, ModelError, ModelHandle, Predictor};
use serde_json::{json, Value};
use tower::ServiceExt;

use crate::config::Config;
use crate::{create_router, AppState};

/// Returns the concentrating score as the correctness prediction
struct EchoConcentration;

impl Predictor for EchoConcentration {
    fn predict(&self, features: &FeatureVector) -> Result<f64, ModelError> {
        Ok(features.get_by_name("avg_conf_concentrating").unwrap_or(0.0))
    }

    fn kind(&self) -> &'static str {
        "echo"
    }
}

struct Broken;

impl Predictor for Broken {
    fn predict(&self, _features: &FeatureVector) -> Result<f64, ModelError> {
        Err(ModelError::Inference("session poisoned".to_string()))
    }

    fn kind(&self) -> &'static str {
        "broken"
    }
}

fn app_with(predictor: Box<dyn Predictor>) -> Router {
    create_router(AppState {
        model: Arc::new(ModelHandle::from_predictor(predictor, "<memory>")),
        config: Config::default(),
    })
}

fn app() -> Router {
    app_with(Box::new(EchoConcentration))
}

fn sample_body() -> Value {
    json!({
        "hint_count": 2,
        "bottom_hint": 1,
        "attempt_count": 3,
        "ms_first_response": 15000,
        "duration": 900,
        "avg_conf_frustrated": 0.3,
        "avg_conf_confused": 0.2,
        "avg_conf_concentrating": 0.7,
        "avg_conf_bored": 0.1
    })
}

fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

#[tokio::test]
async fn root_describes_service() {
    let (status, body) = send(app(), get("/")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["message"].as_str().unwrap().contains("Student Performance"));
}

#[tokio::test]
async fn health_reports_loaded_model() {
    let (status, body) = send(app(), get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["model_loaded"], true);
    assert_eq!(body["model_kind"], "echo");
}

#[tokio::test]
async fn health_ignores_request_body() {
    let request = Request::builder()
        .uri("/health")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("garbage"))
        .unwrap();
    let (status, body) = send(app(), request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn predict_returns_score_and_behaviors() {
    let (status, body) = send(app(), post_json("/predict", &sample_body())).await;
    assert_eq!(status, StatusCode::OK);

    let prediction = &body["prediction"];
    assert_eq!(prediction["correctness_score"], 0.7);
    assert_eq!(prediction["category_number"], 3);
    assert_eq!(prediction["performance_category"], "Average");

    assert_eq!(body["learner_profile"], "General Learner");
    assert_eq!(body["dominant_affect"]["label"], "concentrating");
    assert_eq!(body["behaviors"]["engagement"], "High");
    assert_eq!(body["behaviors"]["persistence"], "Moderate");
    assert!(body["recommendations"]["learning_material"].is_string());
    assert!(body["recommendations"]["feedback_message"].is_string());
    assert_eq!(body["raw_metrics"]["action_count"], 5.0);
    assert!(body["raw_metrics"].get("action_level").is_none());
}

#[tokio::test]
async fn analyze_never_includes_prediction() {
    let (status, body) = send(app(), post_json("/analyze", &sample_body())).await;
    assert_eq!(status, StatusCode::OK);

    assert!(body.get("prediction").is_none());
    assert!(body.get("recommendations").is_none());
    assert_eq!(body["dominant_affect"]["label"], "concentrating");
    assert_eq!(body["behaviors"]["overall_activity"], "Active");
    assert_eq!(body["computed_metrics"]["efficiency_indicator"], 1.25);
}

#[tokio::test]
async fn analyze_does_not_call_model() {
    let (status, _) = send(app_with(Box::new(Broken)), post_json("/analyze", &sample_body())).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn model_failure_is_server_error() {
    let (status, body) = send(app_with(Box::new(Broken)), post_json("/predict", &sample_body())).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Prediction failed");
    assert_eq!(body["status"], 500);
}

#[tokio::test]
async fn missing_field_is_unprocessable() {
    let mut body = sample_body();
    body.as_object_mut().unwrap().remove("duration");

    let (status, response) = send(app(), post_json("/predict", &body)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response["error"].as_str().unwrap().contains("duration"));
}

#[tokio::test]
async fn out_of_range_values_are_unprocessable() {
    let mut negative = sample_body();
    negative["attempt_count"] = json!(-1);
    let (status, response) = send(app(), post_json("/analyze", &negative)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response["error"].as_str().unwrap().contains("attempt_count"));

    let mut too_confident = sample_body();
    too_confident["avg_conf_bored"] = json!(1.5);
    let (status, _) = send(app(), post_json("/predict", &too_confident)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn malformed_json_is_bad_request() {
    let request = Request::builder()
        .method("POST")
        .uri("/predict")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"hint_count\": "))
        .unwrap();
    let (status, body) = send(app(), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], 400);
}

#[test]
fn missing_content_type_is_rejected() {
    let request = Request::builder()
        .method("POST")
        .uri("/analyze")
        .body(Body::from(sample_body().to_string()))
        .unwrap();
    let (status, _) = tokio_test::block_on(send(app(), request));
    assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
}
