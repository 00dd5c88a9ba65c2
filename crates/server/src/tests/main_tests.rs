use super::*;
use axum::{
    body::{self, Body},
    http::{Request, StatusCode},
};
use serde_json::{json, Value};
use shared::{error::ErrorBody, protocol::PredictionResult};
use tower::ServiceExt;

fn app() -> Router {
    build_router(&Settings::default())
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    serde_json::from_slice(&bytes).expect("json")
}

fn header_text<'a>(response: &'a axum::response::Response, name: &str) -> Option<&'a str> {
    response.headers().get(name).and_then(|v| v.to_str().ok())
}

fn predict_request(body: String) -> Request<Body> {
    Request::post("/predict")
        .header("content-type", "application/json")
        .header("content-length", body.len())
        .body(Body::from(body))
        .expect("request")
}

#[tokio::test]
async fn healthz_reports_ok() {
    let response = app()
        .oneshot(Request::get("/healthz").body(Body::empty()).expect("request"))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let body = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    assert_eq!(body.as_ref(), b"ok");
}

#[tokio::test]
async fn predict_accepts_client_wire_body() {
    let response = app()
        .oneshot(predict_request(
            json!({
                "courses": [{"grade":"71-80","credits":3},{"grade":"91-100","credits":4}],
                "attendance": "A",
                "cgpa": "B",
                "internship": "1",
                "certificates": ["2"]
            })
            .to_string(),
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(header_text(&response, "access-control-allow-origin"), Some("*"));

    let result: PredictionResult =
        serde_json::from_value(body_json(response).await).expect("prediction result");
    assert_eq!(result.risk_level, "High Risk");
    assert!(result
        .recommendations
        .contains(&"Consider seeking academic counseling or tutoring".to_string()));
}

#[tokio::test]
async fn predict_rejects_missing_fields_with_error_body() {
    let response = app()
        .oneshot(predict_request(json!({"courses": []}).to_string()))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: ErrorBody = serde_json::from_value(body_json(response).await).expect("error");
    assert_eq!(body.error, "Missing required data");
}

#[tokio::test]
async fn malformed_json_gets_error_body() {
    let response = app()
        .oneshot(predict_request("{not json".into()))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: ErrorBody = serde_json::from_value(body_json(response).await).expect("error");
    assert!(!body.error.is_empty());
}

#[tokio::test]
async fn plain_options_request_returns_no_content() {
    let response = app()
        .oneshot(
            Request::options("/predict")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn cross_origin_preflight_is_allowed() {
    let response = app()
        .oneshot(
            Request::options("/predict")
                .header("origin", "http://localhost:3000")
                .header("access-control-request-method", "POST")
                .header("access-control-request-headers", "content-type")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert_eq!(header_text(&response, "access-control-allow-origin"), Some("*"));
    assert_eq!(
        header_text(&response, "access-control-allow-headers"),
        Some("Content-Type")
    );
    assert_eq!(
        header_text(&response, "access-control-allow-methods"),
        Some("GET, POST, OPTIONS")
    );
}

#[tokio::test]
async fn oversized_body_is_rejected() {
    let settings = Settings {
        max_body_bytes: 16,
        ..Settings::default()
    };
    let response = build_router(&settings)
        .oneshot(predict_request(
            json!({"courses": [], "attendance": ">95", "cgpa": "9~10"}).to_string(),
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(header_text(&response, "access-control-allow-origin"), Some("*"));

    let body: ErrorBody = serde_json::from_value(body_json(response).await).expect("error");
    assert!(body.error.contains("length limit exceeded"), "{}", body.error);
}
