use super::*;
use axum::{http::StatusCode, routing::post, Json, Router};
use serde_json::{json, Value};
use std::sync::Arc;
use tokio::{
    net::TcpListener,
    sync::{oneshot, Mutex},
};

async fn spawn_server(app: Router) -> String {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    format!("http://{addr}")
}

fn client(server_url: &str) -> HttpPredictionClient {
    HttpPredictionClient::new(server_url, Duration::from_secs(5)).expect("client")
}

#[test]
fn predict_url_keeps_base_path() {
    assert_eq!(
        predict_url("http://127.0.0.1:5000").expect("url").as_str(),
        "http://127.0.0.1:5000/predict"
    );
    assert_eq!(
        predict_url("https://example.test/api").expect("url").as_str(),
        "https://example.test/api/predict"
    );
    assert!(matches!(
        predict_url("not a url"),
        Err(SubmitError::InvalidUrl { .. })
    ));
}

#[tokio::test]
async fn posts_json_body_and_parses_result() {
    let (tx, rx) = oneshot::channel::<(Option<String>, Value)>();
    let tx = Arc::new(Mutex::new(Some(tx)));
    let app = Router::new().route(
        "/predict",
        post(move |headers: axum::http::HeaderMap, Json(body): Json<Value>| {
            let tx = tx.clone();
            async move {
                let content_type = headers
                    .get("content-type")
                    .and_then(|value| value.to_str().ok())
                    .map(str::to_string);
                if let Some(tx) = tx.lock().await.take() {
                    let _ = tx.send((content_type, body));
                }
                Json(json!({
                    "predictedGrade": "A",
                    "performanceCategory": "High",
                    "riskLevel": "Low",
                    "recommendations": ["Keep it up"],
                    "predictedGradeValue": 84.0
                }))
            }
        }),
    );
    let server_url = spawn_server(app).await;

    let result = client(&server_url)
        .predict(&StudentSubmission::default())
        .await
        .expect("prediction");
    assert_eq!(result.predicted_grade, "A");
    assert_eq!(result.recommendations, vec!["Keep it up".to_string()]);
    assert_eq!(result.predicted_grade_value, Some(84.0));

    let (content_type, body) = rx.await.expect("request seen");
    assert_eq!(content_type.as_deref(), Some("application/json"));
    assert_eq!(
        body,
        json!({"courses":[],"attendance":"","cgpa":"","internship":"","certificates":[]})
    );
}

#[tokio::test]
async fn error_status_uses_body_error_field() {
    let app = Router::new().route(
        "/predict",
        post(|| async {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": "model unavailable"})),
            )
        }),
    );
    let server_url = spawn_server(app).await;

    let err = client(&server_url)
        .predict(&StudentSubmission::default())
        .await
        .expect_err("must fail");
    assert_eq!(err.status(), Some(500));
    assert_eq!(err.to_string(), "model unavailable");
}

#[tokio::test]
async fn error_status_without_json_body_reports_status() {
    let app = Router::new().route(
        "/predict",
        post(|| async { (StatusCode::BAD_GATEWAY, "upstream down") }),
    );
    let server_url = spawn_server(app).await;

    let err = client(&server_url)
        .predict(&StudentSubmission::default())
        .await
        .expect_err("must fail");
    assert_eq!(err.to_string(), "Network response was not ok: 502");
}

#[tokio::test]
async fn incomplete_success_body_is_rejected() {
    let app = Router::new().route(
        "/predict",
        post(|| async {
            Json(json!({
                "predictedGrade": "A",
                "performanceCategory": "High",
                "recommendations": []
            }))
        }),
    );
    let server_url = spawn_server(app).await;

    let err = client(&server_url)
        .predict(&StudentSubmission::default())
        .await
        .expect_err("must fail");
    assert!(matches!(err, SubmitError::MalformedResponse(_)));
}

#[tokio::test]
async fn connection_refused_is_a_transport_error() {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let err = client(&format!("http://{addr}"))
        .predict(&StudentSubmission::default())
        .await
        .expect_err("must fail");
    assert!(matches!(err, SubmitError::Transport(_)));
    assert!(err
        .to_string()
        .starts_with("failed to reach prediction service"));
}
