/// Integration tests for the predict API, driving the in-process router.
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use http_body_util::BodyExt;
use std::path::Path;
use std::sync::Arc;
use tower::ServiceExt;

use premium_predictor::{
    config::{Config, ModelConfig, ServerConfig},
    handlers::AppState,
    model::LinearModel,
    server::create_router,
};

/// Artifact with distinct per-feature weights so tests can tell reordering
/// or mis-encoding apart from a correct run.
const MODEL_JSON: &str = r#"{
    "name": "MIPML",
    "version": "1",
    "intercept": 100.0,
    "coefficients": [2.0, 10.0, 3.0, 50.0, 1000.0, 5.0]
}"#;

fn test_app() -> axum::Router {
    let path = std::env::temp_dir().join(format!(
        "premium-predictor-test-model-{}.json",
        std::process::id()
    ));
    std::fs::write(&path, MODEL_JSON).unwrap();
    let model = LinearModel::load(Path::new(&path)).unwrap();
    let _ = std::fs::remove_file(&path);

    let config = Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            log_level: "info".to_string(),
        },
        model: ModelConfig {
            path: path.display().to_string(),
            currency_symbol: "$".to_string(),
        },
    };

    create_router(AppState {
        config: Arc::new(config),
        model: Arc::new(model),
    })
}

async fn post_predict(app: axum::Router, body: serde_json::Value) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/predict")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn test_predict_young_nonsmoker() {
    let body = serde_json::json!({
        "age": 25, "gender": "Female", "bmi": 22.0,
        "children": 0, "smoker": "No", "region": "SouthWest"
    });
    let (status, json) = post_predict(test_app(), body).await;

    assert_eq!(status, StatusCode::OK);
    // encoded [25, 0, 22.0, 0, 0, 1]:
    // 100 + 2*25 + 3*22 + 5*1 = 221
    assert_eq!(json["premium"].as_f64().unwrap(), 221.0);
    assert_eq!(json["formatted"], "$221.00");
    assert_eq!(json["profile"]["age"], 25);
    assert_eq!(json["profile"]["gender"], "Female");
    assert_eq!(json["profile"]["region"], "SouthWest");
}

#[tokio::test]
async fn test_predict_middle_aged_smoker() {
    let body = serde_json::json!({
        "age": 45, "gender": "Male", "bmi": 30.5,
        "children": 2, "smoker": "Yes", "region": "NorthEast"
    });
    let (status, json) = post_predict(test_app(), body).await;

    assert_eq!(status, StatusCode::OK);
    // encoded [45, 1, 30.5, 2, 1, 2]:
    // 100 + 90 + 10 + 91.5 + 100 + 1000 + 10 = 1401.5
    assert_eq!(json["premium"].as_f64().unwrap(), 1401.5);
    assert_eq!(json["formatted"], "$1401.50");
    assert_eq!(json["profile"]["smoker"], "Yes");
}

#[tokio::test]
async fn test_predict_is_deterministic() {
    let body = serde_json::json!({
        "age": 30, "gender": "Female", "bmi": 27.3,
        "children": 1, "smoker": "No", "region": "NorthWest"
    });
    let (_, first) = post_predict(test_app(), body.clone()).await;
    let (_, second) = post_predict(test_app(), body).await;

    assert_eq!(first["premium"], second["premium"]);
}

#[tokio::test]
async fn test_predict_region_case_insensitive() {
    let lower = serde_json::json!({
        "age": 30, "gender": "Female", "bmi": 27.3,
        "children": 1, "smoker": "No", "region": "southeast"
    });
    let display = serde_json::json!({
        "age": 30, "gender": "Female", "bmi": 27.3,
        "children": 1, "smoker": "No", "region": "SouthEast"
    });
    let (_, a) = post_predict(test_app(), lower).await;
    let (_, b) = post_predict(test_app(), display).await;

    assert_eq!(a["premium"], b["premium"]);
}

#[tokio::test]
async fn test_predict_unknown_region_is_rejected() {
    let body = serde_json::json!({
        "age": 30, "gender": "Female", "bmi": 27.3,
        "children": 1, "smoker": "No", "region": "MidWest"
    });
    let (status, json) = post_predict(test_app(), body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["type"], "unknown_region");
    assert!(json.get("premium").is_none());
}

#[tokio::test]
async fn test_predict_out_of_domain_age_is_rejected() {
    let body = serde_json::json!({
        "age": 17, "gender": "Male", "bmi": 27.3,
        "children": 1, "smoker": "No", "region": "SouthEast"
    });
    let (status, json) = post_predict(test_app(), body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["type"], "validation_error");
}

#[tokio::test]
async fn test_predict_boundary_values_accepted() {
    let body = serde_json::json!({
        "age": 80, "gender": "Male", "bmi": 55.0,
        "children": 5, "smoker": "Yes", "region": "NorthWest"
    });
    let (status, json) = post_predict(test_app(), body).await;

    assert_eq!(status, StatusCode::OK);
    let premium = json["premium"].as_f64().unwrap();
    assert!(premium.is_finite());
    // encoded [80, 1, 55.0, 5, 1, 3]:
    // 100 + 160 + 10 + 165 + 250 + 1000 + 15 = 1700
    assert_eq!(premium, 1700.0);
}

#[tokio::test]
async fn test_health_reports_model_identity() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["model"]["name"], "MIPML");
    assert_eq!(json["model"]["version"], "1");
}

#[tokio::test]
async fn test_form_page_served_at_root() {
    let response = test_app()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let page = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(page.contains("Predict Premium"));
    assert!(page.contains("SouthWest"));
}
