//! Integration tests for the tempcast web surface

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use tempcast::api::AppState;
use tempcast::models::WeatherQuery;
use tempcast::predictor::PredictiveModel;
use tempcast::service::PredictionService;
use tempcast::{TempcastError, web};

/// Model returning the same fixed row for every query
struct FixedModel(Vec<f64>);

impl PredictiveModel for FixedModel {
    fn predict(&self, batch: &[WeatherQuery]) -> tempcast::Result<Vec<Vec<f64>>> {
        Ok(batch.iter().map(|_| self.0.clone()).collect())
    }
}

/// Model failing every invocation
struct FailingModel;

impl PredictiveModel for FailingModel {
    fn predict(&self, _batch: &[WeatherQuery]) -> tempcast::Result<Vec<Vec<f64>>> {
        Err(TempcastError::model_invocation("bad input"))
    }
}

fn app_with(model: impl PredictiveModel + 'static) -> Router {
    web::app(AppState {
        service: Arc::new(PredictionService::new(Arc::new(model))),
    })
}

fn predict_request(body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/predict")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn valid_body() -> Value {
    json!({
        "city": "Islamabad",
        "season": "Summer",
        "year": 2025,
        "month": 6,
        "day": 12,
        "humidity": 50,
        "dew_point": 10,
        "pressure": 1010,
        "cloud_cover": 20,
        "wspd": 10
    })
}

async fn response_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_index_page_is_served() {
    let app = app_with(FixedModel(vec![5.0, 20.0, 12.5]));
    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let page = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(page.contains("Temperature Prediction"));
    assert!(page.contains("Predict Temperature"));
}

#[tokio::test]
async fn test_cities_endpoint_serves_registry() {
    let app = app_with(FixedModel(vec![5.0, 20.0, 12.5]));
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/cities")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let cities = response_json(response).await;
    let cities = cities.as_array().unwrap();
    assert_eq!(cities.len(), 6);

    let islamabad = cities
        .iter()
        .find(|c| c["name"] == "Islamabad")
        .expect("Islamabad missing from registry");
    assert_eq!(islamabad["latitude"], 33.6844);
    assert_eq!(islamabad["longitude"], 73.0479);
    assert_eq!(islamabad["elevation"], 540.0);
}

#[tokio::test]
async fn test_predict_success_renders_three_metrics() {
    let app = app_with(FixedModel(vec![5.0, 20.0, 12.5]));
    let response = app.oneshot(predict_request(&valid_body())).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let payload = response_json(response).await;
    assert_eq!(payload["status"], "ok");
    assert_eq!(payload["tmin_label"], "5.00 °C");
    assert_eq!(payload["tmax_label"], "20.00 °C");
    assert_eq!(payload["tavg_label"], "12.50 °C");
    assert_eq!(payload["tmin"], 5.0);
    assert_eq!(payload["tmax"], 20.0);
    assert_eq!(payload["tavg"], 12.5);
}

#[tokio::test]
async fn test_predict_failure_surfaces_single_message() {
    let app = app_with(FailingModel);
    let response = app.oneshot(predict_request(&valid_body())).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let payload = response_json(response).await;
    assert_eq!(payload["status"], "error");
    assert!(
        payload["message"]
            .as_str()
            .unwrap()
            .contains("bad input")
    );
    // No temperature metrics alongside the error.
    assert!(payload.get("tmin").is_none());
    assert!(payload.get("tmin_label").is_none());
}

#[tokio::test]
async fn test_predict_shape_mismatch_is_an_error() {
    let app = app_with(FixedModel(vec![5.0, 20.0]));
    let response = app.oneshot(predict_request(&valid_body())).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let payload = response_json(response).await;
    assert_eq!(payload["status"], "error");
    assert!(payload.get("tmin").is_none());
}

#[tokio::test]
async fn test_predict_rejects_out_of_range_input() {
    let app = app_with(FixedModel(vec![5.0, 20.0, 12.5]));
    let mut body = valid_body();
    body["humidity"] = json!(101);

    let response = app.oneshot(predict_request(&body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = response_json(response).await;
    assert_eq!(payload["status"], "error");
    assert!(payload["message"].as_str().unwrap().contains("humidity"));
}

#[tokio::test]
async fn test_predict_accepts_boundary_dates() {
    let cases = [
        ("year", json!(2000)),
        ("year", json!(2100)),
        ("month", json!(1)),
        ("month", json!(12)),
        ("day", json!(1)),
        ("day", json!(31)),
    ];

    for (field, value) in cases {
        let app = app_with(FixedModel(vec![5.0, 20.0, 12.5]));
        let mut body = valid_body();
        body[field] = value.clone();

        let response = app.oneshot(predict_request(&body)).await.unwrap();
        assert_eq!(
            response.status(),
            StatusCode::OK,
            "{field}={value} should be accepted"
        );
    }
}

#[tokio::test]
async fn test_predict_accepts_calendar_invalid_date() {
    // February 31st: fields are only range-checked.
    let app = app_with(FixedModel(vec![5.0, 20.0, 12.5]));
    let mut body = valid_body();
    body["month"] = json!(2);
    body["day"] = json!(31);

    let response = app.oneshot(predict_request(&body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_predict_rejects_unknown_city() {
    let app = app_with(FixedModel(vec![5.0, 20.0, 12.5]));
    let mut body = valid_body();
    body["city"] = json!("Atlantis");

    let response = app.oneshot(predict_request(&body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
