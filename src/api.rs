//! JSON API for the prediction form
//!
//! One endpoint runs a prediction, one exposes the static city registry the
//! form's selectbox is built from. Handlers translate service errors into a
//! single user-visible message; the underlying error text is preserved.

use std::sync::Arc;

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::TempcastError;
use crate::models::{City, WeatherInput};
use crate::service::PredictionService;

/// Shared application state injected into the handlers
#[derive(Clone)]
pub struct AppState {
    /// The prediction service, holding the one model loaded at startup
    pub service: Arc<PredictionService>,
}

/// City registry entry as served to clients
#[derive(Serialize, Deserialize)]
pub struct ApiCity {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub elevation: f64,
}

/// Successful prediction response
#[derive(Serialize, Deserialize)]
pub struct ApiPrediction {
    /// Always "ok"
    pub status: String,
    pub tmin: f64,
    pub tmax: f64,
    pub tavg: f64,
    /// Display strings rounded to two decimals, e.g. "5.00 °C"
    pub tmin_label: String,
    pub tmax_label: String,
    pub tavg_label: String,
}

/// Error response carrying the single user-visible message
#[derive(Serialize, Deserialize)]
pub struct ApiErrorMessage {
    /// Always "error"
    pub status: String,
    pub message: String,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/cities", get(get_cities))
        .route("/predict", post(post_predict))
        .with_state(state)
}

async fn get_cities() -> Json<Vec<ApiCity>> {
    let cities = City::ALL
        .iter()
        .map(|city| {
            let geo = city.geo();
            ApiCity {
                name: city.name().to_string(),
                latitude: geo.latitude,
                longitude: geo.longitude,
                elevation: geo.elevation,
            }
        })
        .collect();
    Json(cities)
}

async fn post_predict(
    State(state): State<AppState>,
    Json(input): Json<WeatherInput>,
) -> Result<Json<ApiPrediction>, (StatusCode, Json<ApiErrorMessage>)> {
    match state.service.predict(&input) {
        Ok(result) => Ok(Json(ApiPrediction {
            status: "ok".to_string(),
            tmin: result.tmin,
            tmax: result.tmax,
            tavg: result.tavg,
            tmin_label: result.format_tmin(),
            tmax_label: result.format_tmax(),
            tavg_label: result.format_tavg(),
        })),
        Err(e) => {
            warn!("Prediction request failed: {e}");
            let status = match &e {
                TempcastError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            };
            Err((
                status,
                Json(ApiErrorMessage {
                    status: "error".to_string(),
                    message: e.user_message(),
                }),
            ))
        }
    }
}
