//! Prediction invocation service
//!
//! The single place that turns collected form input into a prediction:
//! validate and assemble the query, invoke the injected model, unpack the
//! one expected row of three values. Each invocation runs to completion
//! independently; the model is shared read-only and never reloaded.

use std::sync::Arc;

use tracing::{debug, info};

use crate::Result;
use crate::error::TempcastError;
use crate::models::{PredictionResult, WeatherInput, WeatherQuery};
use crate::predictor::PredictiveModel;

/// Service owning the invocation flow around a shared model
#[derive(Clone)]
pub struct PredictionService {
    model: Arc<dyn PredictiveModel>,
}

impl PredictionService {
    /// Create a service around an already-constructed model
    #[must_use]
    pub fn new(model: Arc<dyn PredictiveModel>) -> Self {
        Self { model }
    }

    /// Run one prediction for the given form input
    pub fn predict(&self, input: &WeatherInput) -> Result<PredictionResult> {
        let query = WeatherQuery::assemble(input)?;
        debug!(
            "Assembled query for {} / {} {}-{:02}-{:02}",
            query.city.name(),
            query.season.name(),
            query.year,
            query.month,
            query.day
        );

        let rows = self.model.predict(std::slice::from_ref(&query))?;

        if rows.len() != 1 {
            return Err(TempcastError::shape_mismatch(
                "1 row",
                format!("{} rows", rows.len()),
            ));
        }
        let row = &rows[0];
        if row.len() != 3 {
            return Err(TempcastError::shape_mismatch(
                "a row of 3 values",
                format!("a row of {} values", row.len()),
            ));
        }

        let result = PredictionResult {
            tmin: row[0],
            tmax: row[1],
            tavg: row[2],
        };
        info!(
            "Prediction complete: tmin={:.2} tmax={:.2} tavg={:.2}",
            result.tmin, result.tmax, result.tavg
        );
        Ok(result)
    }
}
