//! Serialized regression bundle and the model built from it
//!
//! The artifact is a bincode-encoded [`RegressionBundle`]: one-hot
//! vocabularies for the categorical columns, standardization statistics for
//! the numeric columns, and one linear head per output. The bundle is
//! produced by an external training pipeline; this module only consumes it.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::Result;
use crate::error::TempcastError;
use crate::models::query::{NUMERIC_COLUMNS, WeatherQuery};
use crate::predictor::PredictiveModel;

/// Output columns produced by the trained heads, in head order
pub const OUTPUT_COLUMNS: [&str; 3] = ["tmin", "tmax", "tavg"];

/// One trained linear regression head
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearHead {
    /// Coefficients over the encoded feature vector
    pub weights: Vec<f64>,
    /// Bias term
    pub intercept: f64,
}

impl LinearHead {
    fn apply(&self, features: &[f64]) -> f64 {
        self.weights
            .iter()
            .zip(features)
            .map(|(w, x)| w * x)
            .sum::<f64>()
            + self.intercept
    }
}

/// The deserialized contents of a model artifact
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegressionBundle {
    /// One-hot vocabulary for the city column, in training order
    pub cities: Vec<String>,
    /// One-hot vocabulary for the season column, in training order
    pub seasons: Vec<String>,
    /// Standardization means for the numeric columns
    pub numeric_means: Vec<f64>,
    /// Standardization deviations for the numeric columns
    pub numeric_stds: Vec<f64>,
    /// One linear head per output column
    pub heads: Vec<LinearHead>,
}

impl RegressionBundle {
    /// Width of the encoded feature vector the heads consume
    #[must_use]
    pub fn feature_width(&self) -> usize {
        self.cities.len() + self.seasons.len() + self.numeric_means.len()
    }
}

/// A [`PredictiveModel`] backed by a deserialized [`RegressionBundle`]
///
/// Constructed once at startup and shared read-only for the life of the
/// process.
#[derive(Debug, Clone)]
pub struct ArtifactModel {
    bundle: RegressionBundle,
}

impl ArtifactModel {
    /// Build a model from a bundle, validating its internal dimensions
    pub fn from_bundle(bundle: RegressionBundle) -> Result<Self> {
        if bundle.cities.is_empty() || bundle.seasons.is_empty() {
            return Err(TempcastError::model_load(
                "artifact has an empty categorical vocabulary",
            ));
        }

        if bundle.numeric_means.len() != NUMERIC_COLUMNS.len()
            || bundle.numeric_stds.len() != NUMERIC_COLUMNS.len()
        {
            return Err(TempcastError::model_load(format!(
                "artifact standardizes {} numeric columns, expected {}",
                bundle.numeric_means.len(),
                NUMERIC_COLUMNS.len()
            )));
        }

        if bundle
            .numeric_stds
            .iter()
            .any(|s| !s.is_finite() || *s <= 0.0)
        {
            return Err(TempcastError::model_load(
                "artifact contains a non-positive standard deviation",
            ));
        }

        if bundle.heads.len() != OUTPUT_COLUMNS.len() {
            return Err(TempcastError::model_load(format!(
                "artifact has {} output heads, expected {}",
                bundle.heads.len(),
                OUTPUT_COLUMNS.len()
            )));
        }

        let width = bundle.feature_width();
        for (head, column) in bundle.heads.iter().zip(OUTPUT_COLUMNS) {
            if head.weights.len() != width {
                return Err(TempcastError::model_load(format!(
                    "{column} head has {} weights, expected {width}",
                    head.weights.len()
                )));
            }
        }

        Ok(Self { bundle })
    }

    /// Deserialize a model artifact from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        let bundle: RegressionBundle = bincode::deserialize(&bytes).map_err(|e| {
            TempcastError::model_load(format!(
                "failed to deserialize artifact {}: {e}",
                path.display()
            ))
        })?;

        let model = Self::from_bundle(bundle)?;
        info!(
            "Loaded model artifact from {} ({} bytes, {} features)",
            path.display(),
            bytes.len(),
            model.bundle.feature_width()
        );
        Ok(model)
    }

    /// Serialize a bundle to disk in the artifact format
    pub fn save(path: impl AsRef<Path>, bundle: &RegressionBundle) -> Result<()> {
        let bytes = bincode::serialize(bundle)
            .map_err(|e| TempcastError::model_load(format!("failed to serialize bundle: {e}")))?;
        std::fs::write(path.as_ref(), bytes)?;
        Ok(())
    }

    /// Encode a query as the feature vector the heads consume
    ///
    /// Layout: one-hot cities, one-hot seasons, standardized numerics.
    fn encode(&self, query: &WeatherQuery) -> Result<Vec<f64>> {
        let mut features = vec![0.0; self.bundle.feature_width()];

        let city_index = self
            .bundle
            .cities
            .iter()
            .position(|c| c == query.city.name())
            .ok_or_else(|| {
                TempcastError::model_invocation(format!(
                    "city '{}' is missing from the model vocabulary",
                    query.city.name()
                ))
            })?;
        features[city_index] = 1.0;

        let season_index = self
            .bundle
            .seasons
            .iter()
            .position(|s| s == query.season.name())
            .ok_or_else(|| {
                TempcastError::model_invocation(format!(
                    "season '{}' is missing from the model vocabulary",
                    query.season.name()
                ))
            })?;
        features[self.bundle.cities.len() + season_index] = 1.0;

        let numeric_offset = self.bundle.cities.len() + self.bundle.seasons.len();
        for (i, value) in query.numeric_features().iter().enumerate() {
            features[numeric_offset + i] =
                (value - self.bundle.numeric_means[i]) / self.bundle.numeric_stds[i];
        }

        Ok(features)
    }
}

impl PredictiveModel for ArtifactModel {
    fn predict(&self, batch: &[WeatherQuery]) -> Result<Vec<Vec<f64>>> {
        debug!("Running artifact model over {} query rows", batch.len());
        batch
            .iter()
            .map(|query| {
                let features = self.encode(query)?;
                Ok(self
                    .bundle
                    .heads
                    .iter()
                    .map(|head| head.apply(&features))
                    .collect())
            })
            .collect()
    }
}
