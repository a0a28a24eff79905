//! `tempcast` - temperature prediction backed by a pre-trained regression artifact
//!
//! This library provides the core functionality for collecting weather
//! parameters, assembling model queries, and invoking the predictive model
//! that produces minimum, maximum, and average temperature estimates.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod predictor;
pub mod service;
pub mod web;

// Re-export core types for public API
pub use config::TempcastConfig;
pub use error::TempcastError;
pub use models::{City, CityGeo, PredictionResult, Season, WeatherInput, WeatherQuery};
pub use predictor::{ArtifactModel, PredictiveModel, RegressionBundle, ensure_artifact};
pub use service::PredictionService;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, TempcastError>;
