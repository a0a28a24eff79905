//! Data models for the tempcast application
//!
//! This module contains the core domain models organized by concern:
//! - City: known cities and their static geographic metadata
//! - Query: collected form input and the assembled model query
//! - Prediction: the three predicted temperature values

pub mod city;
pub mod prediction;
pub mod query;

// Re-export all public types for convenient access
pub use city::{City, CityGeo};
pub use prediction::PredictionResult;
pub use query::{Season, WeatherInput, WeatherQuery};
