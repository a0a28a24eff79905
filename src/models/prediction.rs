//! Predicted temperature values and display formatting

use serde::{Deserialize, Serialize};

/// The three predicted temperatures for one query, in Celsius
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Minimum temperature
    pub tmin: f64,
    /// Maximum temperature
    pub tmax: f64,
    /// Average temperature
    pub tavg: f64,
}

impl PredictionResult {
    /// Format the minimum temperature for display
    #[must_use]
    pub fn format_tmin(&self) -> String {
        format_celsius(self.tmin)
    }

    /// Format the maximum temperature for display
    #[must_use]
    pub fn format_tmax(&self) -> String {
        format_celsius(self.tmax)
    }

    /// Format the average temperature for display
    #[must_use]
    pub fn format_tavg(&self) -> String {
        format_celsius(self.tavg)
    }
}

/// Two decimal places with the Celsius unit, e.g. "12.50 °C"
fn format_celsius(value: f64) -> String {
    format!("{value:.2} °C")
}
