//! Predictive model abstraction and the artifact-backed implementation
//!
//! Everything downstream of startup depends only on the [`PredictiveModel`]
//! trait; the deserialized artifact is one implementation of it, test stubs
//! are another.

pub mod artifact;
pub mod fetch;

// Re-export commonly used types from submodules
pub use artifact::{ArtifactModel, LinearHead, RegressionBundle};
pub use fetch::ensure_artifact;

use crate::Result;
use crate::models::WeatherQuery;

/// An opaque predict-capable model
///
/// The only contract: one output row per input query, each row a sequence of
/// numeric values. For this application every row is expected to carry the
/// three predicted temperatures (tmin, tmax, tavg); enforcing that shape is
/// the caller's job, not the model's.
pub trait PredictiveModel: Send + Sync {
    /// Run the model over a batch of assembled queries
    fn predict(&self, batch: &[WeatherQuery]) -> Result<Vec<Vec<f64>>>;
}
