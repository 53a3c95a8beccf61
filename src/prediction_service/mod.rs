//! Client for the remote RUL prediction service.

pub mod api;

pub use api::{HttpPredictionService, PredictionError, PredictionResult};

use crate::features::BatteryFeatures;

/// The controller's view of the prediction backend.
///
/// Calls block; the controller invokes them from worker threads.
pub trait PredictionService: Send + Sync {
    /// Submit one feature set and return the estimate.
    fn predict(&self, features: &BatteryFeatures) -> Result<PredictionResult, PredictionError>;

    /// Touch the service once at startup. The outcome carries no meaning for
    /// the form and is only reported to logs.
    fn warm_up(&self) -> Result<(), PredictionError>;
}
