//! Shared state types for the egui UI.

mod prediction_form;

pub use prediction_form::*;

/// Top-level UI model consumed by the egui renderer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UiState {
    /// Draft inputs and the request lifecycle.
    pub form: PredictionFormState,
}
