use super::EguiController;
use super::jobs::PredictionJob;
use crate::egui_app::state::{FormEffect, FormEvent};
use crate::features::FeatureKey;
use crate::prediction_service::{PredictionError, PredictionResult};

impl EguiController {
    /// Apply one keystroke-level edit. Non-numeric edits are dropped silently.
    pub fn input_changed(&mut self, key: FeatureKey, value: impl Into<String>) {
        self.dispatch(FormEvent::InputChanged {
            key,
            value: value.into(),
        });
    }

    /// Same as [`Self::input_changed`], addressing the field by its wire name.
    pub fn input_changed_by_name(&mut self, name: &str, value: impl Into<String>) {
        match name.parse::<FeatureKey>() {
            Ok(key) => self.input_changed(key, value),
            Err(err) => tracing::warn!("Ignoring input change: {err}"),
        }
    }

    /// Validate the draft and, if complete, start a prediction request.
    pub fn submit_prediction(&mut self) {
        if self.jobs.prediction_in_progress() {
            return;
        }
        self.dispatch(FormEvent::SubmitRequested);
    }

    pub fn is_prediction_in_progress(&self) -> bool {
        self.ui.form.is_loading()
    }

    pub(super) fn complete_prediction(&mut self, result: Result<PredictionResult, PredictionError>) {
        let event = match result {
            Ok(prediction) => {
                tracing::info!(
                    predicted_rul = prediction.predicted_rul,
                    "Prediction received"
                );
                FormEvent::ResponseReceived(prediction)
            }
            Err(err) => {
                tracing::warn!("Prediction failed: {err}");
                FormEvent::ResponseFailed(err)
            }
        };
        self.dispatch(event);
    }

    fn dispatch(&mut self, event: FormEvent) {
        if let Some(FormEffect::SendPrediction(features)) = self.ui.form.apply(event) {
            tracing::info!("Submitting prediction request");
            self.jobs.begin_prediction(PredictionJob { features });
        }
    }
}
