//! Owns the form state and bridges it to the prediction service.

mod jobs;
mod prediction_form;


use crate::egui_app::state::UiState;
use crate::prediction_service::PredictionService;
use jobs::ControllerJobs;
use std::sync::Arc;

/// Maintains app state and bridges core logic to the egui UI.
pub struct EguiController {
    pub ui: UiState,
    jobs: ControllerJobs,
}

impl EguiController {
    pub fn new(service: Arc<dyn PredictionService>) -> Self {
        Self {
            ui: UiState::default(),
            jobs: ControllerJobs::new(service),
        }
    }

    /// Send the one-off startup request to the service.
    pub fn start_warm_up(&self) {
        self.jobs.begin_warm_up();
    }

    /// Drain finished background jobs into the form state.
    pub fn poll_background_jobs(&mut self) {
        while let Ok(message) = self.jobs.try_recv_message() {
            self.handle_job_message(message);
        }
    }

    fn handle_job_message(&mut self, message: jobs::JobMessage) {
        match message {
            jobs::JobMessage::PredictionFinished(message) => {
                self.jobs.clear_prediction();
                self.complete_prediction(message.result);
            }
        }
    }
}
