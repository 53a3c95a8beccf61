use crate::features::BatteryFeatures;
use crate::prediction_service::{PredictionError, PredictionResult, PredictionService};
use std::{
    panic::{self, AssertUnwindSafe},
    sync::{
        Arc,
        mpsc::{self, Receiver, Sender},
    },
    thread,
};

type TryRecvError = mpsc::TryRecvError;

pub(crate) enum JobMessage {
    PredictionFinished(PredictionJobResult),
}

#[derive(Debug)]
pub(crate) struct PredictionJob {
    pub(crate) features: BatteryFeatures,
}

#[derive(Debug)]
pub(crate) struct PredictionJobResult {
    pub(crate) result: Result<PredictionResult, PredictionError>,
}

/// Runs service calls off the UI thread and hands results back as messages.
pub(crate) struct ControllerJobs {
    service: Arc<dyn PredictionService>,
    message_tx: Sender<JobMessage>,
    message_rx: Receiver<JobMessage>,
    prediction_in_progress: bool,
}

impl ControllerJobs {
    pub(crate) fn new(service: Arc<dyn PredictionService>) -> Self {
        let (message_tx, message_rx) = mpsc::channel();
        Self {
            service,
            message_tx,
            message_rx,
            prediction_in_progress: false,
        }
    }

    pub(crate) fn prediction_in_progress(&self) -> bool {
        self.prediction_in_progress
    }

    pub(crate) fn begin_prediction(&mut self, job: PredictionJob) {
        if self.prediction_in_progress {
            return;
        }
        self.prediction_in_progress = true;
        let service = Arc::clone(&self.service);
        let tx = self.message_tx.clone();
        thread::spawn(move || {
            let result = panic::catch_unwind(AssertUnwindSafe(|| service.predict(&job.features)))
                .unwrap_or_else(|payload| {
                    let reason = panic_reason(&*payload);
                    tracing::error!("Prediction worker panicked: {reason}");
                    Err(PredictionError::Transport(format!(
                        "Prediction request aborted: {reason}"
                    )))
                });
            let _ = tx.send(JobMessage::PredictionFinished(PredictionJobResult { result }));
        });
    }

    pub(crate) fn clear_prediction(&mut self) {
        self.prediction_in_progress = false;
    }

    /// Fire the startup request. Nothing is reported back.
    pub(crate) fn begin_warm_up(&self) {
        let service = Arc::clone(&self.service);
        thread::spawn(move || match service.warm_up() {
            Ok(()) => tracing::debug!("Prediction service warm-up succeeded"),
            Err(err) => tracing::debug!("Prediction service warm-up failed: {err}"),
        });
    }

    pub(crate) fn try_recv_message(&self) -> Result<JobMessage, TryRecvError> {
        self.message_rx.try_recv()
    }

    #[cfg(test)]
    pub(crate) fn recv_message_timeout(
        &self,
        timeout: std::time::Duration,
    ) -> Result<JobMessage, mpsc::RecvTimeoutError> {
        self.message_rx.recv_timeout(timeout)
    }
}

fn panic_reason(payload: &(dyn std::any::Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("unknown panic")
}
