use std::sync::LazyLock;

use regex::Regex;

use crate::features::{BatteryFeatures, FeatureKey};
use crate::prediction_service::{PredictionError, PredictionResult};

/// Message shown when a submit finds an empty field.
pub const MISSING_FIELDS_MESSAGE: &str = "Please fill in all input fields.";

static PARTIAL_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^-?[0-9]*\.?[0-9]*$").expect("partial number pattern is valid")
});

/// True for values a user may have typed on the way to a signed decimal,
/// including `""`, `"-"`, `"."` and `"3."`.
pub fn is_partial_number(value: &str) -> bool {
    value.is_empty() || PARTIAL_NUMBER.is_match(value)
}

/// Where the current submission stands.
///
/// A prediction and an error can never be held at the same time.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum RequestLifecycle {
    #[default]
    Idle,
    Loading,
    Success(PredictionResult),
    Error(String),
}

/// Inputs to [`PredictionFormState::apply`].
#[derive(Clone, Debug, PartialEq)]
pub enum FormEvent {
    InputChanged { key: FeatureKey, value: String },
    SubmitRequested,
    ResponseReceived(PredictionResult),
    ResponseFailed(PredictionError),
}

/// Work the caller must perform after a transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormEffect {
    /// Post these values to the prediction service.
    SendPrediction(BatteryFeatures),
}

/// Draft values plus the request lifecycle for one form session.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PredictionFormState {
    pub draft: BatteryFeatures,
    pub lifecycle: RequestLifecycle,
}

impl PredictionFormState {
    pub fn is_loading(&self) -> bool {
        matches!(self.lifecycle, RequestLifecycle::Loading)
    }

    pub fn prediction(&self) -> Option<&PredictionResult> {
        match &self.lifecycle {
            RequestLifecycle::Success(result) => Some(result),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.lifecycle {
            RequestLifecycle::Error(message) => Some(message),
            _ => None,
        }
    }

    /// Advance the machine by one event.
    pub fn apply(&mut self, event: FormEvent) -> Option<FormEffect> {
        match event {
            FormEvent::InputChanged { key, value } => {
                if is_partial_number(&value) {
                    *self.draft.get_mut(key) = value;
                }
                None
            }
            FormEvent::SubmitRequested => self.submit(),
            FormEvent::ResponseReceived(result) => {
                if self.is_loading() {
                    self.lifecycle = RequestLifecycle::Success(result);
                } else {
                    tracing::warn!("Dropping prediction that arrived outside a request");
                }
                None
            }
            FormEvent::ResponseFailed(err) => {
                if self.is_loading() {
                    self.lifecycle =
                        RequestLifecycle::Error(format!("Failed to fetch prediction. {err}"));
                } else {
                    tracing::warn!("Dropping failure that arrived outside a request: {err}");
                }
                None
            }
        }
    }

    fn submit(&mut self) -> Option<FormEffect> {
        if self.is_loading() {
            return None;
        }
        let missing = self.draft.missing();
        if !missing.is_empty() {
            tracing::debug!(?missing, "Submit blocked by empty fields");
            self.lifecycle = RequestLifecycle::Error(MISSING_FIELDS_MESSAGE.to_string());
            return None;
        }
        self.lifecycle = RequestLifecycle::Loading;
        Some(FormEffect::SendPrediction(self.draft.clone()))
    }
}
