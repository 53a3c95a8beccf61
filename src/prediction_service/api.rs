//! HTTP implementation of the prediction service contract.

use serde::Deserialize;
use url::Url;

use super::PredictionService;
use crate::features::BatteryFeatures;
use crate::http_client;

const PREDICT_PATH: &str = "/predict";
const MAX_RESPONSE_BYTES: usize = 64 * 1024;

/// A successful estimate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PredictionResult {
    /// Remaining charge/discharge cycles.
    pub predicted_rul: f64,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PredictionError {
    /// The service answered with a non-success status.
    #[error("API error: {status_text}")]
    Status { code: u16, status_text: String },
    /// The service answered 2xx but reported a failure in the body.
    #[error("Service error: {0}")]
    Service(String),
    /// The request could not complete.
    #[error("{0}")]
    Transport(String),
    /// The body could not be read or decoded.
    #[error("{0}")]
    Json(String),
}

/// Talks to the service at a configured base address.
#[derive(Clone, Debug)]
pub struct HttpPredictionService {
    base_url: String,
}

impl HttpPredictionService {
    /// `base_url` is used as given, minus any trailing slash.
    pub fn new(base_url: &Url) -> Self {
        Self {
            base_url: base_url.as_str().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn predict_url(&self) -> String {
        format!("{}{PREDICT_PATH}", self.base_url)
    }
}

impl PredictionService for HttpPredictionService {
    fn predict(&self, features: &BatteryFeatures) -> Result<PredictionResult, PredictionError> {
        let url = self.predict_url();
        tracing::debug!(%url, "Posting prediction request");
        let request = http_client::agent()
            .post(&url)
            .set("Accept", "application/json")
            .set("Content-Type", "application/json");
        let response = match request.send_json(features) {
            Ok(response) => response,
            Err(ureq::Error::Status(code, response)) => {
                return Err(status_error(code, response.status_text()));
            }
            Err(ureq::Error::Transport(err)) => {
                return Err(PredictionError::Transport(err.to_string()));
            }
        };
        let code = response.status();
        if !(200..300).contains(&code) {
            return Err(status_error(code, response.status_text()));
        }
        let body = http_client::read_response_bytes(response, MAX_RESPONSE_BYTES)
            .map_err(|err| PredictionError::Json(err.to_string()))?;
        parse_prediction_response(&body)
    }

    fn warm_up(&self) -> Result<(), PredictionError> {
        match http_client::agent().get(&self.base_url).call() {
            Ok(_) => Ok(()),
            Err(ureq::Error::Status(code, response)) => {
                Err(status_error(code, response.status_text()))
            }
            Err(ureq::Error::Transport(err)) => Err(PredictionError::Transport(err.to_string())),
        }
    }
}

fn status_error(code: u16, status_text: &str) -> PredictionError {
    PredictionError::Status {
        code,
        status_text: status_text.to_string(),
    }
}

#[derive(Deserialize)]
struct PredictionResponseWire {
    predicted_rul: Option<f64>,
    error: Option<String>,
}

fn parse_prediction_response(body: &[u8]) -> Result<PredictionResult, PredictionError> {
    let parsed: PredictionResponseWire =
        serde_json::from_slice(body).map_err(|err| PredictionError::Json(err.to_string()))?;
    match (parsed.predicted_rul, parsed.error) {
        (Some(predicted_rul), _) => Ok(PredictionResult { predicted_rul }),
        (None, Some(message)) => Err(PredictionError::Service(message)),
        (None, None) => Err(PredictionError::Json(
            "Response is missing `predicted_rul`".to_string(),
        )),
    }
}
