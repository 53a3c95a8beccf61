//! Helpers to convert form state into egui-facing view structs.

use crate::egui_app::state::{PredictionFormState, RequestLifecycle};

/// Text shown in the result panel before anything has been predicted.
pub const RESULT_PLACEHOLDER: &str =
    "Submit data to see the predicted remaining useful life (in cycles).";

/// The single presentation chosen for the result area.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResultView {
    Loading,
    Prediction { cycles: String },
    Error { banner: String },
    Placeholder,
}

/// Project the form state into what the result area shows.
pub fn result_view(state: &PredictionFormState) -> ResultView {
    match &state.lifecycle {
        RequestLifecycle::Loading => ResultView::Loading,
        RequestLifecycle::Success(result) => ResultView::Prediction {
            cycles: format_cycles(result.predicted_rul),
        },
        RequestLifecycle::Error(message) => ResultView::Error {
            banner: format!("Error: {message}"),
        },
        RequestLifecycle::Idle => ResultView::Placeholder,
    }
}

/// Submit is available whenever no request is in flight.
pub fn submit_enabled(state: &PredictionFormState) -> bool {
    !state.is_loading()
}

/// Format a cycle count with `,` thousands separators and at most three
/// fractional digits, trailing zeros trimmed.
pub fn format_cycles(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let fixed = format!("{:.3}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (index, digit) in int_part.chars().enumerate() {
        if index > 0 && (int_part.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    let is_zero = grouped == "0" && frac_part.is_empty();
    let sign = if value.is_sign_negative() && !is_zero {
        "-"
    } else {
        ""
    };
    if frac_part.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{frac_part}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prediction_service::PredictionResult;

    #[test]
    fn formats_like_a_cycle_count() {
        assert_eq!(format_cycles(482.0), "482");
        assert_eq!(format_cycles(1234.5), "1,234.5");
        assert_eq!(format_cycles(1_234_567.891_2), "1,234,567.891");
        assert_eq!(format_cycles(999.9996), "1,000");
        assert_eq!(format_cycles(-1500.25), "-1,500.25");
        assert_eq!(format_cycles(-0.0001), "0");
        assert_eq!(format_cycles(0.0), "0");
    }

    #[test]
    fn one_presentation_per_lifecycle() {
        let mut state = PredictionFormState::default();
        assert_eq!(result_view(&state), ResultView::Placeholder);
        assert!(submit_enabled(&state));

        state.lifecycle = RequestLifecycle::Loading;
        assert_eq!(result_view(&state), ResultView::Loading);
        assert!(!submit_enabled(&state));

        state.lifecycle = RequestLifecycle::Success(PredictionResult {
            predicted_rul: 482.0,
        });
        assert_eq!(
            result_view(&state),
            ResultView::Prediction {
                cycles: "482".to_string()
            }
        );

        state.lifecycle = RequestLifecycle::Error("API error: Internal Server Error".to_string());
        assert_eq!(
            result_view(&state),
            ResultView::Error {
                banner: "Error: API error: Internal Server Error".to_string()
            }
        );
        assert!(submit_enabled(&state));
    }
}
