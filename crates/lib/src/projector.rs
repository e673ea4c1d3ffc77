//! # Display Projector
//!
//! Maps the state of a resolution cycle onto a language-agnostic view model.
//! The presentation layer picks the wording with [`StatusLine::text`].

use crate::types::{ConfidenceLabel, Locale, PredictionResult, SelectionTuple};
use serde::Serialize;

/// The line shown under the predicted number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusLine {
    HighAccuracy,
    ModerateAccuracy,
    /// The number is a local estimate, not a live prediction.
    SampleValue,
    ComingSoon,
    Computing,
}

impl StatusLine {
    pub fn text(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (StatusLine::HighAccuracy, Locale::Vi) => "Độ chính xác cao",
            (StatusLine::HighAccuracy, Locale::En) => "High accuracy",
            (StatusLine::ModerateAccuracy, Locale::Vi) => "Độ chính xác trung bình",
            (StatusLine::ModerateAccuracy, Locale::En) => "Moderate accuracy",
            (StatusLine::SampleValue, Locale::Vi) => {
                "Không thể kết nối API, hiển thị giá trị mẫu"
            }
            (StatusLine::SampleValue, Locale::En) => "API unavailable, showing sample value",
            (StatusLine::ComingSoon, Locale::Vi) => "Sắp ra mắt",
            (StatusLine::ComingSoon, Locale::En) => "Coming soon",
            (StatusLine::Computing, Locale::Vi) => "Đang tính toán...",
            (StatusLine::Computing, Locale::En) => "Computing...",
        }
    }
}

/// A rendered prediction.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DisplayValue {
    /// The yield with exactly two decimals, in tons per hectare.
    pub yield_text: String,
    pub status: StatusLine,
    /// `true` while a newer resolution is in flight.
    pub dimmed: bool,
}

impl DisplayValue {
    pub fn from_result(result: &PredictionResult) -> Self {
        let status = if result.is_fallback {
            StatusLine::SampleValue
        } else {
            match result.confidence {
                ConfidenceLabel::High => StatusLine::HighAccuracy,
                ConfidenceLabel::Moderate => StatusLine::ModerateAccuracy,
            }
        };
        Self {
            yield_text: format_yield(result.predicted_yield),
            status,
            dimmed: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ViewModel {
    /// Nothing resolved yet for an eligible selection.
    Idle,
    /// The selection is not covered by the live model.
    ComingSoon { crop: String, region: String, year: i32 },
    /// A resolution is in flight; the previous value, if any, stays visible.
    Computing { previous: Option<DisplayValue> },
    Ready(DisplayValue),
}

impl ViewModel {
    pub fn status(&self) -> StatusLine {
        match self {
            ViewModel::Idle | ViewModel::Computing { .. } => StatusLine::Computing,
            ViewModel::ComingSoon { .. } => StatusLine::ComingSoon,
            ViewModel::Ready(value) => value.status,
        }
    }

    /// The yield text currently on screen, if any.
    pub fn yield_text(&self) -> Option<&str> {
        match self {
            ViewModel::Ready(value) => Some(&value.yield_text),
            ViewModel::Computing {
                previous: Some(value),
            } => Some(&value.yield_text),
            _ => None,
        }
    }
}

/// Formats a yield with exactly two decimal places.
pub fn format_yield(value: f64) -> String {
    format!("{value:.2}")
}

/// Projects the current resolution state onto a view model.
pub fn project(
    selection: &SelectionTuple,
    eligible: bool,
    result: Option<&PredictionResult>,
    in_flight: bool,
) -> ViewModel {
    if !eligible {
        return ViewModel::ComingSoon {
            crop: selection.crop.clone(),
            region: selection.region.clone(),
            year: selection.year,
        };
    }

    let current = result.map(DisplayValue::from_result);
    if in_flight {
        return ViewModel::Computing {
            previous: current.map(|value| DisplayValue {
                dimmed: true,
                ..value
            }),
        };
    }

    match current {
        Some(value) => ViewModel::Ready(value),
        None => ViewModel::Idle,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn live(value: f64, confidence: ConfidenceLabel) -> PredictionResult {
        PredictionResult {
            predicted_yield: value,
            confidence,
            is_fallback: false,
        }
    }

    #[test]
    fn test_format_yield_two_decimals() {
        assert_eq!(format_yield(2.8), "2.80");
        assert_eq!(format_yield(3.0), "3.00");
        assert_eq!(format_yield(2.345_6), "2.35");
        assert_eq!(format_yield(1.3), "1.30");
    }

    #[test]
    fn test_ineligible_is_coming_soon() {
        let selection = SelectionTuple::new("rice", "an-giang", 2027, "storm");
        let result = live(2.5, ConfidenceLabel::High);
        let view = project(&selection, false, Some(&result), false);
        assert_eq!(view.status(), StatusLine::ComingSoon);
        assert_eq!(view.yield_text(), None);
    }

    #[test]
    fn test_ready_shows_confidence_label() {
        let selection = SelectionTuple::default();
        let view = project(
            &selection,
            true,
            Some(&live(2.8, ConfidenceLabel::Moderate)),
            false,
        );
        assert_eq!(
            view,
            ViewModel::Ready(DisplayValue {
                yield_text: "2.80".to_string(),
                status: StatusLine::ModerateAccuracy,
                dimmed: false,
            })
        );
    }

    #[test]
    fn test_fallback_shows_sample_notice_instead_of_confidence() {
        let selection = SelectionTuple::default();
        let result = PredictionResult {
            predicted_yield: 2.456,
            confidence: ConfidenceLabel::High,
            is_fallback: true,
        };
        let view = project(&selection, true, Some(&result), false);
        assert_eq!(view.status(), StatusLine::SampleValue);
        assert_eq!(view.yield_text(), Some("2.46"));
        assert_eq!(
            view.status().text(Locale::En),
            "API unavailable, showing sample value"
        );
    }

    #[test]
    fn test_computing_keeps_previous_value_dimmed() {
        let selection = SelectionTuple::default();
        let previous = live(2.61, ConfidenceLabel::High);
        let view = project(&selection, true, Some(&previous), true);
        match view {
            ViewModel::Computing {
                previous: Some(value),
            } => {
                assert_eq!(value.yield_text, "2.61");
                assert!(value.dimmed);
            }
            other => panic!("expected Computing with a previous value, got {other:?}"),
        }
        assert_eq!(
            project(&selection, true, None, true),
            ViewModel::Computing { previous: None }
        );
    }

    #[test]
    fn test_view_model_serializes_with_state_tag() {
        let view = ViewModel::Ready(DisplayValue {
            yield_text: "2.80".to_string(),
            status: StatusLine::HighAccuracy,
            dimmed: false,
        });
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["state"], "ready");
        assert_eq!(json["yield_text"], "2.80");
        assert_eq!(json["status"], "high_accuracy");
    }
}
