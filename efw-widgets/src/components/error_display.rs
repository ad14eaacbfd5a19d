//! Error box for a roster that failed to load.

use dioxus::prelude::*;
use efw_core::ForecastError;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
    /// What to fix, shown under the message
    #[props(default)]
    pub hint: Option<String>,
}

#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            class: "meter_error",
            style: "padding: 12px 16px; margin: 8px 0; background: #FFEBEE; color: #C62828; border: 1px solid #EF9A9A;",
            strong { "Swing meter unavailable: " }
            "{props.message}"
            if let Some(hint) = &props.hint {
                p {
                    class: "meter_error_hint",
                    style: "margin: 6px 0 0; color: #555; font-size: 0.9em;",
                    "{hint}"
                }
            }
        }
    }
}

/// Suggest a fix for a roster load failure.
///
/// `cause` is the typed error behind the failure, when there is one; CSV
/// framing errors have none.
pub fn roster_error_hint(cause: Option<&ForecastError>) -> String {
    match cause {
        Some(ForecastError::InvalidStateRow { line, .. }) => {
            format!("Fix line {line} of the state roster and reload.")
        }
        Some(_) => "Check the forecast data and reload.".to_string(),
        None => "The state roster must be a CSV with the header ID,CODE,NAME,EVS,MARGIN.".to_string(),
    }
}

/// Hint for a roster with a header but no states.
pub const EMPTY_ROSTER_HINT: &str = "Add at least one state row to the roster.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hint_points_at_bad_line() {
        let err = ForecastError::InvalidStateRow { line: 7, reason: "bad margin".to_string() };
        assert_eq!(
            roster_error_hint(Some(&err)),
            "Fix line 7 of the state roster and reload."
        );
    }

    #[test]
    fn test_hint_without_typed_cause_names_header() {
        assert!(roster_error_hint(None).contains("ID,CODE,NAME,EVS,MARGIN"));
        let err = ForecastError::InvalidConfig("slider_min".to_string());
        assert_eq!(roster_error_hint(Some(&err)), "Check the forecast data and reload.");
    }
}
