use serde::{Deserialize, Serialize};

use crate::Equation;

/// Initial condition `y(x0) = y0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InitialCondition {
    pub x0: f64,
    pub y0: f64,
}

/// End of the integration domain.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Domain {
    pub x_end: f64,
}

/// An initial-value problem as received at the request boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProblemRequest {
    pub equation: Equation,
    pub initial_condition: InitialCondition,
    pub domain: Domain,
    pub step: f64,
}

/// Which comparisons to perform after integrating.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComparisonMode {
    /// Integrate only; no error metrics.
    #[default]
    #[serde(rename = "solo_numeric")]
    NumericOnly,

    /// Compare every method against the analytic solution.
    ///
    /// Only valid for predefined equations.
    #[serde(rename = "contra_analitica")]
    AgainstAnalytic,

    /// Compare the first two methods with each other, and against the
    /// analytic solution when one exists.
    #[serde(rename = "entre_metodos")]
    BetweenMethods,
}

impl ComparisonMode {
    /// Returns `true` if this mode uses an analytic reference when available.
    #[must_use]
    pub fn wants_reference(self) -> bool {
        matches!(self, Self::AgainstAnalytic | Self::BetweenMethods)
    }
}

/// A request to solve one problem with several methods and compare them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompareRequest {
    #[serde(flatten)]
    pub problem: ProblemRequest,

    /// Method names in request order, e.g. `["Euler", "RK4"]`.
    pub methods: Vec<String>,

    #[serde(default)]
    pub comparison_mode: ComparisonMode,
}

/// A request for a standalone error analysis of a custom expression `f(t, y)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorAnalysisRequest {
    /// The right-hand side, in the variables `t` and `y`.
    pub f: String,
    pub t0: f64,
    pub y0: f64,
    #[serde(rename = "T")]
    pub t_end: f64,
    pub h: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_flat_compare_requests() {
        let request: CompareRequest = serde_json::from_str(
            r#"{
                "equation": {"type": "predefined", "id": "exp_growth", "params": {"lambda": -2.0}},
                "initial_condition": {"x0": 0.0, "y0": 1.0},
                "domain": {"x_end": 5.0},
                "step": 0.1,
                "methods": ["Euler", "RK4"],
                "comparison_mode": "contra_analitica"
            }"#,
        )
        .unwrap();

        assert_eq!(request.comparison_mode, ComparisonMode::AgainstAnalytic);
        assert_eq!(request.methods, vec!["Euler", "RK4"]);
        assert_eq!(request.problem.domain.x_end, 5.0);
        assert_eq!(request.problem.equation.id(), Some("exp_growth"));
    }

    #[test]
    fn comparison_mode_defaults_to_numeric_only() {
        let request: CompareRequest = serde_json::from_str(
            r#"{
                "equation": {"type": "custom", "expression": "x*y - 2*x"},
                "initial_condition": {"x0": 0.0, "y0": 1.0},
                "domain": {"x_end": 3.0},
                "step": 0.1,
                "methods": ["RK4"]
            }"#,
        )
        .unwrap();

        assert_eq!(request.comparison_mode, ComparisonMode::NumericOnly);
        assert!(!request.comparison_mode.wants_reference());
    }

    #[test]
    fn error_analysis_uses_capital_t() {
        let request: ErrorAnalysisRequest =
            serde_json::from_str(r#"{"f": "-2*y", "t0": 0, "y0": 1, "T": 1, "h": 0.1}"#).unwrap();

        assert_eq!(request.t_end, 1.0);
    }
}
