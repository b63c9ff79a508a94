use std::collections::BTreeMap;

use serde::Serialize;

use odelab_core::{ErrorSummary, Point};

use crate::ProblemRequest;

/// Declared properties and measured cost of one method run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MethodMetadata {
    /// Declared global order of accuracy.
    pub order: u32,
    pub num_steps: usize,
    /// Wall-clock integration time in milliseconds.
    pub compute_time_ms: f64,
}

/// One method's trajectory and metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MethodResult {
    pub name: String,
    pub points: Vec<Point>,
    pub metadata: MethodMetadata,
}

/// The analytic solution sampled on the shared grid.
///
/// Points where the solution is not finite hold NaN (serialized as `null`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticSolution {
    pub expression: String,
    pub points: Vec<Point>,
}

/// Error metrics and the selected best method.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorMetrics {
    /// Each method's error against the analytic solution.
    pub vs_analytic: Option<BTreeMap<String, ErrorSummary>>,

    /// Error of the first method's trajectory against the second's.
    pub between_methods: Option<ErrorSummary>,

    pub best_method: Option<String>,
    pub best_method_reason: Option<String>,
}

/// The resolved inputs of a request, echoed back with the point count.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProblemSummary {
    pub equation_type: &'static str,
    pub equation_id: Option<String>,
    pub expression: Option<String>,
    pub x0: f64,
    pub y0: f64,
    pub x_end: f64,
    pub step: f64,
    pub num_points: usize,
}

impl ProblemSummary {
    pub(crate) fn new(problem: &ProblemRequest, num_points: usize) -> Self {
        Self {
            equation_type: problem.equation.type_name(),
            equation_id: problem.equation.id().map(str::to_owned),
            expression: problem.equation.expression().map(str::to_owned),
            x0: problem.initial_condition.x0,
            y0: problem.initial_condition.y0,
            x_end: problem.domain.x_end,
            step: problem.step,
            num_points,
        }
    }
}

/// The result of comparing several methods on one problem.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonResult {
    pub problem_summary: ProblemSummary,
    pub methods_results: Vec<MethodResult>,
    pub analytic_solution: Option<AnalyticSolution>,
    pub error_metrics: Option<ErrorMetrics>,
}

/// The result of solving one problem with a single method.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SingleMethodResult {
    pub method: String,
    pub points: Vec<Point>,
    pub metadata: MethodMetadata,
    pub problem_summary: ProblemSummary,
}

/// The analytic solution of a predefined equation on its grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticResult {
    pub solution: AnalyticSolution,
    pub problem_summary: ProblemSummary,
}
