//! Standalone error analysis of a custom expression.
//!
//! Runs Euler and RK4 over one grid, asks the symbolic collaborator for a
//! closed form, and reports pointwise absolute errors when one exists.

use serde::Serialize;
use tracing::{debug, debug_span};

use odelab_core::{Problem, metrics};
use odelab_solvers::explicit::{Euler, Method, Rk4};

use crate::compare::{sample_reference, validate_inputs};
use crate::equation::parse;
use crate::{Config, Error, ErrorAnalysisRequest, MethodKind, Symbolic};

/// Whether a closed-form solution was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalyticStatus {
    Ok,
    Unavailable,
}

/// Pointwise absolute errors per method, `None` without a closed form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointwiseErrors {
    pub euler: Option<Vec<f64>>,
    pub rk4: Option<Vec<f64>>,
}

/// Descriptive information accompanying an [`ErrorAnalysis`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisMeta {
    pub analytic_status: AnalyticStatus,
    pub exact_solution: Option<String>,
    pub convergence_order_euler: u32,
    pub convergence_order_rk4: u32,
}

/// Euler and RK4 trajectories with their errors against a closed form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorAnalysis {
    pub grid: Vec<f64>,
    pub euler: Vec<f64>,
    pub rk4: Vec<f64>,
    /// The closed form sampled on the grid; non-finite samples are NaN.
    pub exact: Option<Vec<f64>>,
    pub errors: PointwiseErrors,
    pub meta: AnalysisMeta,
}

/// Analyzes `y' = f(t, y)` with both methods on a shared grid.
///
/// # Errors
///
/// Returns a client-class [`Error`] for invalid inputs or unparseable
/// expressions, and a server-class error if integration fails.
pub fn analyze_errors<S: Symbolic>(
    request: &ErrorAnalysisRequest,
    symbolic: &S,
    config: &Config,
) -> Result<ErrorAnalysis, Error> {
    let _span = debug_span!("analyze_errors", f = %request.f).entered();

    validate_inputs(request.t0, request.t_end, request.h, request.y0)?;

    let rhs = parse(symbolic, &request.f, ["t", "y"])?;
    let problem = Problem::new(&rhs, request.t0, request.y0, request.t_end, request.h)?;
    let grid = problem.grid(&config.grid())?;

    let euler = MethodKind::Euler.run(problem.rhs, &grid, problem.y0)?.trajectory;
    let rk4 = MethodKind::Rk4.run(problem.rhs, &grid, problem.y0)?.trajectory;

    let closed_form = symbolic.try_solve_closed_form(&rhs, problem.t0, problem.y0);
    debug!(found = closed_form.is_some(), "closed form lookup");

    let exact = closed_form
        .as_ref()
        .map(|solution| sample_reference(&grid, |t| solution.eval(t)));

    let errors = PointwiseErrors {
        euler: metrics::absolute_errors(euler.values(), exact.as_deref())?,
        rk4: metrics::absolute_errors(rk4.values(), exact.as_deref())?,
    };

    let meta = AnalysisMeta {
        analytic_status: if closed_form.is_some() {
            AnalyticStatus::Ok
        } else {
            AnalyticStatus::Unavailable
        },
        exact_solution: closed_form.map(|solution| solution.expression().to_owned()),
        convergence_order_euler: Euler::ORDER,
        convergence_order_rk4: Rk4::ORDER,
    };

    Ok(ErrorAnalysis {
        grid: grid.points().to_vec(),
        euler: euler.into_values(),
        rk4: rk4.into_values(),
        exact,
        errors,
        meta,
    })
}
