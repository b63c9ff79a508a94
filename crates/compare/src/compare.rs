//! The comparison orchestrator.
//!
//! A request runs through these stages strictly in order, and none is
//! retried:
//!
//! 1. Validate the domain, step, initial value and method names.
//! 2. Reject analytic comparisons of custom equations.
//! 3. Acquire `f` (and the exact solution, for predefined equations).
//! 4. Build one grid shared by every method.
//! 5. Integrate each method in request order, timing each run.
//! 6. Sample the analytic reference and compute per-method errors.
//! 7. Compare the first two methods with each other.
//! 8. Select the best method and assemble the result.

use std::collections::BTreeMap;

use tracing::{debug, debug_span, warn};

use odelab_core::{ErrorSummary, TimeGrid, Trajectory, metrics};

use crate::equation::{Acquired, acquire};
use crate::method::Run;
use crate::{
    AnalyticResult, AnalyticSolution, ComparisonMode, ComparisonResult, CompareRequest, Config,
    Equation, Error, ErrorMetrics, MethodKind, MethodResult, PredefinedEquation, ProblemRequest,
    ProblemSummary, SingleMethodResult, Symbolic,
};

const REFERENCE_REASON: &str = "has the lowest RMSE against the analytic solution.";
const ORDER_REASON: &str =
    "RK4 is fourth order and usually more accurate than Euler for the same step h.";
const FIRST_REASON: &str = "no analytic reference is available; defaulting to the first method.";

/// Solves one problem with every requested method and compares the results.
///
/// # Errors
///
/// Returns a client-class [`Error`] for invalid input (domain, step, method
/// names, equation, comparison mode, grid size, parse failures) before any
/// integration runs, and a server-class error if integration itself fails.
pub fn compare<S: Symbolic>(
    request: &CompareRequest,
    symbolic: &S,
    config: &Config,
) -> Result<ComparisonResult, Error> {
    let problem = &request.problem;
    let _span = debug_span!(
        "compare",
        equation = problem.equation.type_name(),
        mode = ?request.comparison_mode
    )
    .entered();

    validate(problem)?;
    let methods = parse_methods(&request.methods)?;

    if request.comparison_mode == ComparisonMode::AgainstAnalytic
        && matches!(problem.equation, Equation::Custom { .. })
    {
        return Err(Error::UnsupportedComparison {
            reason: "analytic comparison is only supported for predefined equations",
        });
    }

    let InitialValue { x0, y0 } = InitialValue::of(problem);
    let Acquired { rhs, closed_form } = acquire(&problem.equation, x0, y0, symbolic)?;

    let grid = TimeGrid::build(x0, problem.domain.x_end, problem.step, &config.grid())?;
    debug!(points = grid.len(), "grid built");

    let mut runs = Vec::with_capacity(methods.len());
    for &kind in &methods {
        let run = kind.run(&rhs, &grid, y0)?;
        debug!(
            method = kind.name(),
            ms = run.metadata.compute_time_ms,
            "method integrated"
        );
        runs.push((kind, run));
    }

    let reference = closed_form
        .filter(|_| request.comparison_mode.wants_reference())
        .map(|solution| {
            let values = sample_reference(&grid, |x| solution.eval(x));
            debug!(
                undefined = values.iter().filter(|y| y.is_nan()).count(),
                "reference sampled"
            );
            (solution.expression().to_owned(), values)
        });

    let error_metrics = match request.comparison_mode {
        ComparisonMode::NumericOnly => None,
        _ => assess(&runs, reference.as_ref().map(|(_, values)| values.as_slice()))?,
    };

    let analytic_solution = reference.map(|(expression, values)| AnalyticSolution {
        expression,
        points: Trajectory::from(values).points(&grid),
    });

    let methods_results = runs
        .into_iter()
        .map(|(kind, Run { trajectory, metadata })| MethodResult {
            name: kind.name().to_owned(),
            points: trajectory.points(&grid),
            metadata,
        })
        .collect();

    Ok(ComparisonResult {
        problem_summary: ProblemSummary::new(problem, grid.len()),
        methods_results,
        analytic_solution,
        error_metrics,
    })
}

/// Solves one problem with a single named method.
///
/// # Errors
///
/// Returns an [`Error`] under the same conditions as [`compare`].
pub fn solve_single<S: Symbolic>(
    problem: &ProblemRequest,
    method: &str,
    symbolic: &S,
    config: &Config,
) -> Result<SingleMethodResult, Error> {
    let _span = debug_span!("solve_single", method).entered();

    validate(problem)?;
    let kind: MethodKind = method.parse()?;

    let InitialValue { x0, y0 } = InitialValue::of(problem);
    let Acquired { rhs, .. } = acquire(&problem.equation, x0, y0, symbolic)?;

    let grid = TimeGrid::build(x0, problem.domain.x_end, problem.step, &config.grid())?;
    let Run {
        trajectory,
        metadata,
    } = kind.run(&rhs, &grid, y0)?;
    debug!(points = grid.len(), ms = metadata.compute_time_ms, "method integrated");

    Ok(SingleMethodResult {
        method: kind.name().to_owned(),
        points: trajectory.points(&grid),
        metadata,
        problem_summary: ProblemSummary::new(problem, grid.len()),
    })
}

/// Samples the exact solution of a predefined equation on its grid.
///
/// # Errors
///
/// Returns [`Error::UnsupportedComparison`] for custom equations, and the
/// validation errors of [`compare`] otherwise.
pub fn analytic_solution(
    problem: &ProblemRequest,
    config: &Config,
) -> Result<AnalyticResult, Error> {
    validate(problem)?;

    let Equation::Predefined { id, params } = &problem.equation else {
        return Err(Error::UnsupportedComparison {
            reason: "analytic solutions are only available for predefined equations",
        });
    };
    let equation = PredefinedEquation::from_id(id, params)?;

    let InitialValue { x0, y0 } = InitialValue::of(problem);
    let grid = TimeGrid::build(x0, problem.domain.x_end, problem.step, &config.grid())?;
    let solution = equation.closed_form(x0, y0);
    let values = sample_reference(&grid, |x| solution.eval(x));

    Ok(AnalyticResult {
        solution: AnalyticSolution {
            expression: solution.expression().to_owned(),
            points: Trajectory::from(values).points(&grid),
        },
        problem_summary: ProblemSummary::new(problem, grid.len()),
    })
}

struct InitialValue {
    x0: f64,
    y0: f64,
}

impl InitialValue {
    fn of(problem: &ProblemRequest) -> Self {
        Self {
            x0: problem.initial_condition.x0,
            y0: problem.initial_condition.y0,
        }
    }
}

fn validate(problem: &ProblemRequest) -> Result<(), Error> {
    let InitialValue { x0, y0 } = InitialValue::of(problem);
    validate_inputs(x0, problem.domain.x_end, problem.step, y0)
}

/// Checks the inputs that do not depend on the equation.
///
/// The domain and step go through [`TimeGrid::validate`], the same check
/// every grid is built with.
pub(crate) fn validate_inputs(x0: f64, x_end: f64, step: f64, y0: f64) -> Result<(), Error> {
    TimeGrid::validate(x0, x_end, step)?;
    if !y0.is_finite() {
        return Err(Error::InvalidInitialValue { y0 });
    }
    Ok(())
}

fn parse_methods(names: &[String]) -> Result<Vec<MethodKind>, Error> {
    if names.is_empty() {
        return Err(Error::NoMethods);
    }
    names.iter().map(|name| name.parse()).collect()
}

/// Samples `solution` on the grid, mapping non-finite values to NaN.
pub(crate) fn sample_reference<F>(grid: &TimeGrid, solution: F) -> Vec<f64>
where
    F: Fn(f64) -> f64,
{
    grid.sample(|x| {
        let y = solution(x);
        if y.is_finite() { y } else { f64::NAN }
    })
}

/// Computes error metrics and picks the best method.
///
/// Returns `None` when there is nothing to compare: no reference and fewer
/// than two methods.
fn assess(
    runs: &[(MethodKind, Run)],
    reference: Option<&[f64]>,
) -> Result<Option<ErrorMetrics>, Error> {
    if reference.is_none() && runs.len() < 2 {
        return Ok(None);
    }

    let mut vs_analytic = reference.map(|_| BTreeMap::new());
    let mut ranked = Vec::with_capacity(runs.len());

    if let Some(reference) = reference {
        for (kind, run) in runs {
            let summary = metrics::summary(run.trajectory.values(), Some(reference))?
                .unwrap_or(ErrorSummary::UNDEFINED);
            if summary.rmse.is_none() {
                warn!(method = kind.name(), "RMSE against the analytic solution is undefined");
            }
            ranked.push((*kind, summary.rmse));
            if let Some(map) = vs_analytic.as_mut() {
                map.insert(kind.name().to_owned(), summary);
            }
        }
    }

    let between_methods = match runs {
        [(_, first), (_, second), ..] => {
            metrics::summary(first.trajectory.values(), Some(second.trajectory.values()))?
        }
        _ => None,
    };

    let (best, reason) = select_best(runs, &ranked);
    debug!(best = ?best.map(MethodKind::name), "best method selected");

    Ok(Some(ErrorMetrics {
        vs_analytic,
        between_methods,
        best_method: best.map(|kind| kind.name().to_owned()),
        best_method_reason: reason,
    }))
}

/// Picks the best method.
///
/// With a reference, the lowest defined RMSE wins; ties go to the earlier
/// method in request order. Without a usable reference, RK4 wins if it was
/// requested, otherwise the first method.
fn select_best(
    runs: &[(MethodKind, Run)],
    ranked: &[(MethodKind, Option<f64>)],
) -> (Option<MethodKind>, Option<String>) {
    let mut best: Option<(MethodKind, f64)> = None;
    for &(kind, rmse) in ranked {
        let Some(rmse) = rmse else { continue };
        if best.is_none_or(|(_, best_rmse)| rmse < best_rmse) {
            best = Some((kind, rmse));
        }
    }

    if let Some((kind, _)) = best {
        return (Some(kind), Some(format!("{} {REFERENCE_REASON}", kind.name())));
    }

    if runs.iter().any(|(kind, _)| *kind == MethodKind::Rk4) {
        return (Some(MethodKind::Rk4), Some(ORDER_REASON.to_owned()));
    }

    match runs.first() {
        Some((kind, _)) => (Some(*kind), Some(FIRST_REASON.to_owned())),
        None => (None, None),
    }
}
