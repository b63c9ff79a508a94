//! Forward Euler.
//!
//! ```text
//! y_{n+1} = y_n + h_n * f(t_n, y_n)
//! ```
//!
//! First-order accurate: halving the step roughly halves the global error.
//! One evaluation of `f` per step.

use odelab_core::{Observer, Rhs, TimeGrid};

use super::{Action, Error, Event, Method, Solution};

/// The forward Euler method.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Euler;

impl Method for Euler {
    const NAME: &'static str = "Euler";
    const ORDER: u32 = 1;

    fn advance<R: Rhs>(rhs: &R, t: f64, y: f64, h: f64) -> Result<f64, R::Error> {
        Ok(y + h * rhs.eval(t, y)?)
    }
}

/// Integrates over `grid` using forward Euler.
///
/// See [`explicit::solve`](super::solve) for observer behavior.
///
/// # Errors
///
/// Returns an error if `y0` is not finite or if `f` fails at any point.
pub fn solve<R, Obs>(rhs: &R, grid: &TimeGrid, y0: f64, observer: Obs) -> Result<Solution, Error>
where
    R: Rhs,
    Obs: Observer<Event, Action>,
{
    super::solve::<Euler, R, Obs>(rhs, grid, y0, observer)
}

/// Integrates over `grid` using forward Euler without observation.
///
/// # Errors
///
/// Returns an error if `y0` is not finite or if `f` fails at any point.
pub fn solve_unobserved<R: Rhs>(rhs: &R, grid: &TimeGrid, y0: f64) -> Result<Solution, Error> {
    super::solve_unobserved::<Euler, R>(rhs, grid, y0)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use odelab_core::{GridConfig, metrics};

    use crate::explicit::Status;

    fn grid(t_end: f64, step: f64) -> TimeGrid {
        TimeGrid::build(0.0, t_end, step, &GridConfig::default()).expect("valid grid")
    }

    fn max_error_for_decay(step: f64) -> f64 {
        let grid = grid(1.0, step);
        let solution = solve_unobserved(&|_t: f64, y: f64| -2.0 * y, &grid, 1.0).unwrap();
        let exact = grid.sample(|t| (-2.0 * t).exp());

        metrics::summary(solution.trajectory.values(), Some(exact.as_slice()))
            .unwrap()
            .and_then(|s| s.max)
            .expect("defined error")
    }

    #[test]
    fn constant_slope_is_exact() {
        let grid = grid(1.0, 0.1);
        let solution = solve_unobserved(&|_t: f64, _y: f64| 2.0, &grid, 0.0).unwrap();

        assert_eq!(solution.status, Status::Complete);
        assert_eq!(solution.steps, 10);
        assert_eq!(solution.trajectory.len(), 11);
        assert_relative_eq!(solution.trajectory.last().unwrap(), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn exponential_growth_matches_compound_interest() {
        let grid = grid(1.0, 0.1);
        let solution = solve_unobserved(&|_t: f64, y: f64| y, &grid, 1.0).unwrap();

        // (1 + 0.1)^10
        assert_relative_eq!(solution.trajectory.last().unwrap(), 2.5937, epsilon = 1e-3);
        assert_relative_eq!(
            solution.trajectory.last().unwrap(),
            1.1_f64.powi(10),
            epsilon = 1e-12
        );
    }

    #[test]
    fn converges_with_first_order() {
        let coarse = max_error_for_decay(0.1);
        let fine = max_error_for_decay(0.05);
        let ratio = coarse / fine;

        assert!(ratio > 1.8 && ratio < 2.3, "convergence ratio {ratio} is not first-order");
    }

    #[test]
    fn uses_actual_final_spacing() {
        // Grid: 0, 0.3, 0.6, 0.9, 1.0. A constant slope integrates exactly
        // only if the short last interval is honored.
        let grid = grid(1.0, 0.3);
        let solution = solve_unobserved(&|_t: f64, _y: f64| 1.0, &grid, 0.0).unwrap();

        assert_eq!(solution.trajectory.len(), 5);
        assert_relative_eq!(solution.trajectory.last().unwrap(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn declares_first_order() {
        assert_eq!(Euler::ORDER, 1);
        assert_eq!(Euler::NAME, "Euler");
    }
}
