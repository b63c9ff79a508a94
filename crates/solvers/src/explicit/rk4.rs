//! Classical fourth-order Runge-Kutta.
//!
//! ```text
//! k1 = f(t_n,         y_n)
//! k2 = f(t_n + h_n/2, y_n + h_n * k1 / 2)
//! k3 = f(t_n + h_n/2, y_n + h_n * k2 / 2)
//! k4 = f(t_n + h_n,   y_n + h_n * k3)
//! y_{n+1} = y_n + (h_n / 6) * (k1 + 2 k2 + 2 k3 + k4)
//! ```
//!
//! Fourth-order accurate: halving the step reduces the global error by
//! roughly a factor of 16. Four evaluations of `f` per step.

use odelab_core::{Observer, Rhs, TimeGrid};

use super::{Action, Error, Event, Method, Solution};

/// The classical fourth-order Runge-Kutta method.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rk4;

impl Method for Rk4 {
    const NAME: &'static str = "RK4";
    const ORDER: u32 = 4;

    fn advance<R: Rhs>(rhs: &R, t: f64, y: f64, h: f64) -> Result<f64, R::Error> {
        let half = 0.5 * h;

        let k1 = rhs.eval(t, y)?;
        let k2 = rhs.eval(t + half, y + half * k1)?;
        let k3 = rhs.eval(t + half, y + half * k2)?;
        let k4 = rhs.eval(t + h, y + h * k3)?;

        Ok(y + (h / 6.0) * (k1 + 2.0 * k2 + 2.0 * k3 + k4))
    }
}

/// Integrates over `grid` using RK4.
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
    super::solve::<Rk4, R, Obs>(rhs, grid, y0, observer)
}

/// Integrates over `grid` using RK4 without observation.
///
/// # Errors
///
/// Returns an error if `y0` is not finite or if `f` fails at any point.
pub fn solve_unobserved<R: Rhs>(rhs: &R, grid: &TimeGrid, y0: f64) -> Result<Solution, Error> {
    super::solve_unobserved::<Rk4, R>(rhs, grid, y0)
}
