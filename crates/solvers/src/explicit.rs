//! Explicit one-step integrators over a fixed grid.
//!
//! Each method advances the solution from one grid point to the next using
//! the actual spacing `h_n = t_{n+1} - t_n`, which may differ from the
//! nominal step on the final interval.
//!
//! ```text
//! y_{n+1} = advance(f, t_n, y_n, h_n)
//! ```
//!
//! # Observer Events
//!
//! The driver emits one [`Event`] for the initial condition (step 0) and one
//! after every step. Observers can return [`Action::StopEarly`] to halt and
//! receive the trajectory computed so far.
//!
//! # Example
//!
//! ```
//! use odelab_core::{GridConfig, TimeGrid};
//! use odelab_solvers::explicit::rk4;
//!
//! let grid = TimeGrid::build(0.0, 1.0, 0.1, &GridConfig::default())?;
//! let solution = rk4::solve_unobserved(&|_t: f64, y: f64| y, &grid, 1.0)?;
//!
//! let y_end = solution.trajectory.last().unwrap_or(f64::NAN);
//! assert!((y_end - std::f64::consts::E).abs() < 1e-4);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod action;
mod error;
mod event;
mod method;
mod solution;

pub mod euler;
pub mod rk4;


pub use action::Action;
pub use error::Error;
pub use event::Event;
pub use euler::Euler;
pub use method::Method;
pub use rk4::Rk4;
pub use solution::{Solution, Status};

use odelab_core::{Observer, Rhs, TimeGrid};

/// Integrates `y' = f(t, y)`, `y(grid.start()) = y0` with method `M`.
///
/// # Algorithm
///
/// 1. Emit the initial condition as step 0.
/// 2. For each interval `(t_n, h_n)` of the grid:
///    - Advance `y_n` to `y_{n+1}` using `M`.
///    - Emit an [`Event`] to the observer.
///    - If the observer returns `StopEarly`, terminate.
/// 3. Return the solution with one value per grid point.
///
/// Non-finite values returned by `f` are not checked; they propagate into
/// the trajectory.
///
/// # Errors
///
/// Returns an error if `y0` is not finite or if `f` fails at any point.
pub fn solve<M, R, Obs>(
    rhs: &R,
    grid: &TimeGrid,
    y0: f64,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    M: Method,
    R: Rhs,
    Obs: Observer<Event, Action>,
{
    if !y0.is_finite() {
        return Err(Error::InvalidInitialValue { y0 });
    }

    let mut values = Vec::with_capacity(grid.len());
    values.push(y0);

    let event = Event {
        step: 0,
        t: grid.start(),
        y: y0,
    };
    if let Some(Action::StopEarly) = observer.observe(&event) {
        return Ok(Solution {
            status: Status::StoppedByObserver,
            trajectory: values.into(),
            steps: 0,
        });
    }

    let mut y = y0;

    for (index, (t, h)) in grid.intervals().enumerate() {
        let step = index + 1;

        y = M::advance(rhs, t, y, h).map_err(|err| Error::rhs(step, t, err))?;
        values.push(y);

        let event = Event {
            step,
            t: grid.points()[step],
            y,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution {
                status: Status::StoppedByObserver,
                trajectory: values.into(),
                steps: step,
            });
        }
    }

    Ok(Solution {
        status: Status::Complete,
        trajectory: values.into(),
        steps: grid.num_steps(),
    })
}

/// Integrates with method `M` without observation.
///
/// This is a convenience wrapper around [`solve`] that discards events.
///
/// # Errors
///
/// Returns an error if `y0` is not finite or if `f` fails at any point.
pub fn solve_unobserved<M, R>(rhs: &R, grid: &TimeGrid, y0: f64) -> Result<Solution, Error>
where
    M: Method,
    R: Rhs,
{
    solve::<M, R, ()>(rhs, grid, y0, ())
}
