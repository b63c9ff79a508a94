//! Core traits and types for odelab.
//!
//! This crate defines the shared abstractions that integrators and the
//! comparison engine build on:
//!
//! - [`Rhs`]: the right-hand side `f(t, y)` of a scalar ODE `y' = f(t, y)`
//! - [`Problem`]: an initial-value problem with a fixed step size
//! - [`TimeGrid`]: the ordered evaluation points shared by every method
//! - [`Trajectory`]: solution values index-aligned with a grid
//! - [`Observer`]: receives integrator events and optionally returns actions
//! - [`metrics`]: pointwise and summary error metrics

mod grid;
pub mod metrics;
mod observer;
mod problem;
mod rhs;
mod trajectory;

pub use grid::{DEFAULT_MAX_POINTS, GridConfig, GridError, GridPolicy, TimeGrid};
pub use metrics::{ErrorSummary, MetricsError};
pub use observer::Observer;
pub use problem::Problem;
pub use rhs::Rhs;
pub use trajectory::{Point, Trajectory};
