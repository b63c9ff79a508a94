//! Numerical integrators for scalar initial-value problems.
//!
//! # Integrators
//!
//! - [`explicit::euler`]: forward Euler, first order
//! - [`explicit::rk4`]: classical fourth-order Runge-Kutta
//!
//! Every integrator steps over a prebuilt [`TimeGrid`], so methods compared
//! against each other always produce index-aligned trajectories.
//!
//! [`TimeGrid`]: odelab_core::TimeGrid

pub mod explicit;
