use std::fmt;
use std::str::FromStr;
use std::time::Instant;

use odelab_core::{Rhs, TimeGrid, Trajectory};
use odelab_solvers::explicit::{self, Euler, Method, Rk4};

use crate::{Error, MethodMetadata};

/// The integration methods a request may name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MethodKind {
    Euler,
    Rk4,
}

impl MethodKind {
    /// Every supported method, in catalog order.
    pub const ALL: [Self; 2] = [Self::Euler, Self::Rk4];

    /// Returns the canonical method name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Euler => Euler::NAME,
            Self::Rk4 => Rk4::NAME,
        }
    }

    /// Returns the declared order of accuracy.
    #[must_use]
    pub fn order(self) -> u32 {
        match self {
            Self::Euler => Euler::ORDER,
            Self::Rk4 => Rk4::ORDER,
        }
    }

    /// Integrates over `grid`, timing the run.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Integration`] if the integrator fails.
    pub(crate) fn run<R: Rhs>(self, rhs: &R, grid: &TimeGrid, y0: f64) -> Result<Run, Error> {
        let start = Instant::now();
        let solution = match self {
            Self::Euler => explicit::euler::solve_unobserved(rhs, grid, y0),
            Self::Rk4 => explicit::rk4::solve_unobserved(rhs, grid, y0),
        }
        .map_err(|source| Error::Integration {
            method: self.name(),
            source,
        })?;
        let elapsed = start.elapsed();

        Ok(Run {
            trajectory: solution.trajectory,
            metadata: MethodMetadata {
                order: self.order(),
                num_steps: solution.steps,
                compute_time_ms: elapsed.as_secs_f64() * 1000.0,
            },
        })
    }
}

/// A completed method run.
pub(crate) struct Run {
    pub trajectory: Trajectory,
    pub metadata: MethodMetadata,
}

impl fmt::Display for MethodKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MethodKind {
    type Err = Error;

    /// Parses a method name, ignoring ASCII case.
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| Error::UnsupportedMethod {
                name: name.to_owned(),
            })
    }
}
