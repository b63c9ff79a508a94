use serde::{Deserialize, Serialize};

use crate::TimeGrid;

/// A single `(x, y)` sample of a solution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Solution values `y_0..y_n`, index-aligned with the [`TimeGrid`] they were
/// computed on.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Trajectory(Vec<f64>);

impl Trajectory {
    /// Returns the solution values.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the last computed value, if any.
    #[must_use]
    pub fn last(&self) -> Option<f64> {
        self.0.last().copied()
    }

    /// Pairs each value with its grid point.
    ///
    /// If the trajectory is shorter than the grid (an integration stopped
    /// early), only the computed prefix is returned.
    #[must_use]
    pub fn points(&self, grid: &TimeGrid) -> Vec<Point> {
        grid.points()
            .iter()
            .zip(&self.0)
            .map(|(&x, &y)| Point { x, y })
            .collect()
    }

    /// Consumes the trajectory and returns the underlying values.
    #[must_use]
    pub fn into_values(self) -> Vec<f64> {
        self.0
    }
}

impl From<Vec<f64>> for Trajectory {
    fn from(values: Vec<f64>) -> Self {
        Self(values)
    }
}
