use crate::{GridConfig, GridError, Rhs, TimeGrid};

/// A scalar initial-value problem `y' = f(t, y)`, `y(t0) = y0`, to be solved
/// on `[t0, t_end]` with nominal step `step`.
///
/// The problem borrows its right-hand side; the function itself is owned by
/// whoever produced it (typically a symbolic collaborator or a predefined
/// equation).
pub struct Problem<'a, R: Rhs> {
    pub rhs: &'a R,
    pub t0: f64,
    pub y0: f64,
    pub t_end: f64,
    pub step: f64,
}

impl<'a, R: Rhs> Problem<'a, R> {
    /// Creates a problem, validating the step and the domain.
    ///
    /// # Errors
    ///
    /// Returns any error of [`TimeGrid::validate`].
    pub fn new(rhs: &'a R, t0: f64, y0: f64, t_end: f64, step: f64) -> Result<Self, GridError> {
        TimeGrid::validate(t0, t_end, step)?;
        Ok(Self {
            rhs,
            t0,
            y0,
            t_end,
            step,
        })
    }

    /// Builds the grid this problem is integrated on.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::TooLarge`] if the grid would exceed
    /// `config.max_points`.
    pub fn grid(&self, config: &GridConfig) -> Result<TimeGrid, GridError> {
        TimeGrid::build(self.t0, self.t_end, self.step, config)
    }
}
