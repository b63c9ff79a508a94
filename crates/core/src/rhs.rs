use std::convert::Infallible;

/// The right-hand side `f(t, y)` of a scalar ODE `y' = f(t, y)`.
///
/// Integrators only ever call [`Rhs::eval`]; they never inspect or own the
/// function beyond a shared reference. Evaluation may fail (for example when
/// a parsed expression leaves its domain), and any error is propagated by the
/// integrators unchanged.
///
/// A non-finite `Ok` value is not an error: NaN and infinities flow into the
/// trajectory and are handled by the error metrics downstream.
///
/// Closures of the form `Fn(f64, f64) -> f64` implement `Rhs` with an
/// [`Infallible`] error.
pub trait Rhs {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the derivative at `(t, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the function cannot be evaluated at `(t, y)`.
    fn eval(&self, t: f64, y: f64) -> Result<f64, Self::Error>;
}

impl<F> Rhs for F
where
    F: Fn(f64, f64) -> f64,
{
    type Error = Infallible;

    fn eval(&self, t: f64, y: f64) -> Result<f64, Self::Error> {
        Ok(self(t, y))
    }
}
