use odelab_core::Rhs;

/// A one-step explicit method.
///
/// Implementors advance a single `(t, y)` pair across one interval of width
/// `h`. They hold no state between steps, so the same method can be driven
/// over any grid by [`solve`](super::solve).
pub trait Method {
    /// Display name of the method.
    const NAME: &'static str;

    /// Declared global order of accuracy `p`, where error scales as `O(h^p)`.
    const ORDER: u32;

    /// Returns the value at `t + h` given the value `y` at `t`.
    ///
    /// # Errors
    ///
    /// Returns the right-hand side's error unchanged if any evaluation fails.
    fn advance<R: Rhs>(rhs: &R, t: f64, y: f64, h: f64) -> Result<f64, R::Error>;
}
