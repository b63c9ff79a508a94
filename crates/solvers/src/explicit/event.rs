/// Event emitted by an explicit integrator for each grid point reached.
///
/// Step 0 is the initial condition before any integration.
/// Steps 1..N are emitted after each integration step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// The step number (0 for the initial condition).
    pub step: usize,

    /// The grid point reached.
    pub t: f64,

    /// The solution value at `t`.
    pub y: f64,
}
