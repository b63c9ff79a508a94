/// Control actions supported by the explicit integrators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop integrating and return the trajectory computed so far.
    StopEarly,
}
