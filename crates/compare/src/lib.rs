//! Runs several integrators over one shared grid and compares them.
//!
//! The crate sits between a request boundary (HTTP handler, CLI, test) and
//! the integrators in [`odelab_solvers`]. It validates a [`CompareRequest`],
//! obtains the right-hand side from the predefined catalog or from a
//! [`Symbolic`] collaborator, integrates with every requested method, and
//! reports error metrics against the analytic solution and between methods.
//!
//! Expression parsing and closed-form solving are delegated to the
//! [`Symbolic`] trait so that any computer-algebra backend can be plugged in.
//! [`NoSymbolic`] is available for callers that only use predefined
//! equations.

mod analysis;
mod compare;
mod config;
mod equation;
mod error;
mod method;
mod request;
mod response;
mod symbolic;

pub mod catalog;

pub use analysis::{AnalysisMeta, AnalyticStatus, ErrorAnalysis, PointwiseErrors, analyze_errors};
pub use compare::{analytic_solution, compare, solve_single};
pub use config::{Config, ConfigError};
pub use equation::{Equation, EquationRhs, PredefinedEquation};
pub use error::{Error, ErrorKind};
pub use method::MethodKind;
pub use request::{
    CompareRequest, ComparisonMode, Domain, ErrorAnalysisRequest, InitialCondition,
    ProblemRequest,
};
pub use response::{
    AnalyticResult, AnalyticSolution, ComparisonResult, ErrorMetrics, MethodMetadata,
    MethodResult, ProblemSummary, SingleMethodResult,
};
pub use symbolic::{ClosedForm, NoSymbolic, Symbolic, SymbolicError};

pub use odelab_core::{ErrorSummary, GridPolicy, Point};
