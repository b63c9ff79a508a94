use std::error::Error as StdError;

use thiserror::Error;

use odelab_core::{GridError, MetricsError};
use odelab_solvers::explicit;

/// Errors that can occur while solving or comparing.
///
/// Every validation error is detected before any integration work starts.
/// The absence of an analytic solution is not an error; it only removes
/// reference-dependent fields from the result.
#[derive(Debug, Error)]
pub enum Error {
    #[error("step must be positive and finite, got {step}")]
    InvalidStep { step: f64 },

    #[error("x_end ({x_end}) must be greater than x0 ({x0})")]
    InvalidDomain { x0: f64, x_end: f64 },

    #[error("initial value must be finite, got {y0}")]
    InvalidInitialValue { y0: f64 },

    #[error(
        "estimated number of points ({estimated}) exceeds the maximum allowed ({max_points}); \
         shorten the interval or increase the step"
    )]
    GridTooLarge { estimated: f64, max_points: usize },

    #[error("no methods requested")]
    NoMethods,

    #[error("unsupported method: {name}")]
    UnsupportedMethod { name: String },

    #[error("unsupported comparison: {reason}")]
    UnsupportedComparison { reason: &'static str },

    #[error("unsupported predefined equation: {id}")]
    UnknownEquation { id: String },

    #[error("invalid equation: {reason}")]
    InvalidEquation { reason: String },

    #[error("could not parse expression: {message}")]
    Parse { message: String },

    #[error("trajectories are misaligned")]
    LengthMismatch(#[from] MetricsError),

    #[error("{method} integration failed")]
    Integration {
        method: &'static str,
        #[source]
        source: explicit::Error,
    },

    #[error("internal error while preparing the equation")]
    Internal(#[source] Box<dyn StdError + Send + Sync>),
}

/// Which side of a request/response boundary an [`Error`] is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The request was invalid; retrying it unchanged will fail again.
    Client,

    /// The request was valid but could not be served.
    Server,
}

impl Error {
    /// Classifies the error for reporting across a service boundary.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidStep { .. }
            | Self::InvalidDomain { .. }
            | Self::InvalidInitialValue { .. }
            | Self::GridTooLarge { .. }
            | Self::NoMethods
            | Self::UnsupportedMethod { .. }
            | Self::UnsupportedComparison { .. }
            | Self::UnknownEquation { .. }
            | Self::InvalidEquation { .. }
            | Self::Parse { .. } => ErrorKind::Client,
            Self::LengthMismatch(_)
            | Self::Integration { .. }
            | Self::Internal(_) => ErrorKind::Server,
        }
    }
}

impl From<GridError> for Error {
    fn from(err: GridError) -> Self {
        match err {
            GridError::InvalidStep { step } => Self::InvalidStep { step },
            GridError::InvalidDomain { t0, t_end } => Self::InvalidDomain { x0: t0, x_end: t_end },
            GridError::TooLarge {
                estimated,
                max_points,
            } => Self::GridTooLarge {
                estimated,
                max_points,
            },
        }
    }
}
