use std::error::Error as StdError;

/// Errors that can occur during explicit integration.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("initial value must be finite, got {y0}")]
    InvalidInitialValue { y0: f64 },

    #[error("right-hand side failed during step {step} starting at t = {t}")]
    Rhs {
        step: usize,
        t: f64,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },
}

impl Error {
    pub(crate) fn rhs<E: StdError + Send + Sync + 'static>(step: usize, t: f64, err: E) -> Self {
        Self::Rhs {
            step,
            t,
            source: Box::new(err),
        }
    }
}
