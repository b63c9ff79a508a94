//! Pointwise and summary error metrics.
//!
//! Reference values may be missing (no reference trajectory at all) or
//! undefined at individual points (NaN, e.g. where a closed form leaves its
//! domain). Missing references yield `None`; undefined points yield NaN
//! errors that keep their index and are skipped by [`summary`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised by the metric functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MetricsError {
    #[error("approximation has {approx} values but reference has {reference}")]
    LengthMismatch { approx: usize, reference: usize },
}

/// Maximum absolute error and root-mean-square error over valid samples.
///
/// Both fields are `None` when every pointwise error is NaN (or there are no
/// samples), so there is nothing to summarize.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ErrorSummary {
    pub max: Option<f64>,
    pub rmse: Option<f64>,
}

impl ErrorSummary {
    /// A summary with no valid samples.
    pub const UNDEFINED: Self = Self {
        max: None,
        rmse: None,
    };

    /// Summarizes a slice of pointwise errors, ignoring NaN entries.
    #[must_use]
    pub fn from_errors(errors: &[f64]) -> Self {
        let (count, max, sum_sq) = errors
            .iter()
            .filter(|e| !e.is_nan())
            .fold((0_usize, f64::NEG_INFINITY, 0.0), |(n, max, sum), &e| {
                (n + 1, max.max(e), sum + e * e)
            });

        if count == 0 {
            return Self::UNDEFINED;
        }

        #[allow(clippy::cast_precision_loss)]
        let mean_sq = sum_sq / count as f64;

        Self {
            max: Some(max),
            rmse: Some(mean_sq.sqrt()),
        }
    }

    /// Returns `true` if the summary has no valid samples.
    #[must_use]
    pub fn is_undefined(&self) -> bool {
        self.max.is_none() && self.rmse.is_none()
    }
}

/// Computes `|approx[i] - reference[i]|` for every index.
///
/// Returns `Ok(None)` if there is no reference. Where the reference is NaN the
/// error is NaN, so the result stays index-aligned with the inputs.
///
/// # Errors
///
/// Returns [`MetricsError::LengthMismatch`] if the slices differ in length.
pub fn absolute_errors(
    approx: &[f64],
    reference: Option<&[f64]>,
) -> Result<Option<Vec<f64>>, MetricsError> {
    let Some(reference) = reference else {
        return Ok(None);
    };

    if approx.len() != reference.len() {
        return Err(MetricsError::LengthMismatch {
            approx: approx.len(),
            reference: reference.len(),
        });
    }

    let errors = approx
        .iter()
        .zip(reference)
        .map(|(&a, &r)| if r.is_nan() { f64::NAN } else { (a - r).abs() })
        .collect();

    Ok(Some(errors))
}

/// Summarizes the absolute errors of `approx` against `reference`.
///
/// Returns `Ok(None)` if there is no reference, and [`ErrorSummary::UNDEFINED`]
/// if every pointwise error is NaN.
///
/// # Errors
///
/// Returns [`MetricsError::LengthMismatch`] if the slices differ in length.
pub fn summary(
    approx: &[f64],
    reference: Option<&[f64]>,
) -> Result<Option<ErrorSummary>, MetricsError> {
    let errors = absolute_errors(approx, reference)?;
    Ok(errors.as_deref().map(ErrorSummary::from_errors))
}
